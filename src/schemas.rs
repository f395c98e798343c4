use chrono::NaiveDate;
use common::{DateRange, ForecastPoint, ForecastSeries, PricePoint, PriceSeries};
use compute::Forecaster;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Historical price series, loaded once at startup
    pub history: Arc<PriceSeries>,
    /// Pretrained model behind a pure predict operation
    pub forecaster: Arc<Forecaster>,
}

/// Query parameters for the forecast endpoint
#[derive(Debug, Deserialize, ToSchema)]
pub struct ForecastQuery {
    /// Target date for the forecast (YYYY-MM-DD)
    pub target_date: NaiveDate,
}

/// API response wrapper
#[derive(Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

/// Error response
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Model artifact status
    pub model: String,
    /// Number of loaded historical points
    pub history_points: usize,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::history::get_history,
        crate::handlers::forecast::get_forecast,
    ),
    components(
        schemas(
            ApiResponse<PriceSeries>,
            ApiResponse<ForecastSeries>,
            ErrorResponse,
            HealthResponse,
            ForecastQuery,
            PricePoint,
            PriceSeries,
            ForecastPoint,
            ForecastSeries,
            DateRange,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "history", description = "Historical price series endpoints"),
        (name = "forecast", description = "Price forecast endpoints"),
    ),
    info(
        title = "Crudecast API",
        description = "Crude Oil Price Forecast Dashboard - serves the historical WTI spot price series and forecasts from a pretrained model",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
