use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use common::ForecastSeries;
use compute::value_on;
use tracing::instrument;

use crate::schemas::{ApiResponse, AppState, ForecastQuery};

/// Compute the forecast curve through the target date
///
/// The grid always starts at the earliest historical date, so the curve
/// overlaps the historical span. A target date before the series start
/// yields an empty curve with no target value; that is the informational
/// "no forecast available" state, not an error.
#[utoipa::path(
    get,
    path = "/api/v1/forecast",
    tag = "forecast",
    params(
        ("target_date" = String, Query, description = "Target date (YYYY-MM-DD)"),
    ),
    responses(
        (status = 200, description = "Forecast computed successfully", body = ApiResponse<ForecastSeries>),
        (status = 400, description = "Malformed target date", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_forecast(
    Query(query): Query<ForecastQuery>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ForecastSeries>>, StatusCode> {
    let Some(series_start) = state.history.start_date() else {
        // No historical data at all; nothing to anchor the grid on.
        let response = ApiResponse {
            data: ForecastSeries::new(vec![], None),
            message: "No historical data available for forecasting".to_string(),
            success: true,
        };
        return Ok(Json(response));
    };

    // Recomputed on every predict action; no caching across requests.
    let points = state.forecaster.predict(series_start, query.target_date);
    let target_value = value_on(&points, query.target_date);

    let message = if target_value.is_some() {
        "Forecast computed successfully".to_string()
    } else {
        "No forecast available for the specified date".to_string()
    };

    let response = ApiResponse {
        data: ForecastSeries::new(points, target_value),
        message,
        success: true,
    };

    Ok(Json(response))
}
