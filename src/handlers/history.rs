use axum::{extract::State, http::StatusCode, response::Json};
use common::PriceSeries;
use tracing::instrument;

use crate::schemas::{ApiResponse, AppState};

/// Get the full historical price series
#[utoipa::path(
    get,
    path = "/api/v1/history",
    tag = "history",
    responses(
        (status = 200, description = "Historical series retrieved successfully", body = ApiResponse<PriceSeries>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_history(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<PriceSeries>>, StatusCode> {
    // The series is loaded once at startup and immutable afterwards; this
    // handler only projects it onto the wire.
    let response = ApiResponse {
        data: (*state.history).clone(),
        message: "Historical series retrieved successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}
