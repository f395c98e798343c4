use chrono::NaiveDate;
use common::ForecastSeries;

use crate::api_client;

/// Requests the forecast curve through `target_date`. The backend
/// recomputes the curve on every call; repeated identical requests return
/// identical series.
pub async fn get_forecast(target_date: NaiveDate) -> Result<ForecastSeries, String> {
    log::trace!("Fetching forecast for target date {}", target_date);

    let url = format!("/forecast?target_date={}", target_date);
    let result = api_client::get::<ForecastSeries>(&url).await;

    if let Err(ref e) = result {
        log::error!("Failed to fetch forecast: {}", e);
    } else {
        log::info!("Successfully fetched forecast for {}", target_date);
    }

    result
}
