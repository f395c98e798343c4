use common::PriceSeries;

use crate::api_client;

/// Fetches the full historical price series.
pub async fn get_history() -> Result<PriceSeries, String> {
    log::trace!("Fetching historical price series");

    let result = api_client::get::<PriceSeries>("/history").await;

    if let Err(ref e) = result {
        log::error!("Failed to fetch historical series: {}", e);
    } else {
        log::info!("Successfully fetched historical series");
    }

    result
}
