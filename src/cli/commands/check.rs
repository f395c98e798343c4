use anyhow::{Context, Result, bail};
use compute::{Forecaster, LoaderConfig};
use std::path::Path;
use tracing::{error, info};

/// Validates that the historical series and the model artifact load the
/// same way `serve` loads them, then reports what was found.
pub fn check(data_file: &str, model_file: &str) -> Result<()> {
    info!("Checking data file: {}", data_file);
    let series = match compute::load(&LoaderConfig::new(data_file)) {
        Ok(series) => series,
        Err(e) => {
            error!("Data file check failed: {}", e);
            return Err(e).context(format!("data file {} failed to load", data_file));
        }
    };

    match series.date_range() {
        Some(range) => info!(
            "Data file OK: {} points from {} to {}",
            series.len(),
            range.start,
            range.end
        ),
        None => bail!("data file {} loaded but contains no rows", data_file),
    }

    info!("Checking model artifact: {}", model_file);
    match Forecaster::from_artifact(Path::new(model_file)) {
        Ok(_) => info!("Model artifact OK"),
        Err(e) => {
            error!("Model artifact check failed: {}", e);
            return Err(e).context(format!("model artifact {} failed to load", model_file));
        }
    }

    info!("All inputs validated");
    Ok(())
}
