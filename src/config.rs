use anyhow::{Context, Result};
use compute::{Forecaster, LoaderConfig};
use std::path::Path;
use std::sync::Arc;

use crate::schemas::AppState;

/// Initialize application state: load the historical series and the model
/// artifact once, then hold both immutably for the rest of the session.
pub fn initialize_app_state(data_file: &str, model_file: &str) -> Result<AppState> {
    tracing::info!("Loading historical series from: {}", data_file);
    let history = compute::load(&LoaderConfig::new(data_file))
        .with_context(|| format!("failed to load historical series from {}", data_file))?;

    tracing::info!("Loading model artifact from: {}", model_file);
    let forecaster = Forecaster::from_artifact(Path::new(model_file))
        .with_context(|| format!("failed to load model artifact from {}", model_file))?;

    Ok(AppState {
        history: Arc::new(history),
        forecaster: Arc::new(forecaster),
    })
}
