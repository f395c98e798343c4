#[cfg(test)]
pub mod test_utils {
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use chrono::NaiveDate;
    use common::{PricePoint, PriceSeries};
    use compute::Forecaster;
    use compute::model::{PriceModel, Trend};
    use std::sync::Arc;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Known historical series: one point per day, 2020-01-01 through
    /// 2020-01-10.
    pub fn test_history() -> PriceSeries {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let points = (0..10)
            .map(|i| PricePoint::new(start + chrono::Duration::days(i), 61.0 + i as f64))
            .collect();
        PriceSeries::new(points)
    }

    /// Trend-only model: 60.0 at the series start, +0.5 per day. The n-th
    /// grid value is therefore 60.0 + 0.5 * (n - 1).
    pub fn test_forecaster() -> Forecaster {
        Forecaster::new(PriceModel {
            epoch: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            trend: Trend {
                intercept: 60.0,
                slope: 0.5,
                changepoints: vec![],
            },
            seasonalities: vec![],
        })
    }

    /// Create AppState for testing
    pub fn setup_test_app_state() -> AppState {
        AppState {
            history: Arc::new(test_history()),
            forecaster: Arc::new(test_forecaster()),
        }
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing
    pub fn setup_test_app() -> Router {
        let _ = init_test_tracing();

        let state = setup_test_app_state();
        create_router(state)
    }
}
