//! Forecast service: daily grid construction, predict-over-grid, and
//! single-date lookup.

use chrono::NaiveDate;
use common::ForecastPoint;
use std::path::Path;
use tracing::debug;

use crate::error::Result;
use crate::model::PriceModel;

/// Builds the inclusive daily grid from `start` through `end`.
///
/// Returns an empty grid when `end < start`; that is a legal request, not
/// an error.
pub fn forecast_grid(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    if end < start {
        return dates;
    }

    let mut date = start;
    while date <= end {
        dates.push(date);
        date = match date.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    dates
}

/// Wraps the pretrained model behind a pure predict operation.
///
/// The artifact is loaded once and held immutably for the session; every
/// predict action recomputes the curve from scratch, with no caching
/// across requests.
#[derive(Debug, Clone)]
pub struct Forecaster {
    model: PriceModel,
}

impl Forecaster {
    pub fn new(model: PriceModel) -> Self {
        Self { model }
    }

    /// Deserializes the artifact at `path` and wraps it.
    pub fn from_artifact(path: &Path) -> Result<Self> {
        Ok(Self::new(PriceModel::load(path)?))
    }

    /// Predicts over the full grid from `series_start` through
    /// `target_date` inclusive. The grid covers the historical span too;
    /// the model re-predicts over the entire range.
    pub fn predict(&self, series_start: NaiveDate, target_date: NaiveDate) -> Vec<ForecastPoint> {
        let grid = forecast_grid(series_start, target_date);
        debug!(%series_start, %target_date, grid_len = grid.len(), "Computing forecast");

        let values = self.model.predict(&grid);
        grid.into_iter()
            .zip(values)
            .map(|(date, value)| ForecastPoint::new(date, value))
            .collect()
    }
}

/// Exact-date lookup of a single forecast value.
///
/// `None` means "no forecast available" for that date, a user-visible
/// informational state rather than a failure. The grid is built from
/// calendar dates, so a target inside the grid's range always matches
/// exactly; there is no time-of-day component to mismatch on.
pub fn value_on(points: &[ForecastPoint], date: NaiveDate) -> Option<f64> {
    points.iter().find(|p| p.date == date).map(|p| p.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Trend;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn forecaster() -> Forecaster {
        Forecaster::new(PriceModel {
            epoch: date(2020, 1, 1),
            trend: Trend {
                intercept: 60.0,
                slope: 1.0,
                changepoints: vec![],
            },
            seasonalities: vec![],
        })
    }

    #[test]
    fn test_grid_length_is_inclusive_day_count() {
        let grid = forecast_grid(date(2020, 1, 1), date(2020, 1, 5));
        assert_eq!(grid.len(), 5);
        assert_eq!(grid[0], date(2020, 1, 1));
        assert_eq!(grid[4], date(2020, 1, 5));
    }

    #[test]
    fn test_grid_steps_by_exactly_one_day() {
        let grid = forecast_grid(date(2020, 2, 27), date(2020, 3, 2));
        for pair in grid.windows(2) {
            assert_eq!(pair[1] - pair[0], chrono::Duration::days(1));
        }
    }

    #[test]
    fn test_grid_single_day() {
        let grid = forecast_grid(date(2020, 1, 1), date(2020, 1, 1));
        assert_eq!(grid, vec![date(2020, 1, 1)]);
    }

    #[test]
    fn test_grid_empty_when_target_precedes_start() {
        assert!(forecast_grid(date(2020, 1, 1), date(2019, 1, 1)).is_empty());
    }

    /// The concrete scenario from the dashboard contract: series starting
    /// 2020-01-01, target 2020-01-05, five points, lookup returns the
    /// fifth output.
    #[test]
    fn test_predict_five_day_scenario() {
        let forecaster = forecaster();
        let points = forecaster.predict(date(2020, 1, 1), date(2020, 1, 5));

        assert_eq!(points.len(), 5);
        let target = value_on(&points, date(2020, 1, 5)).unwrap();
        assert_eq!(target, points[4].value);
        assert!((target - 64.0).abs() < 1e-9);
    }

    #[test]
    fn test_predict_before_series_start_is_empty() {
        let forecaster = forecaster();
        let points = forecaster.predict(date(2020, 1, 1), date(2019, 1, 1));

        assert!(points.is_empty());
        assert_eq!(value_on(&points, date(2019, 1, 1)), None);
    }

    #[test]
    fn test_predict_is_idempotent() {
        let forecaster = forecaster();
        let first = forecaster.predict(date(2020, 1, 1), date(2020, 6, 30));
        let second = forecaster.predict(date(2020, 1, 1), date(2020, 6, 30));
        assert_eq!(first, second);
    }

    #[test]
    fn test_lookup_misses_date_off_grid() {
        let forecaster = forecaster();
        let points = forecaster.predict(date(2020, 1, 1), date(2020, 1, 5));
        assert_eq!(value_on(&points, date(2020, 1, 6)), None);
    }
}
