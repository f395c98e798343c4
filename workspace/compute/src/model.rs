//! The pretrained price model artifact.
//!
//! The artifact is produced by an external fitting tool and serialized as
//! JSON. Its functional form is a piecewise-linear trend plus additive
//! Fourier seasonality; callers treat it as a black box exposing one
//! capability, [`PriceModel::predict`] over a sequence of dates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

use crate::error::{ComputeError, Result};

/// A deserialized forecasting model. Immutable after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceModel {
    /// Reference date for the time axis; `t` is measured in days since it.
    pub epoch: NaiveDate,
    pub trend: Trend,
    #[serde(default)]
    pub seasonalities: Vec<Seasonality>,
}

/// Piecewise-linear trend component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trend {
    pub intercept: f64,
    pub slope: f64,
    /// Dated growth-rate adjustments. Each contributes
    /// `delta * (t - t_changepoint)` for dates at or past its changepoint.
    #[serde(default)]
    pub changepoints: Vec<Changepoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Changepoint {
    pub date: NaiveDate,
    pub delta: f64,
}

/// One additive seasonality block (e.g. yearly with period 365.25).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seasonality {
    pub period_days: f64,
    /// Fourier coefficient pairs for harmonics k = 1..=terms.len().
    pub terms: Vec<FourierTerm>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FourierTerm {
    pub cos: f64,
    pub sin: f64,
}

impl PriceModel {
    /// Deserializes the model artifact at `path`.
    ///
    /// A missing or undeserializable artifact is fatal for the action that
    /// requested it; the error carries the offending path.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            ComputeError::Model(format!("cannot open model artifact {}: {}", path.display(), e))
        })?;

        let model: PriceModel = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            ComputeError::Model(format!(
                "cannot deserialize model artifact {}: {}",
                path.display(),
                e
            ))
        })?;

        info!(
            epoch = %model.epoch,
            changepoints = model.trend.changepoints.len(),
            seasonalities = model.seasonalities.len(),
            "Model artifact loaded"
        );
        Ok(model)
    }

    /// Returns one forecast value per supplied date, in the same order.
    pub fn predict(&self, dates: &[NaiveDate]) -> Vec<f64> {
        dates.iter().map(|date| self.value_at(*date)).collect()
    }

    fn value_at(&self, date: NaiveDate) -> f64 {
        let t = (date - self.epoch).num_days() as f64;

        let mut value = self.trend.intercept + self.trend.slope * t;
        for changepoint in &self.trend.changepoints {
            let t_cp = (changepoint.date - self.epoch).num_days() as f64;
            if t >= t_cp {
                value += changepoint.delta * (t - t_cp);
            }
        }

        for seasonality in &self.seasonalities {
            for (k, term) in seasonality.terms.iter().enumerate() {
                let angle = 2.0 * PI * (k + 1) as f64 * t / seasonality.period_days;
                value += term.cos * angle.cos() + term.sin * angle.sin();
            }
        }

        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// A trend-only model: intercept 50, +0.5/day.
    fn linear_model() -> PriceModel {
        PriceModel {
            epoch: date(2020, 1, 1),
            trend: Trend {
                intercept: 50.0,
                slope: 0.5,
                changepoints: vec![],
            },
            seasonalities: vec![],
        }
    }

    #[test]
    fn test_linear_trend_prediction() {
        let model = linear_model();
        let dates = vec![date(2020, 1, 1), date(2020, 1, 2), date(2020, 1, 11)];
        let values = model.predict(&dates);

        assert_eq!(values.len(), 3);
        assert!((values[0] - 50.0).abs() < 1e-9);
        assert!((values[1] - 50.5).abs() < 1e-9);
        assert!((values[2] - 55.0).abs() < 1e-9);
    }

    #[test]
    fn test_changepoint_adjusts_rate_after_its_date() {
        let mut model = linear_model();
        model.trend.changepoints.push(Changepoint {
            date: date(2020, 1, 6),
            delta: -0.5,
        });

        // Before the changepoint the base slope applies; from the
        // changepoint on the rates cancel and the curve goes flat.
        let values = model.predict(&[date(2020, 1, 5), date(2020, 1, 6), date(2020, 1, 9)]);
        assert!((values[0] - 52.0).abs() < 1e-9);
        assert!((values[1] - 52.5).abs() < 1e-9);
        assert!((values[2] - 52.5).abs() < 1e-9);
    }

    #[test]
    fn test_seasonality_repeats_with_period() {
        let mut model = linear_model();
        model.trend.slope = 0.0;
        model.seasonalities.push(Seasonality {
            period_days: 7.0,
            terms: vec![FourierTerm { cos: 2.0, sin: 1.0 }],
        });

        let values = model.predict(&[date(2020, 1, 3), date(2020, 1, 10), date(2020, 1, 17)]);
        assert!((values[0] - values[1]).abs() < 1e-9);
        assert!((values[1] - values[2]).abs() < 1e-9);
        // The seasonal component actually moves the value off the intercept.
        assert!((values[0] - 50.0).abs() > 1e-3);
    }

    #[test]
    fn test_predict_is_deterministic() {
        let model = linear_model();
        let dates: Vec<NaiveDate> = (0..30).map(|i| date(2020, 1, 1) + chrono::Duration::days(i)).collect();
        assert_eq!(model.predict(&dates), model.predict(&dates));
    }

    #[test]
    fn test_load_missing_artifact_fails() {
        let result = PriceModel::load(Path::new("/nonexistent/model.json"));
        assert!(matches!(result, Err(ComputeError::Model(_))));
    }

    #[test]
    fn test_load_corrupt_artifact_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not json at all").unwrap();

        let result = PriceModel::load(file.path());
        assert!(matches!(result, Err(ComputeError::Model(_))));
    }

    #[test]
    fn test_load_round_trips_serialized_model() {
        let model = linear_model();
        let file = tempfile::NamedTempFile::new().unwrap();
        serde_json::to_writer(&file, &model).unwrap();

        let loaded = PriceModel::load(file.path()).unwrap();
        assert_eq!(loaded.epoch, model.epoch);
        assert_eq!(loaded.predict(&[date(2020, 2, 1)]), model.predict(&[date(2020, 2, 1)]));
    }
}
