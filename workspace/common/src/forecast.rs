use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::DateRange;

/// One model output on the daily forecast grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ForecastPoint {
    /// Grid date (YYYY-MM-DD)
    pub date: NaiveDate,
    /// Forecasted price in USD/BBL
    pub value: f64,
}

impl ForecastPoint {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// The forecast curve returned for one predict action. The curve always
/// starts at the earliest historical date, so it overlaps the historical
/// span as well as extending past it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ForecastSeries {
    /// One point per day from the series start through the target date.
    pub points: Vec<ForecastPoint>,
    /// The forecasted value for the requested target date, if the target
    /// fell on the produced grid. `None` is the "no forecast available"
    /// informational state, not an error.
    pub target_value: Option<f64>,
    /// Range covered by `points`; `None` when the grid came out empty.
    pub date_range: Option<DateRange>,
}

impl ForecastSeries {
    pub fn new(points: Vec<ForecastPoint>, target_value: Option<f64>) -> Self {
        let date_range = match (points.first(), points.last()) {
            (Some(first), Some(last)) => Some(DateRange {
                start: first.date,
                end: last.date,
            }),
            _ => None,
        };

        Self {
            points,
            target_value,
            date_range,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_series_derives_range_from_points() {
        let series = ForecastSeries::new(
            vec![
                ForecastPoint::new(date(2020, 1, 1), 60.0),
                ForecastPoint::new(date(2020, 1, 2), 60.5),
            ],
            Some(60.5),
        );

        let range = series.date_range.unwrap();
        assert_eq!(range.start, date(2020, 1, 1));
        assert_eq!(range.end, date(2020, 1, 2));
    }

    #[test]
    fn test_empty_series_has_no_range() {
        let series = ForecastSeries::new(vec![], None);
        assert!(series.is_empty());
        assert!(series.date_range.is_none());
        assert!(series.target_value.is_none());
    }
}
