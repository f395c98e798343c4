//! Historical series loader.
//!
//! Reads the tabular price source through polars with an explicitly
//! declared schema, renames the source-specific columns to the canonical
//! `date`/`price` pair, and produces the ordered [`PriceSeries`]. Any row
//! that does not match the declared schema fails the whole load; there is
//! no silent row dropping.

use chrono::NaiveDate;
use common::{PricePoint, PriceSeries};
use polars::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::error::{ComputeError, Result};

/// Header of the date column in the published WTI spot-price export.
pub const WTI_DATE_COLUMN: &str = "Date";
/// Header of the price column in the published WTI spot-price export.
pub const WTI_PRICE_COLUMN: &str = "Cushing, OK WTI Spot Price FOB (Dollars per Barrel)";

/// Declared schema of the source table: which columns hold the date and
/// the price, and how the dates are formatted.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    pub path: PathBuf,
    pub date_column: String,
    pub price_column: String,
    pub date_format: String,
}

impl LoaderConfig {
    /// Configuration for the WTI spot-price export at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            date_column: WTI_DATE_COLUMN.to_string(),
            price_column: WTI_PRICE_COLUMN.to_string(),
            date_format: "%Y-%m-%d".to_string(),
        }
    }
}

/// Loads the historical price series. Called once at startup; the result
/// is immutable for the rest of the session.
pub fn load(config: &LoaderConfig) -> Result<PriceSeries> {
    let mut schema = Schema::with_capacity(2);
    schema.with_column(config.date_column.as_str().into(), DataType::String);
    schema.with_column(config.price_column.as_str().into(), DataType::Float64);

    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_schema_overwrite(Some(Arc::new(schema)))
        .try_into_reader_with_file_path(Some(config.path.clone()))
        .map_err(|e| {
            ComputeError::DataFrame(format!("cannot read {}: {}", config.path.display(), e))
        })?
        .finish()?;

    for column in [&config.date_column, &config.price_column] {
        if df.get_column_index(column).is_none() {
            return Err(ComputeError::Schema(format!(
                "source {} is missing the declared column '{}'",
                config.path.display(),
                column
            )));
        }
    }

    df.rename(&config.date_column, "date".into())?;
    df.rename(&config.price_column, "price".into())?;

    // Two-column projection; whatever else the source carries is dropped.
    let df = df.select(["date", "price"])?;

    let points = extract_points(&df, &config.date_format)?;
    info!(rows = points.len(), path = %config.path.display(), "Historical series loaded");

    Ok(PriceSeries::new(points))
}

fn extract_points(df: &DataFrame, date_format: &str) -> Result<Vec<PricePoint>> {
    let date_col = df.column("date")?;
    let price_col = df.column("price")?;

    let mut points = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let date_str = match date_col.get(i)? {
            AnyValue::String(s) => s.to_string(),
            AnyValue::StringOwned(s) => s.to_string(),
            other => {
                return Err(ComputeError::Date(format!(
                    "row {}: expected a date string, got {}",
                    i, other
                )));
            }
        };

        let date = NaiveDate::parse_from_str(&date_str, date_format).map_err(|e| {
            ComputeError::Date(format!("row {}: unparseable date '{}': {}", i, date_str, e))
        })?;

        let price = match price_col.get(i)? {
            AnyValue::Float64(v) => v,
            other => {
                return Err(ComputeError::Schema(format!(
                    "row {}: expected a price number, got {}",
                    i, other
                )));
            }
        };

        points.push(PricePoint::new(date, price));
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn wti_config(file: &NamedTempFile) -> LoaderConfig {
        LoaderConfig::new(file.path())
    }

    #[test]
    fn test_load_renames_and_orders() {
        let file = write_csv(
            "Date,\"Cushing, OK WTI Spot Price FOB (Dollars per Barrel)\"\n\
             2020-01-01,61.17\n\
             2020-01-02,61.18\n\
             2020-01-03,63.05\n",
        );

        let series = load(&wti_config(&file)).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.start_date(), NaiveDate::from_ymd_opt(2020, 1, 1));
        assert_eq!(series.end_date(), NaiveDate::from_ymd_opt(2020, 1, 3));
        assert_eq!(series.points[2].price, 63.05);
    }

    #[test]
    fn test_load_drops_extra_columns() {
        let file = write_csv(
            "Date,\"Cushing, OK WTI Spot Price FOB (Dollars per Barrel)\",Volume\n\
             2020-01-01,61.17,1000\n",
        );

        let series = load(&wti_config(&file)).unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series.points[0].price, 61.17);
    }

    #[test]
    fn test_load_fails_on_unparseable_date() {
        let file = write_csv(
            "Date,\"Cushing, OK WTI Spot Price FOB (Dollars per Barrel)\"\n\
             2020-01-01,61.17\n\
             not-a-date,61.18\n",
        );

        let result = load(&wti_config(&file));
        assert!(matches!(result, Err(ComputeError::Date(_))));
    }

    #[test]
    fn test_load_fails_on_missing_price_cell() {
        let file = write_csv(
            "Date,\"Cushing, OK WTI Spot Price FOB (Dollars per Barrel)\"\n\
             2020-01-01,\n",
        );

        let result = load(&wti_config(&file));
        assert!(matches!(result, Err(ComputeError::Schema(_))));
    }

    #[test]
    fn test_load_fails_on_missing_declared_column() {
        let file = write_csv("Date,Close\n2020-01-01,61.17\n");

        assert!(load(&wti_config(&file)).is_err());
    }

    #[test]
    fn test_custom_date_format() {
        let file = write_csv(
            "Date,\"Cushing, OK WTI Spot Price FOB (Dollars per Barrel)\"\n\
             01/02/2020,61.18\n",
        );

        let mut config = wti_config(&file);
        config.date_format = "%m/%d/%Y".to_string();

        let series = load(&config).unwrap();
        assert_eq!(series.start_date(), NaiveDate::from_ymd_opt(2020, 1, 2));
    }
}
