//! CSV export of forecast series
//!
//! Columns are `Period,Value` with ISO dates, one row per forecast month.

use std::io::{Read, Write};

use chrono::NaiveDate;
use forecast_spi::{ForecastError, ForecastPoint, ForecastSeries, IndicatorKey, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    #[serde(rename = "Period")]
    period: NaiveDate,
    #[serde(rename = "Value")]
    value: f64,
}

/// Suggested download name for a forecast of `key`
pub fn export_filename(key: IndicatorKey) -> String {
    format!("forecast_{}.csv", key)
}

/// Write `series` as CSV with a header row
pub fn write_csv<W: Write>(series: &ForecastSeries, writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for point in series.points() {
        csv.serialize(CsvRow {
            period: point.period,
            value: point.value,
        })
        .map_err(export_error)?;
    }
    csv.flush()
        .map_err(|e| ForecastError::Export(e.to_string()))?;

    debug!("Exported {} rows for {}", series.len(), series.indicator());
    Ok(())
}

/// Render `series` as a CSV string
pub fn to_csv_string(series: &ForecastSeries) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(series, &mut buf)?;
    String::from_utf8(buf).map_err(|e| ForecastError::Export(e.to_string()))
}

/// Read a series previously written by [`write_csv`]
pub fn read_csv<R: Read>(indicator: IndicatorKey, reader: R) -> Result<ForecastSeries> {
    let mut csv = csv::Reader::from_reader(reader);
    let points = csv
        .deserialize::<CsvRow>()
        .map(|row| {
            row.map(|r| ForecastPoint::new(r.period, r.value))
                .map_err(export_error)
        })
        .collect::<Result<Vec<_>>>()?;

    ForecastSeries::new(indicator, points)
}

fn export_error(e: csv::Error) -> ForecastError {
    ForecastError::Export(e.to_string())
}
