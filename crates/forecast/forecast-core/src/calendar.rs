//! Month-start calendar arithmetic

use chrono::{Datelike, Months, NaiveDate};
use forecast_spi::{ForecastError, Result};

/// First day of the month following `today`
///
/// A date that is already the first of a month still advances a full month.
pub fn next_month_start(today: NaiveDate) -> Result<NaiveDate> {
    today
        .with_day(1)
        .and_then(|d| d.checked_add_months(Months::new(1)))
        .ok_or_else(|| ForecastError::InvalidSeries(format!("no month follows {}", today)))
}

/// `count` consecutive month starts beginning at `start`
pub fn month_starts(start: NaiveDate, count: usize) -> Result<Vec<NaiveDate>> {
    (0..count)
        .map(|i| {
            u32::try_from(i)
                .ok()
                .and_then(|i| start.checked_add_months(Months::new(i)))
                .ok_or_else(|| {
                    ForecastError::InvalidSeries(format!(
                        "calendar overflow {} months after {}",
                        i, start
                    ))
                })
        })
        .collect()
}
