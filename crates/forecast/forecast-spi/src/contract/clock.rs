//! Wall-clock contract

use chrono::NaiveDate;

/// Source of "today" for calendar alignment
pub trait Clock: Send + Sync {
    /// Current local date
    fn today(&self) -> NaiveDate;
}
