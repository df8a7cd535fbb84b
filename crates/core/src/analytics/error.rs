//! Analytics error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors building a date window.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    /// Invalid date range.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },
}

impl From<WindowError> for spendwise_shared::AppError {
    fn from(err: WindowError) -> Self {
        Self::Validation(err.to_string())
    }
}
