//! Calendar month type used to scope budgets.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a month cannot be built or parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonthParseError {
    /// The input was not in `YYYY-MM` form.
    #[error("Invalid month format: {0} (expected YYYY-MM)")]
    InvalidFormat(String),

    /// The month number was outside 1..=12 or the year is unsupported.
    #[error("Month out of range: {year}-{month}")]
    OutOfRange {
        /// Year component.
        year: i32,
        /// Month component.
        month: u32,
    },
}

/// A `(year, month)` pair, serialized as `YYYY-MM`.
///
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a month, validating the month number.
    ///
    /// # Errors
    ///
    /// Returns `MonthParseError::OutOfRange` if `month` is not in 1..=12 or
    /// the year is outside chrono's supported date range.
    pub fn new(year: i32, month: u32) -> Result<Self, MonthParseError> {
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(MonthParseError::OutOfRange { year, month });
        }
        Ok(Self { year, month })
    }

    /// Returns the month containing `date`.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Year component.
    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Month component (1-12).
    #[must_use]
    pub const fn month(self) -> u32 {
        self.month
    }

    /// First day of the month.
    #[must_use]
    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Last day of the month.
    #[must_use]
    pub fn last_day(self) -> NaiveDate {
        self.first_day()
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    /// Returns true if `date` falls within this month.
    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The month immediately preceding this one.
    #[must_use]
    pub fn previous(self) -> Self {
        self.minus_months(1)
    }

    /// The month `n` months before this one.
    #[must_use]
    pub fn minus_months(self, n: u32) -> Self {
        self.first_day()
            .checked_sub_months(Months::new(n))
            .map_or(self, Self::from_date)
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl std::str::FromStr for YearMonth {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| MonthParseError::InvalidFormat(s.to_string()))?;
        let year: i32 = year
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        Self::new(year, month)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = MonthParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}
