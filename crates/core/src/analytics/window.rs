//! Date windows used to pre-filter expenses for each analytics operation.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use spendwise_shared::types::YearMonth;

use super::error::WindowError;
use crate::expense::{ExpenseFilter, ExpenseRecord};

/// Number of full months averaged by the forecast.
pub const FORECAST_MONTHS: u32 = 3;

/// Inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day, inclusive.
    pub start: NaiveDate,
    /// Last day, inclusive.
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting `start > end`.
    ///
    /// # Errors
    ///
    /// Returns `WindowError::InvalidRange` if `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, WindowError> {
        if start > end {
            return Err(WindowError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// First through last day of `month`.
    #[must_use]
    pub fn month(month: YearMonth) -> Self {
        Self {
            start: month.first_day(),
            end: month.last_day(),
        }
    }

    /// The calendar month immediately before `month`.
    #[must_use]
    pub fn previous_month(month: YearMonth) -> Self {
        Self::month(month.previous())
    }

    /// The full months averaged by the forecast: from the first day of
    /// `today`'s month minus three through the last day of the month before
    /// `today`'s. The current, partial month is excluded.
    #[must_use]
    pub fn forecast(today: NaiveDate) -> Self {
        let current = YearMonth::from_date(today);
        Self {
            start: current.minus_months(FORECAST_MONTHS).first_day(),
            end: current.previous().last_day(),
        }
    }

    /// Range for a trend series. A missing `from` defaults to `months` months
    /// before `today`, a missing `to` to `today`.
    ///
    /// # Errors
    ///
    /// Returns `WindowError::InvalidRange` if the resolved start is after the end.
    pub fn trend(
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        today: NaiveDate,
        months: u32,
    ) -> Result<Self, WindowError> {
        let start = from.unwrap_or_else(|| {
            today
                .checked_sub_months(Months::new(months))
                .unwrap_or(NaiveDate::MIN)
        });
        Self::new(start, to.unwrap_or(today))
    }

    /// Returns true if `date` falls inside the range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Narrows `filter` to this range.
    #[must_use]
    pub fn restrict(&self, filter: ExpenseFilter) -> ExpenseFilter {
        filter.between(self.start, self.end)
    }

    /// Expenses dated inside the range, preserving input order.
    #[must_use]
    pub fn select(&self, expenses: &[ExpenseRecord]) -> Vec<ExpenseRecord> {
        self.restrict(ExpenseFilter::default()).apply(expenses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_previous_month_range() {
        let range = DateRange::previous_month(YearMonth::new(2025, 3).unwrap());
        assert_eq!(range.start, date(2025, 2, 1));
        assert_eq!(range.end, date(2025, 2, 28));
    }

    #[rstest]
    #[case(date(2025, 6, 18), date(2025, 3, 1), date(2025, 5, 31))]
    #[case(date(2025, 1, 1), date(2024, 10, 1), date(2024, 12, 31))]
    #[case(date(2024, 3, 31), date(2023, 12, 1), date(2024, 2, 29))]
    fn test_forecast_window_excludes_current_month(
        #[case] today: NaiveDate,
        #[case] start: NaiveDate,
        #[case] end: NaiveDate,
    ) {
        let range = DateRange::forecast(today);
        assert_eq!(range, DateRange { start, end });
        assert!(!range.contains(today));
    }

    #[test]
    fn test_trend_defaults() {
        let today = date(2025, 5, 31);
        let range = DateRange::trend(None, None, today, 3).unwrap();
        assert_eq!(range.start, date(2025, 2, 28));
        assert_eq!(range.end, today);
    }

    #[test]
    fn test_trend_explicit_bounds() {
        let range = DateRange::trend(
            Some(date(2025, 1, 10)),
            Some(date(2025, 1, 20)),
            date(2025, 6, 1),
            3,
        )
        .unwrap();
        assert_eq!(range.start, date(2025, 1, 10));
        assert_eq!(range.end, date(2025, 1, 20));
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        assert_eq!(
            DateRange::new(date(2025, 2, 1), date(2025, 1, 1)),
            Err(WindowError::InvalidRange {
                start: date(2025, 2, 1),
                end: date(2025, 1, 1),
            })
        );
        assert!(DateRange::trend(Some(date(2025, 7, 1)), None, date(2025, 6, 1), 3).is_err());
    }

    #[test]
    fn test_single_day_range_is_valid() {
        let day = date(2025, 1, 1);
        let range = DateRange::new(day, day).unwrap();
        assert!(range.contains(day));
        assert!(!range.contains(day.succ_opt().unwrap()));
    }
}
