//! Spending aggregation service.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use spendwise_shared::types::money::round_half_up;

use super::types::{AnalyticsSummary, Forecast, TrendSeries};
use super::window::FORECAST_MONTHS;
use crate::expense::ExpenseRecord;

/// Confidence reported for a non-empty forecast (0.7).
pub const FORECAST_CONFIDENCE: Decimal = Decimal::from_parts(7, 0, 0, false, 1);

/// Service for aggregating expenses.
pub struct AnalyticsService;

impl AnalyticsService {
    /// Sum of expense amounts; zero for no expenses.
    #[must_use]
    pub fn total(expenses: &[ExpenseRecord]) -> Decimal {
        expenses.iter().map(|e| e.amount).sum()
    }

    /// Summarizes one month of expenses against the month before it.
    ///
    /// `current` holds the month's expenses and `previous` those of the
    /// calendar month immediately preceding it (see
    /// [`DateRange::previous_month`](super::window::DateRange::previous_month)).
    ///
    /// The month-over-month change is the ratio `(total - prev) / prev`
    /// rounded half-up to two places, then scaled by 100, so it always lands
    /// on a whole percent (`29.00`). It is zero when the previous month had
    /// no spending.
    #[must_use]
    pub fn summary(current: &[ExpenseRecord], previous: &[ExpenseRecord]) -> AnalyticsSummary {
        let total = Self::total(current);

        let mut by_category: BTreeMap<String, Decimal> = BTreeMap::new();
        for expense in current {
            *by_category
                .entry(expense.category_label().to_string())
                .or_default() += expense.amount;
        }

        let previous_total = Self::total(previous);
        let month_over_month_change = if previous_total.is_zero() {
            Decimal::ZERO
        } else {
            round_half_up((total - previous_total) / previous_total) * Decimal::ONE_HUNDRED
        };

        AnalyticsSummary {
            total,
            by_category,
            month_over_month_change,
        }
    }

    /// Forecasts next month's spending as the mean of the three full months
    /// before the current one.
    ///
    /// `expenses` must already be limited to
    /// [`DateRange::forecast`](super::window::DateRange::forecast). The
    /// divisor is always three, even when some of those months have no
    /// expenses.
    #[must_use]
    pub fn forecast(expenses: &[ExpenseRecord]) -> Forecast {
        if expenses.is_empty() {
            return Forecast {
                predicted_total: Decimal::ZERO,
                confidence: Decimal::ZERO,
            };
        }

        Forecast {
            predicted_total: round_half_up(Self::total(expenses) / Decimal::from(FORECAST_MONTHS)),
            confidence: FORECAST_CONFIDENCE,
        }
    }

    /// Daily spending totals for the supplied expenses.
    #[must_use]
    pub fn trends(expenses: &[ExpenseRecord]) -> TrendSeries {
        let mut series = TrendSeries::new();
        for expense in expenses {
            *series.entry(expense.date).or_default() += expense.amount;
        }
        series
    }
}
