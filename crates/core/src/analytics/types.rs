//! Analytics data types.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Spending summary for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    /// Total spent in the month.
    pub total: Decimal,
    /// Spending per category label.
    pub by_category: BTreeMap<String, Decimal>,
    /// Percentage change against the previous month.
    pub month_over_month_change: Decimal,
}

/// Next-month spending forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forecast {
    /// Predicted spending for the next month.
    pub predicted_total: Decimal,
    /// Confidence in the prediction, between 0 and 1.
    pub confidence: Decimal,
}

/// Spending per calendar date. Dates without expenses are absent.
pub type TrendSeries = BTreeMap<NaiveDate, Decimal>;

/// Alert severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    /// Spending is above the budget.
    Exceeded,
    /// Spending is above 80% of the budget.
    Warning,
}

/// A budget alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Severity.
    pub severity: AlertSeverity,
    /// Category name, or "Total" for the overall budget.
    pub label: String,
    /// Amount spent in the budget's scope.
    pub spent: Decimal,
    /// Budget limit.
    pub limit: Decimal,
    /// User-facing message.
    pub message: String,
}
