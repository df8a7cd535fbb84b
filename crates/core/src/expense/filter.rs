//! In-memory expense filtering.
//!
//! Every bound is optional and inclusive; an unset bound does not constrain.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use spendwise_shared::types::{CategoryId, OwnerId};

use super::types::ExpenseRecord;

/// Criteria for selecting expenses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseFilter {
    /// Only expenses of this owner.
    pub owner_id: Option<OwnerId>,
    /// Only expenses in this category.
    pub category_id: Option<CategoryId>,
    /// Earliest date, inclusive.
    pub start_date: Option<NaiveDate>,
    /// Latest date, inclusive.
    pub end_date: Option<NaiveDate>,
    /// Smallest amount, inclusive.
    pub min_amount: Option<Decimal>,
    /// Largest amount, inclusive.
    pub max_amount: Option<Decimal>,
}

impl ExpenseFilter {
    /// Filter matching every expense of `owner_id`.
    #[must_use]
    pub fn for_owner(owner_id: OwnerId) -> Self {
        Self {
            owner_id: Some(owner_id),
            ..Self::default()
        }
    }

    /// Restricts to dates in `start..=end`.
    #[must_use]
    pub fn between(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Restricts to one category.
    #[must_use]
    pub fn in_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Restricts to amounts in `min..=max`; either side may be open.
    #[must_use]
    pub fn amount_range(mut self, min: Option<Decimal>, max: Option<Decimal>) -> Self {
        self.min_amount = min;
        self.max_amount = max;
        self
    }

    /// Returns true if `expense` satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, expense: &ExpenseRecord) -> bool {
        self.owner_id.is_none_or(|owner| expense.owner_id == owner)
            && self
                .category_id
                .is_none_or(|id| expense.category_id() == Some(id))
            && self.start_date.is_none_or(|start| expense.date >= start)
            && self.end_date.is_none_or(|end| expense.date <= end)
            && self.min_amount.is_none_or(|min| expense.amount >= min)
            && self.max_amount.is_none_or(|max| expense.amount <= max)
    }

    /// Returns the matching expenses, preserving input order.
    #[must_use]
    pub fn apply(&self, expenses: &[ExpenseRecord]) -> Vec<ExpenseRecord> {
        expenses
            .iter()
            .filter(|e| self.matches(e))
            .cloned()
            .collect()
    }
}
