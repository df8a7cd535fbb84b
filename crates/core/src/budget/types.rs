//! Budget data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use spendwise_shared::types::{BudgetId, CategoryId, OwnerId, YearMonth};

use crate::expense::CategoryRef;

/// Label used for the overall (category-less) budget.
pub const OVERALL_LABEL: &str = "Total";

/// A monthly budget record.
///
/// A record without a category is the owner's overall budget for the month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetRecord {
    /// Budget ID.
    pub id: BudgetId,
    /// Owner of the budget.
    pub owner_id: OwnerId,
    /// Month the budget applies to.
    pub month: YearMonth,
    /// Budgeted amount, never negative.
    pub amount: Decimal,
    /// Category scope; `None` for the overall budget.
    #[serde(default)]
    pub category: Option<CategoryRef>,
}

impl BudgetRecord {
    /// Returns true for the overall budget.
    #[must_use]
    pub fn is_overall(&self) -> bool {
        self.category.is_none()
    }

    /// Category ID, if this is a category budget.
    #[must_use]
    pub fn category_id(&self) -> Option<CategoryId> {
        self.category.as_ref().map(|c| c.id)
    }

    /// Display label: the category name, or `"Total"` for the overall budget.
    #[must_use]
    pub fn label(&self) -> &str {
        self.category
            .as_ref()
            .map_or(OVERALL_LABEL, |c| c.name.as_str())
    }
}

/// A proposed budget write awaiting validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetCandidate {
    /// Proposed amount.
    pub amount: Decimal,
    /// Category scope; `None` proposes the overall budget.
    pub category_id: Option<CategoryId>,
    /// ID of the record being updated, excluded from existing totals.
    pub budget_id: Option<BudgetId>,
}

impl BudgetCandidate {
    /// Candidate for a new budget.
    #[must_use]
    pub const fn create(amount: Decimal, category_id: Option<CategoryId>) -> Self {
        Self {
            amount,
            category_id,
            budget_id: None,
        }
    }

    /// Candidate for changing the amount of an existing budget.
    #[must_use]
    pub fn update(existing: &BudgetRecord, amount: Decimal) -> Self {
        Self {
            amount,
            category_id: existing.category_id(),
            budget_id: Some(existing.id),
        }
    }

    /// Returns true if the candidate is the overall budget.
    #[must_use]
    pub const fn is_overall(&self) -> bool {
        self.category_id.is_none()
    }
}

/// How much of the overall budget is allocated to categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetAllocation {
    /// Overall budget amount, if one exists.
    pub overall: Option<Decimal>,
    /// Sum of category budget amounts.
    pub allocated: Decimal,
    /// Overall minus allocated, if an overall budget exists.
    pub unallocated: Option<Decimal>,
}
