//! Expense data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use spendwise_shared::types::{CategoryId, ExpenseId, OwnerId};

/// Label used for expenses without a category.
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// Reference to a category: its identifier plus display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryRef {
    /// Category ID.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
}

impl CategoryRef {
    /// Creates a category reference.
    #[must_use]
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A single expense as loaded from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Expense ID.
    pub id: ExpenseId,
    /// Owner of the expense.
    pub owner_id: OwnerId,
    /// Amount spent, never negative.
    pub amount: Decimal,
    /// Calendar date of the expense.
    pub date: NaiveDate,
    /// Category, if the expense was categorized.
    #[serde(default)]
    pub category: Option<CategoryRef>,
    /// Optional free-text description.
    #[serde(default)]
    pub description: Option<String>,
}

impl ExpenseRecord {
    /// Label used when grouping by category.
    #[must_use]
    pub fn category_label(&self) -> &str {
        self.category
            .as_ref()
            .map_or(UNCATEGORIZED_LABEL, |c| c.name.as_str())
    }

    /// Category ID, if any.
    #[must_use]
    pub fn category_id(&self) -> Option<CategoryId> {
        self.category.as_ref().map(|c| c.id)
    }
}
