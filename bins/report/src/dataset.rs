//! JSON dataset of one owner's categories, expenses and budget writes.

use std::collections::HashMap;
use std::path::Path;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use spendwise_core::expense::{CategoryRef, ExpenseRecord};
use spendwise_shared::types::{BudgetId, CategoryId, ExpenseId, OwnerId, YearMonth};
use spendwise_shared::{AppError, AppResult};

/// Raw dataset as stored on disk.
#[derive(Debug, Deserialize)]
struct RawDataset {
    owner_id: OwnerId,
    #[serde(default)]
    categories: Vec<CategoryRef>,
    #[serde(default)]
    expenses: Vec<ExpenseRow>,
    #[serde(default)]
    budgets: Vec<BudgetWrite>,
}

#[derive(Debug, Deserialize)]
struct ExpenseRow {
    #[serde(default)]
    id: Option<ExpenseId>,
    amount: Decimal,
    date: NaiveDate,
    #[serde(default)]
    category_id: Option<CategoryId>,
    #[serde(default)]
    description: Option<String>,
}

/// A budget write in the order it was submitted.
#[derive(Debug, Clone, Deserialize)]
pub struct BudgetWrite {
    /// Explicit ID; generated when absent.
    #[serde(default)]
    pub id: Option<BudgetId>,
    /// Month the budget applies to.
    pub month: YearMonth,
    /// Requested amount.
    pub amount: Decimal,
    /// Category scope; absent for the overall budget.
    #[serde(default)]
    pub category_id: Option<CategoryId>,
}

/// Dataset with categories resolved onto records.
#[derive(Debug)]
pub struct Dataset {
    /// Owner of every record.
    pub owner_id: OwnerId,
    /// Known categories by ID.
    pub categories: HashMap<CategoryId, CategoryRef>,
    /// Expenses with categories attached.
    pub expenses: Vec<ExpenseRecord>,
    /// Budget writes to replay.
    pub budget_writes: Vec<BudgetWrite>,
}

impl Dataset {
    /// Reads and resolves a dataset file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::NotFound(format!("Dataset {} could not be read: {e}", path.display()))
        })?;
        Self::from_json(&raw)
    }

    /// Parses and resolves a dataset from JSON text.
    pub fn from_json(json: &str) -> AppResult<Self> {
        let raw: RawDataset = serde_json::from_str(json)
            .map_err(|e| AppError::Validation(format!("Malformed dataset: {e}")))?;

        let categories: HashMap<CategoryId, CategoryRef> = raw
            .categories
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        let expenses = raw
            .expenses
            .into_iter()
            .map(|row| {
                if row.amount < Decimal::ZERO {
                    return Err(AppError::Validation(format!(
                        "Expense on {} has a negative amount",
                        row.date
                    )));
                }
                Ok(ExpenseRecord {
                    id: row.id.unwrap_or_default(),
                    owner_id: raw.owner_id,
                    amount: row.amount,
                    date: row.date,
                    category: resolve(&categories, row.category_id)?,
                    description: row.description,
                })
            })
            .collect::<AppResult<Vec<_>>>()?;

        for write in &raw.budgets {
            resolve(&categories, write.category_id)?;
        }

        Ok(Self {
            owner_id: raw.owner_id,
            categories,
            expenses,
            budget_writes: raw.budgets,
        })
    }

    /// Category reference for `id`, if known.
    ///
    /// Writes are checked at load time, so known IDs always resolve.
    #[must_use]
    pub fn category(&self, id: Option<CategoryId>) -> Option<CategoryRef> {
        id.and_then(|id| self.categories.get(&id).cloned())
    }
}

fn resolve(
    categories: &HashMap<CategoryId, CategoryRef>,
    id: Option<CategoryId>,
) -> AppResult<Option<CategoryRef>> {
    id.map(|id| {
        categories
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Category {id}")))
    })
    .transpose()
}
