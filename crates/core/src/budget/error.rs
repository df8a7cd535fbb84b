//! Budget error types.

use rust_decimal::Decimal;
use spendwise_shared::AppError;
use thiserror::Error;

/// Reasons a budget write is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BudgetError {
    /// Amount cannot be negative.
    #[error("Amount cannot be negative")]
    NegativeAmount,

    /// Overall budget would be lower than what categories already hold.
    #[error(
        "Overall budget ({requested}) cannot be less than the total of category budgets ({allocated})"
    )]
    OverallBelowAllocated {
        /// Proposed overall amount.
        requested: Decimal,
        /// Current sum of category budgets.
        allocated: Decimal,
    },

    /// Category budgets would add up to more than the overall budget.
    #[error("Category budgets would total {requested_total}, exceeding the overall budget ({overall})")]
    CategoryExceedsOverall {
        /// Sum of category budgets including the proposed amount.
        requested_total: Decimal,
        /// Overall budget amount.
        overall: Decimal,
    },
}

impl From<BudgetError> for AppError {
    fn from(err: BudgetError) -> Self {
        match err {
            BudgetError::NegativeAmount => Self::Validation(err.to_string()),
            BudgetError::OverallBelowAllocated { .. }
            | BudgetError::CategoryExceedsOverall { .. } => Self::BusinessRule(err.to_string()),
        }
    }
}
