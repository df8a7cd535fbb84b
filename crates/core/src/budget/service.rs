//! Budget consistency validation.
//!
//! For one owner and month, the overall budget must never be less than the
//! sum of the category budgets. Callers pass the records already scoped to
//! that owner and month, validate, and only then write. Read, validate and
//! write must run in one storage transaction.

use rust_decimal::Decimal;
use spendwise_shared::types::{BudgetId, YearMonth};
use tracing::debug;

use super::error::BudgetError;
use super::types::{BudgetAllocation, BudgetCandidate, BudgetRecord};

/// Budget service for business logic.
pub struct BudgetService;

impl BudgetService {
    /// Validates a proposed budget write against the month's existing budgets.
    ///
    /// Equality at either boundary is accepted; only a strict shortfall or
    /// overshoot is rejected. Category budgets are unconstrained while no
    /// overall budget exists. An existing overall budget of zero is a real
    /// ceiling, so only zero-amount category budgets fit under it.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::NegativeAmount` if the amount is negative.
    /// Returns `BudgetError::OverallBelowAllocated` if a proposed overall
    /// budget is below the current category total.
    /// Returns `BudgetError::CategoryExceedsOverall` if a proposed category
    /// budget would push the category total above the overall budget.
    pub fn validate(
        existing: &[BudgetRecord],
        candidate: &BudgetCandidate,
    ) -> Result<(), BudgetError> {
        if candidate.amount < Decimal::ZERO {
            return Err(BudgetError::NegativeAmount);
        }

        if candidate.is_overall() {
            let allocated = Self::allocated_total(existing, None);
            if candidate.amount < allocated {
                debug!(
                    requested = %candidate.amount,
                    allocated = %allocated,
                    "Rejected overall budget below category allocations"
                );
                return Err(BudgetError::OverallBelowAllocated {
                    requested: candidate.amount,
                    allocated,
                });
            }
            return Ok(());
        }

        let Some(overall) = Self::overall_limit(existing) else {
            return Ok(());
        };

        let requested_total =
            Self::allocated_total(existing, candidate.budget_id) + candidate.amount;
        if requested_total > overall {
            debug!(
                requested_total = %requested_total,
                overall = %overall,
                "Rejected category budget exceeding overall budget"
            );
            return Err(BudgetError::CategoryExceedsOverall {
                requested_total,
                overall,
            });
        }

        Ok(())
    }

    /// Amount of the overall budget, or `None` if there is none.
    #[must_use]
    pub fn overall_limit(existing: &[BudgetRecord]) -> Option<Decimal> {
        existing
            .iter()
            .find(|b| b.is_overall())
            .map(|b| b.amount)
    }

    /// Sum of category budget amounts, skipping the record with `exclude` ID.
    #[must_use]
    pub fn allocated_total(existing: &[BudgetRecord], exclude: Option<BudgetId>) -> Decimal {
        existing
            .iter()
            .filter(|b| !b.is_overall())
            .filter(|b| exclude != Some(b.id))
            .map(|b| b.amount)
            .sum()
    }

    /// Summarizes how much of the overall budget categories hold.
    #[must_use]
    pub fn allocation(existing: &[BudgetRecord]) -> BudgetAllocation {
        let overall = Self::overall_limit(existing);
        let allocated = Self::allocated_total(existing, None);
        BudgetAllocation {
            overall,
            allocated,
            unallocated: overall.map(|o| o - allocated),
        }
    }

    /// Selects the budgets of one month, preserving input order.
    #[must_use]
    pub fn for_month(budgets: &[BudgetRecord], month: YearMonth) -> Vec<BudgetRecord> {
        budgets
            .iter()
            .filter(|b| b.month == month)
            .cloned()
            .collect()
    }
}
