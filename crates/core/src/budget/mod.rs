//! Budget consistency between an overall monthly budget and its category budgets.

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::BudgetError;
pub use service::BudgetService;
pub use types::{BudgetAllocation, BudgetCandidate, BudgetRecord, OVERALL_LABEL};
