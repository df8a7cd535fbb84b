//! Expense records and filtering.

pub mod filter;
pub mod types;

pub use filter::ExpenseFilter;
pub use types::{CategoryRef, ExpenseRecord, UNCATEGORIZED_LABEL};
