//! Core business logic for Spendwise.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Callers load owner-scoped records, hand them in as slices, and persist or
//! return the results verbatim. Nothing here retains state between calls.
//!
//! # Modules
//!
//! - `expense` - Expense and category records, in-memory filtering
//! - `budget` - Overall vs. category budget consistency validation
//! - `analytics` - Summaries, trends, forecasts, budget alerts, date windows

pub mod analytics;
pub mod budget;
pub mod expense;
