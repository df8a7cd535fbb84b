//! Spending analytics and budget alerts.
//!
//! This module provides pure aggregation over owner-scoped records:
//! - Monthly summary with category breakdown and month-over-month change
//! - Daily trend series
//! - Next-month forecast
//! - Threshold alerts per budget
//! - Date windows callers use to pre-filter records

pub mod alerts;
pub mod error;
pub mod service;
pub mod types;
pub mod window;


pub use alerts::AlertService;
pub use error::WindowError;
pub use service::AnalyticsService;
pub use types::{Alert, AlertSeverity, AnalyticsSummary, Forecast, TrendSeries};
pub use window::DateRange;
