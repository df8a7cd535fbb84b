//! Application configuration management.

use serde::Deserialize;

use crate::types::YearMonth;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Analytics engine configuration.
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    /// Report runner configuration.
    pub report: ReportConfig,
}

/// Order in which budget alerts are produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertOrder {
    /// Keep the order budgets were supplied in.
    #[default]
    Input,
    /// Overall budget first, then category budgets by label.
    Sorted,
}

/// Analytics engine configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyticsConfig {
    /// Ordering applied to alerts.
    #[serde(default)]
    pub alert_order: AlertOrder,
}

/// Report runner configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Path to the JSON dataset to analyze.
    pub dataset_path: String,
    /// Month to report on. Defaults to the current month.
    #[serde(default)]
    pub month: Option<YearMonth>,
    /// How many months back the trend series reaches.
    #[serde(default = "default_trend_months")]
    pub trend_months: u32,
}

fn default_trend_months() -> u32 {
    3
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("SPENDWISE").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
