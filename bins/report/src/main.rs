//! Spendwise report runner
//!
//! Replays a dataset's budget writes through the validator and prints the
//! month's spending report as JSON.

use std::path::Path;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use spendwise_shared::AppConfig;

mod dataset;
mod report;

use dataset::Dataset;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spendwise=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let dataset = Dataset::load(Path::new(&config.report.dataset_path))?;
    info!(
        path = %config.report.dataset_path,
        expenses = dataset.expenses.len(),
        budget_writes = dataset.budget_writes.len(),
        "Dataset loaded"
    );

    let today = chrono::Local::now().date_naive();
    let report = report::build(&dataset, &config, today)?;

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
