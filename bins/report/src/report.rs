//! Budget replay and report assembly.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use spendwise_core::analytics::{
    Alert, AlertService, AnalyticsService, AnalyticsSummary, DateRange, Forecast, TrendSeries,
};
use spendwise_core::budget::{
    BudgetAllocation, BudgetCandidate, BudgetRecord, BudgetService, OVERALL_LABEL,
};
use spendwise_core::expense::ExpenseFilter;
use spendwise_shared::types::{OwnerId, YearMonth};
use spendwise_shared::{AppConfig, AppResult};
use tracing::{info, warn};

use crate::dataset::{BudgetWrite, Dataset};

/// A budget write the validator refused.
#[derive(Debug, Clone, Serialize)]
pub struct RejectedWrite {
    /// Month of the write.
    pub month: YearMonth,
    /// Category name, or the overall budget label.
    pub label: String,
    /// Requested amount.
    pub amount: Decimal,
    /// Rejection reason shown to the user.
    pub reason: String,
}

/// Full report for one owner and month.
#[derive(Debug, Serialize)]
pub struct Report {
    /// Owner the report covers.
    pub owner_id: OwnerId,
    /// Reported month.
    pub month: YearMonth,
    /// Monthly summary.
    pub summary: AnalyticsSummary,
    /// Range covered by `trends`.
    pub trend_range: DateRange,
    /// Daily spending.
    pub trends: TrendSeries,
    /// Next-month forecast.
    pub forecast: Forecast,
    /// Budget alerts for the month.
    pub alerts: Vec<Alert>,
    /// Category allocation of the month's overall budget.
    pub allocation: BudgetAllocation,
    /// Budget writes rejected during replay.
    pub rejected_budgets: Vec<RejectedWrite>,
}

/// Applies budget writes in order, keeping only those the validator accepts.
///
/// A write for a (month, category) that already has a budget updates its
/// amount; otherwise it creates a new budget. A write carrying an `id` must
/// agree with that: it either names the budget already held for its month
/// and category, or introduces a new budget for an unbudgeted one. Any other
/// `id` is rejected, since a budget cannot move between months or categories.
pub fn replay_budgets(dataset: &Dataset) -> (Vec<BudgetRecord>, Vec<RejectedWrite>) {
    let mut applied: Vec<BudgetRecord> = Vec::new();
    let mut rejected = Vec::new();

    for write in &dataset.budget_writes {
        let by_scope = applied
            .iter()
            .position(|b| b.month == write.month && b.category_id() == write.category_id);
        let by_id = write
            .id
            .and_then(|id| applied.iter().position(|b| b.id == id));

        let position = match (write.id, by_id, by_scope) {
            (None, _, scope) => scope,
            (Some(_), Some(i), Some(j)) if i == j => Some(i),
            (Some(_), None, None) => None,
            (Some(id), _, _) => {
                let reason = format!(
                    "Budget {id} does not match the {} budget for {}",
                    label_for(dataset, write),
                    write.month
                );
                reject(dataset, write, reason, &mut rejected);
                continue;
            }
        };

        let month_budgets = BudgetService::for_month(&applied, write.month);
        let candidate = match position {
            Some(i) => BudgetCandidate::update(&applied[i], write.amount),
            None => BudgetCandidate::create(write.amount, write.category_id),
        };

        match BudgetService::validate(&month_budgets, &candidate) {
            Ok(()) => match position {
                Some(i) => applied[i].amount = write.amount,
                None => applied.push(BudgetRecord {
                    id: write.id.unwrap_or_default(),
                    owner_id: dataset.owner_id,
                    month: write.month,
                    amount: write.amount,
                    category: dataset.category(write.category_id),
                }),
            },
            Err(err) => reject(dataset, write, err.to_string(), &mut rejected),
        }
    }

    (applied, rejected)
}

fn label_for(dataset: &Dataset, write: &BudgetWrite) -> String {
    dataset
        .category(write.category_id)
        .map_or_else(|| OVERALL_LABEL.to_string(), |c| c.name)
}

fn reject(
    dataset: &Dataset,
    write: &BudgetWrite,
    reason: String,
    rejected: &mut Vec<RejectedWrite>,
) {
    let label = label_for(dataset, write);
    warn!(
        month = %write.month,
        label = %label,
        amount = %write.amount,
        reason = %reason,
        "Budget write rejected"
    );
    rejected.push(RejectedWrite {
        month: write.month,
        label,
        amount: write.amount,
        reason,
    });
}

/// Builds the report for the configured month as seen on `today`.
///
/// The forecast and trend windows are anchored on `today` when reporting the
/// current month, and on the last day of the month otherwise.
pub fn build(dataset: &Dataset, config: &AppConfig, today: NaiveDate) -> AppResult<Report> {
    let current_month = YearMonth::from_date(today);
    let month = config.report.month.unwrap_or(current_month);
    let anchor = if month == current_month {
        today
    } else {
        month.last_day()
    };

    let (budgets, rejected_budgets) = replay_budgets(dataset);
    let month_budgets = BudgetService::for_month(&budgets, month);

    let owner = ExpenseFilter::for_owner(dataset.owner_id);
    let select = |range: DateRange| range.restrict(owner.clone()).apply(&dataset.expenses);

    let current = select(DateRange::month(month));
    let previous = select(DateRange::previous_month(month));
    let trend_range = DateRange::trend(None, None, anchor, config.report.trend_months)?;

    let report = Report {
        owner_id: dataset.owner_id,
        month,
        summary: AnalyticsService::summary(&current, &previous),
        trend_range,
        trends: AnalyticsService::trends(&select(trend_range)),
        forecast: AnalyticsService::forecast(&select(DateRange::forecast(anchor))),
        alerts: AlertService::alerts(&month_budgets, &current, config.analytics.alert_order),
        allocation: BudgetService::allocation(&month_budgets),
        rejected_budgets,
    };

    info!(
        owner_id = %report.owner_id,
        month = %report.month,
        total = %report.summary.total,
        alerts = report.alerts.len(),
        rejected = report.rejected_budgets.len(),
        "Report built"
    );

    Ok(report)
}
