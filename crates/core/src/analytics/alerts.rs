//! Budget threshold alerts.
//!
//! Each budget yields at most one alert: exceeded when spending is above
//! the limit, a warning when it is above 80% of it, otherwise nothing.

use rust_decimal::Decimal;
use spendwise_shared::config::AlertOrder;
use spendwise_shared::types::money::dollars;
use tracing::debug;

use super::types::{Alert, AlertSeverity};
use crate::budget::BudgetRecord;
use crate::expense::ExpenseRecord;

/// Fraction of the limit above which a warning is raised (0.8).
pub const WARNING_RATIO: Decimal = Decimal::from_parts(8, 0, 0, false, 1);

/// Service for evaluating budgets against spending.
pub struct AlertService;

impl AlertService {
    /// Amount spent within a budget's scope and month.
    ///
    /// A category budget counts expenses of that category; the overall
    /// budget counts every expense.
    #[must_use]
    pub fn spent_for(budget: &BudgetRecord, expenses: &[ExpenseRecord]) -> Decimal {
        let category_id = budget.category_id();
        expenses
            .iter()
            .filter(|e| budget.month.contains(e.date))
            .filter(|e| category_id.is_none() || e.category_id() == category_id)
            .map(|e| e.amount)
            .sum()
    }

    /// Evaluates one budget given what was spent against it.
    #[must_use]
    pub fn evaluate(budget: &BudgetRecord, spent: Decimal) -> Option<Alert> {
        let limit = budget.amount;
        let label = budget.label();

        let (severity, message) = if spent > limit {
            (
                AlertSeverity::Exceeded,
                format!(
                    "Alert: You have exceeded your {label} budget! ({} / {})",
                    dollars(spent),
                    dollars(limit)
                ),
            )
        } else if spent > limit * WARNING_RATIO {
            (
                AlertSeverity::Warning,
                format!(
                    "Warning: You have reached 80% of your {label} budget. ({} / {})",
                    dollars(spent),
                    dollars(limit)
                ),
            )
        } else {
            return None;
        };

        debug!(budget_id = %budget.id, label, %spent, %limit, ?severity, "Budget alert raised");

        Some(Alert {
            severity,
            label: label.to_string(),
            spent,
            limit,
            message,
        })
    }

    /// Alerts for budgets paired with their precomputed spending.
    #[must_use]
    pub fn alerts_for_spent(entries: &[(BudgetRecord, Decimal)], order: AlertOrder) -> Vec<Alert> {
        let mut ordered: Vec<&(BudgetRecord, Decimal)> = entries.iter().collect();
        if order == AlertOrder::Sorted {
            ordered.sort_by(|(a, _), (b, _)| {
                (!a.is_overall(), a.label()).cmp(&(!b.is_overall(), b.label()))
            });
        }

        ordered
            .into_iter()
            .filter_map(|(budget, spent)| Self::evaluate(budget, *spent))
            .collect()
    }

    /// Alerts for the current month's budgets given the month's expenses.
    #[must_use]
    pub fn alerts(
        budgets: &[BudgetRecord],
        expenses: &[ExpenseRecord],
        order: AlertOrder,
    ) -> Vec<Alert> {
        let entries: Vec<(BudgetRecord, Decimal)> = budgets
            .iter()
            .map(|b| (b.clone(), Self::spent_for(b, expenses)))
            .collect();
        Self::alerts_for_spent(&entries, order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expense::CategoryRef;
    use chrono::NaiveDate;
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use spendwise_shared::types::{BudgetId, CategoryId, ExpenseId, OwnerId, YearMonth};

    fn month() -> YearMonth {
        YearMonth::new(2025, 6).unwrap()
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    fn budget(amount: Decimal, category: Option<&CategoryRef>) -> BudgetRecord {
        BudgetRecord {
            id: BudgetId::new(),
            owner_id: OwnerId::default(),
            month: month(),
            amount,
            category: category.cloned(),
        }
    }

    fn expense(amount: Decimal, date: NaiveDate, category: Option<&CategoryRef>) -> ExpenseRecord {
        ExpenseRecord {
            id: ExpenseId::new(),
            owner_id: OwnerId::default(),
            amount,
            date,
            category: category.cloned(),
            description: None,
        }
    }

    #[test]
    fn test_warning_at_90_percent_of_food_budget() {
        let food = CategoryRef::new(CategoryId::new(), "Food");
        let budgets = vec![budget(dec!(200.00), None), budget(dec!(100.00), Some(&food))];
        let expenses = vec![expense(dec!(90.00), day(10), Some(&food))];

        let alerts = AlertService::alerts(&budgets, &expenses, AlertOrder::Input);

        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, AlertSeverity::Warning);
        assert_eq!(
            alerts[0].message,
            "Warning: You have reached 80% of your Food budget. ($90.00 / $100.00)"
        );
    }

    #[test]
    fn test_exceeded_food_budget() {
        let food = CategoryRef::new(CategoryId::new(), "Food");
        let budgets = vec![budget(dec!(200.00), None), budget(dec!(100.00), Some(&food))];
        let expenses = vec![expense(dec!(150.00), day(10), Some(&food))];

        let alerts = AlertService::alerts(&budgets, &expenses, AlertOrder::Input);

        // Overall: 150 of 200 is 75%, no alert.
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, AlertSeverity::Exceeded);
        assert!(alerts[0].message.contains("exceeded"));
        assert!(alerts[0].message.contains("Food"));
        assert_eq!(
            alerts[0].message,
            "Alert: You have exceeded your Food budget! ($150.00 / $100.00)"
        );
    }

    #[test]
    fn test_overall_budget_is_labeled_total_and_counts_everything() {
        let food = CategoryRef::new(CategoryId::new(), "Food");
        let budgets = vec![budget(dec!(100), None)];
        let expenses = vec![
            expense(dec!(60), day(1), Some(&food)),
            expense(dec!(45), day(2), None),
        ];

        let alerts = AlertService::alerts(&budgets, &expenses, AlertOrder::Input);

        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].label, "Total");
        assert_eq!(alerts[0].spent, dec!(105));
        assert_eq!(
            alerts[0].message,
            "Alert: You have exceeded your Total budget! ($105 / $100)"
        );
    }

    #[rstest]
    #[case(dec!(80.00), None)]
    #[case(dec!(80.01), Some(AlertSeverity::Warning))]
    #[case(dec!(100.00), Some(AlertSeverity::Warning))]
    #[case(dec!(100.01), Some(AlertSeverity::Exceeded))]
    #[case(dec!(0), None)]
    fn test_threshold_boundaries(#[case] spent: Decimal, #[case] expected: Option<AlertSeverity>) {
        let b = budget(dec!(100.00), None);
        assert_eq!(AlertService::evaluate(&b, spent).map(|a| a.severity), expected);
    }

    #[test]
    fn test_zero_budget_alerts_on_any_spending() {
        let b = budget(Decimal::ZERO, None);
        assert_eq!(AlertService::evaluate(&b, Decimal::ZERO), None);
        assert_eq!(
            AlertService::evaluate(&b, dec!(0.01)).map(|a| a.severity),
            Some(AlertSeverity::Exceeded)
        );
    }

    #[test]
    fn test_spending_outside_budget_month_is_ignored() {
        let food = CategoryRef::new(CategoryId::new(), "Food");
        let b = budget(dec!(100), Some(&food));
        let expenses = vec![
            expense(dec!(70), day(30), Some(&food)),
            expense(dec!(500), NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(), Some(&food)),
        ];

        assert_eq!(AlertService::spent_for(&b, &expenses), dec!(70));
    }

    #[test]
    fn test_input_order_is_preserved() {
        let rent = CategoryRef::new(CategoryId::new(), "Rent");
        let food = CategoryRef::new(CategoryId::new(), "Food");
        let entries = vec![
            (budget(dec!(10), Some(&rent)), dec!(20)),
            (budget(dec!(100), None), dec!(90)),
            (budget(dec!(10), Some(&food)), dec!(20)),
        ];

        let labels: Vec<String> = AlertService::alerts_for_spent(&entries, AlertOrder::Input)
            .into_iter()
            .map(|a| a.label)
            .collect();
        assert_eq!(labels, vec!["Rent", "Total", "Food"]);
    }

    #[test]
    fn test_sorted_order_puts_overall_first_then_labels() {
        let rent = CategoryRef::new(CategoryId::new(), "Rent");
        let food = CategoryRef::new(CategoryId::new(), "Food");
        let entries = vec![
            (budget(dec!(10), Some(&rent)), dec!(20)),
            (budget(dec!(100), None), dec!(90)),
            (budget(dec!(10), Some(&food)), dec!(20)),
        ];

        let labels: Vec<String> = AlertService::alerts_for_spent(&entries, AlertOrder::Sorted)
            .into_iter()
            .map(|a| a.label)
            .collect();
        assert_eq!(labels, vec!["Total", "Food", "Rent"]);
    }
}
