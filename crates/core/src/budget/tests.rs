//! Property-based tests for budget module.

use proptest::prelude::*;
use rust_decimal::Decimal;
use spendwise_shared::types::{BudgetId, CategoryId, OwnerId, YearMonth};

use super::error::BudgetError;
use super::service::BudgetService;
use super::types::{BudgetCandidate, BudgetRecord};
use crate::expense::CategoryRef;

/// Strategy to generate non-negative amounts in cents (0.00 to 100,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// A budget write: `None` targets the overall budget, `Some(i)` category slot `i`.
fn write_op() -> impl Strategy<Value = (Option<usize>, Decimal)> {
    (prop::option::of(0usize..4), amount())
}

fn record(amount: Decimal, category: Option<CategoryRef>) -> BudgetRecord {
    BudgetRecord {
        id: BudgetId::new(),
        owner_id: OwnerId::default(),
        month: YearMonth::new(2025, 1).unwrap(),
        amount,
        category,
    }
}

fn categories() -> Vec<CategoryRef> {
    ["Food", "Travel", "Rent", "Fun"]
        .iter()
        .map(|name| CategoryRef::new(CategoryId::new(), *name))
        .collect()
}

proptest! {
    /// Overall budget exactly equal to the category total is accepted.
    #[test]
    fn prop_overall_equal_to_allocated_is_accepted(
        amounts in prop::collection::vec(amount(), 0..6),
    ) {
        let cats = categories();
        let existing: Vec<BudgetRecord> = amounts
            .iter()
            .zip(cats.iter().cycle())
            .map(|(a, c)| record(*a, Some(c.clone())))
            .collect();
        let allocated: Decimal = amounts.iter().sum();

        let candidate = BudgetCandidate::create(allocated, None);
        prop_assert!(BudgetService::validate(&existing, &candidate).is_ok());
    }

    /// A category budget landing exactly on the overall limit is accepted.
    #[test]
    fn prop_category_filling_overall_exactly_is_accepted(
        others in prop::collection::vec(amount(), 0..4),
        candidate_amount in amount(),
    ) {
        let cats = categories();
        let other_total: Decimal = others.iter().sum();
        let mut existing = vec![record(other_total + candidate_amount, None)];
        existing.extend(
            others
                .iter()
                .zip(cats.iter().skip(1))
                .map(|(a, c)| record(*a, Some(c.clone()))),
        );

        let candidate = BudgetCandidate::create(candidate_amount, Some(cats[0].id));
        prop_assert!(BudgetService::validate(&existing, &candidate).is_ok());
    }

    /// One cent past either boundary is rejected with the matching reason.
    #[test]
    fn prop_one_cent_over_boundary_is_rejected(allocated in amount()) {
        let cent = Decimal::new(1, 2);
        let cats = categories();
        let food = record(allocated, Some(cats[0].clone()));

        if allocated >= cent {
            let low_overall = BudgetCandidate::create(allocated - cent, None);
            let is_below_allocated = matches!(
                BudgetService::validate(std::slice::from_ref(&food), &low_overall),
                Err(BudgetError::OverallBelowAllocated { .. })
            );
            prop_assert!(is_below_allocated);
        }

        let existing = vec![record(allocated, None), food.clone()];
        let grow = BudgetCandidate::update(&food, allocated + cent);
        let exceeds_overall = matches!(
            BudgetService::validate(&existing, &grow),
            Err(BudgetError::CategoryExceedsOverall { .. })
        );
        prop_assert!(exceeds_overall);
    }

    /// After any sequence of accepted writes, overall >= sum of categories.
    #[test]
    fn prop_accepted_writes_preserve_invariant(
        ops in prop::collection::vec(write_op(), 1..40),
    ) {
        let cats = categories();
        let mut budgets: Vec<BudgetRecord> = Vec::new();

        for (slot, amount) in ops {
            let category = slot.map(|i| cats[i].clone());
            let category_id = category.as_ref().map(|c| c.id);
            let position = budgets.iter().position(|b| b.category_id() == category_id);

            let candidate = match position {
                Some(i) => BudgetCandidate::update(&budgets[i], amount),
                None => BudgetCandidate::create(amount, category_id),
            };

            if BudgetService::validate(&budgets, &candidate).is_ok() {
                match position {
                    Some(i) => budgets[i].amount = amount,
                    None => budgets.push(record(amount, category)),
                }
            }

            if let Some(overall) = BudgetService::overall_limit(&budgets) {
                prop_assert!(overall >= BudgetService::allocated_total(&budgets, None));
            }
        }
    }
}
