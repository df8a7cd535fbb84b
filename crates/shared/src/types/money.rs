//! Money helpers with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are plain `rust_decimal::Decimal` values in a single currency.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places reported for rounded amounts.
pub const MONEY_SCALE: u32 = 2;

/// Rounds a value to [`MONEY_SCALE`] places using round-half-up.
///
/// Midpoints round away from zero (`2.345 -> 2.35`, `-2.345 -> -2.35`).
/// The result always carries exactly two decimal places, so `300` becomes
/// `300.00`.
#[must_use]
pub fn round_half_up(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    rounded
}

/// Formats an amount with a literal `$` prefix and the decimal's natural
/// string form. No grouping or padding is applied.
#[must_use]
pub fn dollars(amount: Decimal) -> String {
    format!("${amount}")
}
