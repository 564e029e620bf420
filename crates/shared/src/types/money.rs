//! Money rounding with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Every reported amount goes through [`round_money`] so both reports
//! apply the same policy.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits carried by every reported amount.
pub const MONEY_SCALE: u32 = 2;

/// Rounds an amount half away from zero to two fractional digits.
///
/// The result always carries exactly [`MONEY_SCALE`] digits, so `650`
/// becomes `650.00` and serializes that way.
#[must_use]
pub fn round_money(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    rounded
}

#[cfg(test)]
#[path = "money_tests.rs"]
mod tests;
