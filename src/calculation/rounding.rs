//! Monetary rounding policy.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places monetary amounts are stored with.
pub const MONEY_SCALE: u32 = 2;

/// Rounds a monetary amount to [`MONEY_SCALE`] places, midpoint away from zero.
///
/// Every payslip component is rounded exactly once, after it has been computed
/// from the unrounded hourly rate.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_money(Decimal::from_str("357.142857").unwrap()), Decimal::from_str("357.14").unwrap());
/// assert_eq!(round_money(Decimal::from_str("0.005").unwrap()), Decimal::from_str("0.01").unwrap());
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns true if `value` carries no digits beyond [`MONEY_SCALE`] places.
///
/// Trailing zeros do not count, so `1.500` qualifies.
pub fn fits_money_scale(value: Decimal) -> bool {
    value.normalize().scale() <= MONEY_SCALE
}
