//! Currency rounding.
//!
//! Every percentage the engine applies is rounded on its own, immediately,
//! to a whole currency unit. Rounding is half away from zero.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to the nearest whole currency unit, half away from zero.
///
/// # Examples
///
/// ```
/// use net_pay_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_currency(Decimal::from_str("103894.8").unwrap()), Decimal::from(103895));
/// assert_eq!(round_currency(Decimal::from_str("2.5").unwrap()), Decimal::from(3));
/// assert_eq!(round_currency(Decimal::from_str("-2.5").unwrap()), Decimal::from(-3));
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Applies a fractional rate to an amount and rounds the product.
pub fn apply_rate(amount: Decimal, rate: Decimal) -> Decimal {
    round_currency(amount * rate)
}
