//! Currency formatting for display.

use rust_decimal::Decimal;

use crate::calculation::round_currency;

/// Renders an amount as a whole number grouped in threes with spaces,
/// followed by the currency suffix.
///
/// Fractional amounts are rounded half away from zero first. An empty suffix
/// renders the grouped number alone.
///
/// # Examples
///
/// ```
/// use net_pay_engine::presentation::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::from(907635), "Ft"), "907 635 Ft");
/// assert_eq!(format_currency(Decimal::from(-1234567), "Ft"), "-1 234 567 Ft");
/// ```
pub fn format_currency(amount: Decimal, suffix: &str) -> String {
    let whole = round_currency(amount);
    let digits = whole.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if whole.is_sign_negative() && !whole.is_zero() {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    if suffix.is_empty() {
        grouped
    } else {
        format!("{} {}", grouped, suffix)
    }
}
