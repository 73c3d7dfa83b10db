//! Sanitization of free-form numeric text.

/// Parses free-form text into a non-negative whole amount.
///
/// Every character that is not an ASCII digit is dropped first, so `"2 950"`,
/// `"2,950"` and `"2950 Ft"` all parse to 2950. Text with no digits, or whose
/// digits do not fit in a `u32`, yields 0.
///
/// # Examples
///
/// ```
/// use net_pay_engine::presentation::parse_amount;
///
/// assert_eq!(parse_amount("149 800"), 149800);
/// assert_eq!(parse_amount(""), 0);
/// assert_eq!(parse_amount("abc"), 0);
/// ```
pub fn parse_amount(text: &str) -> u32 {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}
