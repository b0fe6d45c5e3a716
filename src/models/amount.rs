//! Lenient parsing and display of dollar amounts.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Parses a user-entered amount such as `"$92,000.50"`.
///
/// Every character other than an ASCII digit or `.` is discarded. An empty
/// remainder is zero. When the remainder is not a single valid number
/// (e.g. `"1.2.3"`), the longest valid leading number is used.
///
/// # Example
///
/// ```
/// use childcare_calculator::models::parse_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_amount("$92,000"), Decimal::from(92_000));
/// assert_eq!(parse_amount("n/a"), Decimal::ZERO);
/// ```
pub fn parse_amount(input: &str) -> Decimal {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    // Keep everything up to the second decimal point.
    let prefix = match cleaned.match_indices('.').nth(1) {
        Some((index, _)) => &cleaned[..index],
        None => cleaned.as_str(),
    };
    let prefix = prefix.strip_suffix('.').unwrap_or(prefix);

    if prefix.is_empty() || prefix == "." {
        return Decimal::ZERO;
    }

    if prefix.starts_with('.') {
        return Decimal::from_str(&format!("0{}", prefix)).unwrap_or(Decimal::ZERO);
    }

    Decimal::from_str(prefix).unwrap_or(Decimal::ZERO)
}

/// Formats an amount for explanation text: `$`, two decimal places, no
/// thousands separator.
///
/// Rounds half away from zero. Negative amounts are written `-$12.50`.
///
/// # Example
///
/// ```
/// use childcare_calculator::models::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::from(92_000)), "$92000.00");
/// assert_eq!(format_currency(Decimal::new(-125, 1)), "-$12.50");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${}", rounded.abs())
    } else {
        format!("${}", rounded.abs())
    }
}
