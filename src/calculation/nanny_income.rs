//! Nannying income calculation.
//!
//! A parent can earn extra income by nannying other families' children on
//! days they are not at work. Each child after the first is charged at a
//! discount to the base rate.

use rust_decimal::Decimal;

use super::checked;
use crate::error::EngineResult;

/// Hours assumed for each day spent nannying.
pub const ASSUMED_NANNY_HOURS_PER_DAY: i64 = 8;

/// Discount applied to the base rate for each child after the first (25%).
pub fn nanny_discount_additional_child() -> Decimal {
    Decimal::new(25, 2)
}

/// Calculates the combined hourly rate for nannying several children.
///
/// The first child is charged the full base rate and each additional child
/// adds `base_rate * (1 - discount)`. The discount does not compound. Only
/// whole children count, and fewer than two children yields the base rate.
///
/// # Errors
///
/// Returns [`ArithmeticOverflow`](crate::error::EngineError::ArithmeticOverflow)
/// when the rate is out of range.
///
/// # Examples
///
/// ```
/// use childcare_calculator::calculation::{calculate_nanny_rate, nanny_discount_additional_child};
/// use rust_decimal::Decimal;
///
/// let discount = nanny_discount_additional_child();
/// assert_eq!(calculate_nanny_rate(Decimal::from(100), Decimal::from(1), discount).unwrap(), Decimal::from(100));
/// assert_eq!(calculate_nanny_rate(Decimal::from(100), Decimal::from(3), discount).unwrap(), Decimal::from(250));
/// ```
pub fn calculate_nanny_rate(
    base_rate: Decimal,
    number_of_children: Decimal,
    discount: Decimal,
) -> EngineResult<Decimal> {
    let whole_children = number_of_children.floor();
    let additional_children = if whole_children > Decimal::ONE {
        whole_children - Decimal::ONE
    } else {
        Decimal::ZERO
    };

    let additional_child_rate = checked::mul(
        base_rate,
        checked::sub(Decimal::ONE, discount, "nanny rate")?,
        "nanny rate",
    )?;
    let additional_rate = checked::mul(additional_child_rate, additional_children, "nanny rate")?;
    checked::add(base_rate, additional_rate, "nanny rate")
}

/// Calculates weekly income from nannying.
///
/// Uses the discounted rate for `number_of_children`, the standard
/// additional-child discount and [`ASSUMED_NANNY_HOURS_PER_DAY`].
///
/// # Errors
///
/// Returns [`ArithmeticOverflow`](crate::error::EngineError::ArithmeticOverflow)
/// when the income is out of range.
///
/// # Examples
///
/// ```
/// use childcare_calculator::calculation::calculate_nannying_income;
/// use rust_decimal::Decimal;
///
/// // $35/h * 2 days * 8 hours
/// let weekly = calculate_nannying_income(Decimal::from(35), Decimal::ONE, Decimal::TWO).unwrap();
/// assert_eq!(weekly, Decimal::from(560));
/// ```
pub fn calculate_nannying_income(
    base_rate: Decimal,
    number_of_children: Decimal,
    days_per_week: Decimal,
) -> EngineResult<Decimal> {
    let rate = calculate_nanny_rate(
        base_rate,
        number_of_children,
        nanny_discount_additional_child(),
    )?;

    let rate_for_week = checked::mul(rate, days_per_week, "nannying income")?;
    checked::mul(
        rate_for_week,
        Decimal::from(ASSUMED_NANNY_HOURS_PER_DAY),
        "nannying income",
    )
}
