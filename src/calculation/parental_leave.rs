//! Parental leave entitlement calculation.
//!
//! This module values an employer-paid parental leave allotment, pro-rated
//! for parents who work part of the week.

use rust_decimal::Decimal;

use super::checked;
use crate::error::EngineResult;

/// Days in a full-time work week, used to pro-rate part-time parents.
pub const FULL_TIME_DAYS_PER_WEEK: i64 = 5;

/// Calculates the cash value of paid parental leave.
///
/// The weekly rate is the pre-tax income spread over 52 weeks, scaled by the
/// fraction of a five-day week the parent works, for each paid week.
///
/// # Arguments
///
/// * `days_working_per_week` - Days the parent is employed per week
/// * `weeks_paid_leave` - Weeks of paid leave the employer provides
/// * `pre_tax_income` - The parent's unadjusted annual income
///
/// # Errors
///
/// Returns [`ArithmeticOverflow`](crate::error::EngineError::ArithmeticOverflow)
/// when the value is out of range.
///
/// # Examples
///
/// ```
/// use childcare_calculator::calculation::calculate_parental_leave_entitlement;
/// use rust_decimal::Decimal;
///
/// let value = calculate_parental_leave_entitlement(
///     Decimal::from(5),
///     Decimal::from(14),
///     Decimal::from(52_000),
/// )
/// .unwrap();
/// assert_eq!(value, Decimal::from(14_000));
/// ```
pub fn calculate_parental_leave_entitlement(
    days_working_per_week: Decimal,
    weeks_paid_leave: Decimal,
    pre_tax_income: Decimal,
) -> EngineResult<Decimal> {
    let weekly_rate = pre_tax_income / Decimal::from(52);
    let fraction_of_week = days_working_per_week / Decimal::from(FULL_TIME_DAYS_PER_WEEK);
    let paid_weeks = checked::mul(fraction_of_week, weeks_paid_leave, "parental leave entitlement")?;
    checked::mul(paid_weeks, weekly_rate, "parental leave entitlement")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_full_time_entitlement() {
        let value = calculate_parental_leave_entitlement(dec("5"), dec("14"), dec("52000")).unwrap();
        assert_eq!(value, dec("14000"));
    }

    #[test]
    fn test_part_time_is_pro_rated() {
        // 3/5 * 10 weeks * 1,000/week
        let value = calculate_parental_leave_entitlement(dec("3"), dec("10"), dec("52000")).unwrap();
        assert_eq!(value, dec("6000"));
    }

    #[test]
    fn test_no_paid_weeks_is_worth_nothing() {
        let value = calculate_parental_leave_entitlement(dec("5"), Decimal::ZERO, dec("92000")).unwrap();
        assert_eq!(value, Decimal::ZERO);
    }

    #[test]
    fn test_non_terminating_weekly_rate() {
        let value = calculate_parental_leave_entitlement(dec("5"), dec("14"), dec("92000")).unwrap();
        assert_eq!(value.round_dp(2), dec("24769.23"));
    }

    #[test]
    fn test_out_of_range_entitlement_is_an_error() {
        let result = calculate_parental_leave_entitlement(dec("5"), Decimal::MAX, dec("5200000"));
        assert!(matches!(result, Err(EngineError::ArithmeticOverflow { .. })));
    }
}
