//! Income tax and Medicare levy calculation.
//!
//! This module applies the 2023-24 resident individual tax rates and a flat
//! 2% Medicare levy to derive an individual's take-home pay.

use rust_decimal::Decimal;

/// Rate of the Medicare levy (2%).
pub fn medicare_levy_rate() -> Decimal {
    Decimal::new(2, 2)
}

/// One band of the progressive tax schedule.
///
/// Income above `threshold` and up to the next band's threshold is taxed at
/// `rate`, on top of `base_tax` owed on income up to `threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxBracket {
    /// Income at which this band starts.
    pub threshold: Decimal,
    /// Tax owed on all income up to the threshold.
    pub base_tax: Decimal,
    /// Marginal rate applied above the threshold.
    pub rate: Decimal,
}

/// The 2023-24 resident tax schedule above the tax-free threshold, lowest
/// band first.
pub fn tax_brackets() -> [TaxBracket; 4] {
    [
        TaxBracket {
            threshold: Decimal::from(18_200),
            base_tax: Decimal::ZERO,
            rate: Decimal::new(19, 2),
        },
        TaxBracket {
            threshold: Decimal::from(45_000),
            base_tax: Decimal::from(5_092),
            rate: Decimal::new(325, 3),
        },
        TaxBracket {
            threshold: Decimal::from(120_000),
            base_tax: Decimal::from(29_467),
            rate: Decimal::new(37, 2),
        },
        TaxBracket {
            threshold: Decimal::from(180_000),
            base_tax: Decimal::from(51_667),
            rate: Decimal::new(45, 2),
        },
    ]
}

/// Calculates income tax owed on an annual income.
///
/// Each band's upper bound is inclusive, so an income exactly on a
/// threshold is taxed in the lower band. Incomes at or below the tax-free
/// threshold (including negative incomes) owe nothing.
///
/// # Examples
///
/// ```
/// use childcare_calculator::calculation::calculate_tax;
/// use rust_decimal::Decimal;
///
/// assert_eq!(calculate_tax(Decimal::from(18_200)), Decimal::ZERO);
/// assert_eq!(calculate_tax(Decimal::from(45_000)), Decimal::from(5_092));
/// assert_eq!(calculate_tax(Decimal::from(120_000)), Decimal::from(29_467));
/// ```
pub fn calculate_tax(income: Decimal) -> Decimal {
    tax_brackets()
        .into_iter()
        .rfind(|b| income > b.threshold)
        .map(|b| b.base_tax + (income - b.threshold) * b.rate)
        .unwrap_or(Decimal::ZERO)
}

/// Calculates the Medicare levy on an annual income.
///
/// The levy is a flat percentage with no low-income threshold.
pub fn calculate_medicare_levy(income: Decimal) -> Decimal {
    income * medicare_levy_rate()
}

/// Calculates take-home pay: income less income tax and Medicare levy.
///
/// The result is not floored at zero.
///
/// Defined for every representable income: tax and levy together never
/// exceed the income in magnitude.
///
/// # Examples
///
/// ```
/// use childcare_calculator::calculation::calculate_take_home_pay;
/// use rust_decimal::Decimal;
///
/// // 92,000 - 20,367 tax - 1,840 levy
/// assert_eq!(calculate_take_home_pay(Decimal::from(92_000)), Decimal::from(69_793));
/// ```
pub fn calculate_take_home_pay(income: Decimal) -> Decimal {
    income - calculate_tax(income) - calculate_medicare_levy(income)
}
