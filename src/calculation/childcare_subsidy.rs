//! Child Care Subsidy calculation.
//!
//! This module implements the means-tested subsidy percentage, the activity
//! test that caps subsidised hours, the hourly rate caps per childcare
//! category, and the resulting annual out-of-pocket childcare cost for a
//! family.

use rust_decimal::Decimal;

use super::checked;
use crate::error::{EngineError, EngineResult};
use crate::models::{ChildcareCategory, ChildcareSubsidyBreakdown, HouseholdParameters, ParentSchedule};

/// Weeks in a year.
pub const WEEKS_PER_YEAR: i64 = 52;

/// Highest subsidy percentage, paid up to [`ccs_taper_start`].
pub fn max_ccs_percentage() -> Decimal {
    Decimal::new(9, 1)
}

/// Family income above which the subsidy tapers.
pub fn ccs_taper_start() -> Decimal {
    Decimal::from(80_000)
}

/// Family income above which no subsidy is paid.
pub fn ccs_cut_off() -> Decimal {
    Decimal::from(530_000)
}

/// Income step over which the subsidy falls by one percentage point.
pub fn ccs_taper_step() -> Decimal {
    Decimal::from(5_000)
}

/// Weekly childcare needs and means-test income for a household.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyChildcareNeeds {
    /// Sum of both parents' incomes scaled by the fraction of the week worked.
    pub family_income: Decimal,
    /// Hours of care needed each week while both parents are working.
    pub required_hours_per_week: Decimal,
    /// Both parents' nominal work hours over a fortnight.
    pub activity_hours_per_fortnight: Decimal,
}

/// Scales an income by the fraction of the work week actually worked.
///
/// Days worked are clamped at zero, so taking more days off than there are
/// work days yields zero income rather than a negative one.
///
/// # Errors
///
/// Returns [`EngineError::InvalidSchedule`] when `work_days_per_week` is zero.
fn scaled_income(parent: &str, income: Decimal, schedule: &ParentSchedule) -> EngineResult<Decimal> {
    if schedule.work_days_per_week.is_zero() {
        return Err(EngineError::zero_work_days(parent));
    }

    let worked = days_worked(schedule)?.max(Decimal::ZERO);
    let income_for_days = checked::mul(income, worked, "family income")?;
    checked::div(income_for_days, schedule.work_days_per_week, "family income")
}

/// Days worked net of days off, as an overflow error when out of range.
pub(crate) fn days_worked(schedule: &ParentSchedule) -> EngineResult<Decimal> {
    schedule
        .days_worked_per_week()
        .ok_or_else(|| EngineError::overflow("days worked per week"))
}

/// Derives family income and weekly childcare requirements.
///
/// The household only needs care while both parents are working, so the
/// required hours are the lesser of the two parents' replacement hours
/// (hours per day times days actually worked). Activity hours use the
/// nominal work week, unreduced by days off.
///
/// # Errors
///
/// Returns [`EngineError::InvalidSchedule`] when either parent works zero
/// days per week, or [`EngineError::ArithmeticOverflow`] when a figure is
/// out of range.
///
/// # Examples
///
/// ```
/// use childcare_calculator::calculation::calculate_family_income_and_childcare;
/// use childcare_calculator::models::ParentSchedule;
/// use rust_decimal::Decimal;
///
/// let first = ParentSchedule {
///     days_off_per_week: Decimal::from(1),
///     ..ParentSchedule::default()
/// };
/// let second = ParentSchedule::default();
///
/// let needs = calculate_family_income_and_childcare(
///     &first,
///     &second,
///     Decimal::from(100_000),
///     Decimal::from(50_000),
/// )
/// .unwrap();
///
/// assert_eq!(needs.family_income, Decimal::from(130_000));
/// assert_eq!(needs.required_hours_per_week, Decimal::from(32));
/// assert_eq!(needs.activity_hours_per_fortnight, Decimal::from(160));
/// ```
pub fn calculate_family_income_and_childcare(
    first: &ParentSchedule,
    second: &ParentSchedule,
    first_income: Decimal,
    second_income: Decimal,
) -> EngineResult<FamilyChildcareNeeds> {
    let first_scaled = scaled_income("Person 1", first_income, first)?;
    let second_scaled = scaled_income("Person 2", second_income, second)?;

    let first_replacement_hours = checked::mul(
        first.work_hours_per_day,
        days_worked(first)?,
        "required childcare hours",
    )?;
    let second_replacement_hours = checked::mul(
        second.work_hours_per_day,
        days_worked(second)?,
        "required childcare hours",
    )?;

    let first_activity_hours =
        checked::mul(first.work_hours_per_day, first.work_days_per_week, "activity hours")?;
    let second_activity_hours =
        checked::mul(second.work_hours_per_day, second.work_days_per_week, "activity hours")?;
    let weekly_activity_hours =
        checked::add(first_activity_hours, second_activity_hours, "activity hours")?;

    Ok(FamilyChildcareNeeds {
        family_income: checked::add(first_scaled, second_scaled, "family income")?,
        required_hours_per_week: first_replacement_hours.min(second_replacement_hours),
        activity_hours_per_fortnight: checked::mul(
            Decimal::TWO,
            weekly_activity_hours,
            "activity hours",
        )?,
    })
}

/// Calculates the subsidy percentage for a family income.
///
/// 90% up to $80,000, falling by one percentage point per $5,000 above that,
/// and nothing above $530,000. The result is a fraction (0.9 = 90%).
///
/// # Examples
///
/// ```
/// use childcare_calculator::calculation::calculate_ccs_percentage;
/// use rust_decimal::Decimal;
///
/// assert_eq!(calculate_ccs_percentage(Decimal::from(80_000)), Decimal::new(9, 1));
/// assert_eq!(calculate_ccs_percentage(Decimal::from(130_000)), Decimal::new(8, 1));
/// assert_eq!(calculate_ccs_percentage(Decimal::from(530_000)), Decimal::ZERO);
/// ```
pub fn calculate_ccs_percentage(family_income: Decimal) -> Decimal {
    if family_income <= ccs_taper_start() {
        max_ccs_percentage()
    } else if family_income <= ccs_cut_off() {
        max_ccs_percentage()
            - ((family_income - ccs_taper_start()) / ccs_taper_step()) * Decimal::new(1, 2)
    } else {
        Decimal::ZERO
    }
}

/// Returns the weekly subsidised-hours ceiling for the activity test.
///
/// Up to 16 activity hours a fortnight allows 18 hours a week, up to 48
/// allows 36, and anything above allows 50.
pub fn max_subsidized_hours_per_week(activity_hours_per_fortnight: Decimal) -> Decimal {
    if activity_hours_per_fortnight <= Decimal::from(16) {
        Decimal::from(18)
    } else if activity_hours_per_fortnight <= Decimal::from(48) {
        Decimal::from(36)
    } else {
        Decimal::from(50)
    }
}

/// Returns the 2023-24 hourly rate cap for a childcare category.
///
/// Nannying is not an approved care type and an unknown category is treated
/// the same way: a zero cap, and therefore no subsidy. The in-home care cap
/// applies per family rather than per child, but is used as-is here.
pub fn hourly_rate_cap(category: Option<ChildcareCategory>) -> Decimal {
    match category {
        Some(ChildcareCategory::CentreBased) | Some(ChildcareCategory::OutsideSchoolHours) => {
            Decimal::new(1373, 2)
        }
        Some(ChildcareCategory::FamilyDayCare) => Decimal::new(1272, 2),
        Some(ChildcareCategory::InHomeCare) => Decimal::new(3778, 2),
        Some(ChildcareCategory::Nannying) | None => Decimal::ZERO,
    }
}

/// Calculates the weekly subsidy and annual out-of-pocket cost for one child.
///
/// The subsidy is paid on the lesser of the required and subsidisable hours,
/// at the lesser of the provider's rate and the category cap, scaled by the
/// subsidy percentage. The family pays the full fee for all required hours
/// less the subsidy, for every week the child is in care. A negative cost is
/// returned as-is.
///
/// # Arguments
///
/// * `params` - The household whose schedules and childcare settings apply
/// * `first_income` - The first parent's income for the means test
/// * `second_income` - The second parent's income for the means test
///
/// # Errors
///
/// Returns [`EngineError::InvalidSchedule`] when either parent works zero
/// days per week, or [`EngineError::ArithmeticOverflow`] when a figure is
/// out of range.
pub fn calculate_ccs(
    params: &HouseholdParameters,
    first_income: Decimal,
    second_income: Decimal,
) -> EngineResult<ChildcareSubsidyBreakdown> {
    let needs = calculate_family_income_and_childcare(
        &params.first,
        &params.second,
        first_income,
        second_income,
    )?;

    let cap = hourly_rate_cap(params.childcare_category);
    let ccs_percentage = calculate_ccs_percentage(needs.family_income);
    let max_hours = max_subsidized_hours_per_week(needs.activity_hours_per_fortnight);

    let eligible_hours = needs.required_hours_per_week.min(max_hours);
    // The percentage is at most 0.9, so this product cannot grow.
    let subsidized_hourly_rate = params.hourly_childcare_rate.min(cap) * ccs_percentage;
    let weekly_subsidy = checked::mul(subsidized_hourly_rate, eligible_hours, "weekly subsidy")?;

    let weeks_in_care = checked::sub(
        Decimal::from(WEEKS_PER_YEAR),
        params.weeks_without_childcare,
        "weeks in care",
    )?;
    let weekly_fee = checked::mul(
        params.hourly_childcare_rate,
        needs.required_hours_per_week,
        "family childcare cost",
    )?;
    let weekly_cost = checked::sub(weekly_fee, weekly_subsidy, "family childcare cost")?;
    let family_cost = checked::mul(weekly_cost, weeks_in_care, "family childcare cost")?;

    Ok(ChildcareSubsidyBreakdown {
        family_income: needs.family_income,
        required_hours_per_week: needs.required_hours_per_week,
        activity_hours_per_fortnight: needs.activity_hours_per_fortnight,
        ccs_percentage,
        hourly_rate_cap: cap,
        max_subsidized_hours_per_week: max_hours,
        eligible_hours,
        subsidized_hourly_rate,
        weekly_subsidy,
        weeks_in_care,
        family_cost,
    })
}
