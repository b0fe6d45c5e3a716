//! Household scenario calculation.
//!
//! This module composes the tax, subsidy, nannying and parental leave
//! calculators into a single result for a household, together with a
//! numbered explanation of every intermediate value.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    ExplanationStep, HouseholdParameters, IntermediateFinancials, ParentFinancials,
    ParentSchedule, ScenarioResult, format_currency,
};

use super::checked;
use super::childcare_subsidy::{WEEKS_PER_YEAR, calculate_ccs, days_worked};
use super::explanation::{ExplanationBuilder, StepDraft};
use super::nanny_income::{
    ASSUMED_NANNY_HOURS_PER_DAY, calculate_nanny_rate, calculate_nannying_income,
    nanny_discount_additional_child,
};
use super::parental_leave::calculate_parental_leave_entitlement;
use super::tax::{calculate_medicare_levy, calculate_take_home_pay, calculate_tax};

/// Scales a parent's income by the fraction of the work week they work.
///
/// Unlike the means-test scaling in the subsidy calculator, days worked are
/// not clamped here: more days off than work days gives a negative income.
///
/// # Errors
///
/// Returns [`EngineError::InvalidSchedule`] when `work_days_per_week` is zero
/// and [`EngineError::ArithmeticOverflow`] when the income is out of range.
///
/// # Examples
///
/// ```
/// use childcare_calculator::calculation::calculate_adjusted_income;
/// use childcare_calculator::models::ParentSchedule;
/// use rust_decimal::Decimal;
///
/// let schedule = ParentSchedule {
///     days_off_per_week: Decimal::ONE,
///     ..ParentSchedule::default()
/// };
/// let adjusted = calculate_adjusted_income("Person 1", &schedule).unwrap();
/// assert_eq!(adjusted, Decimal::from(73_600));
/// ```
pub fn calculate_adjusted_income(parent: &str, schedule: &ParentSchedule) -> EngineResult<Decimal> {
    if schedule.work_days_per_week.is_zero() {
        return Err(EngineError::zero_work_days(parent));
    }

    let fraction_worked = checked::div(
        days_worked(schedule)?,
        schedule.work_days_per_week,
        "adjusted income",
    )?;
    checked::mul(schedule.income, fraction_worked, "adjusted income")
}

/// Calculates a household's take-home pay after childcare.
///
/// The calculation runs in a fixed order:
///
/// 1. Each parent's income is scaled by the days they actually work.
/// 2. Annual nannying income is added to give each parent's total income.
/// 3. The Child Care Subsidy is assessed on the two total incomes, giving the
///    annual out-of-pocket cost for one child.
/// 4. Each parent's parental leave entitlement is valued on their raw income.
/// 5. Take-home pay is computed per parent, with and without that
///    entitlement (the latter only when another baby is expected).
///
/// The result carries the headline figures, every intermediate value, and a
/// numbered explanation. The same parameters always produce an identical
/// result.
///
/// # Errors
///
/// Returns [`EngineError::InvalidSchedule`] when either parent works zero
/// days per week, and [`EngineError::ArithmeticOverflow`] when any figure
/// leaves the decimal range.
///
/// # Examples
///
/// ```
/// use childcare_calculator::calculation::calculate_total_take_home_pay_with_childcare;
/// use childcare_calculator::models::HouseholdParameters;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_total_take_home_pay_with_childcare(&HouseholdParameters::default()).unwrap();
/// assert_eq!(result.child_care_cost, Decimal::from_str("19099.6992").unwrap());
/// assert_eq!(result.with_children, Decimal::from_str("120486.3008").unwrap());
/// ```
pub fn calculate_total_take_home_pay_with_childcare(
    params: &HouseholdParameters,
) -> EngineResult<ScenarioResult> {
    let weeks_per_year = Decimal::from(WEEKS_PER_YEAR);

    let first_adjusted = calculate_adjusted_income("Person 1", &params.first)?;
    let second_adjusted = calculate_adjusted_income("Person 2", &params.second)?;

    let first_nannying = checked::mul(
        calculate_nannying_income(
            params.nannying_rate,
            params.number_of_children_to_nanny,
            params.first.days_nannying_per_week,
        )?,
        weeks_per_year,
        "nannying income",
    )?;
    let second_nannying = checked::mul(
        calculate_nannying_income(
            params.nannying_rate,
            params.number_of_children_to_nanny,
            params.second.days_nannying_per_week,
        )?,
        weeks_per_year,
        "nannying income",
    )?;

    let first_total = checked::add(first_adjusted, first_nannying, "total income")?;
    let second_total = checked::add(second_adjusted, second_nannying, "total income")?;

    let childcare = calculate_ccs(params, first_total, second_total)?;

    let first_leave = calculate_parental_leave_entitlement(
        params.first.work_days_per_week,
        params.first.weeks_paid_parental_leave,
        params.first.income,
    )?;
    let second_leave = calculate_parental_leave_entitlement(
        params.second.work_days_per_week,
        params.second.weeks_paid_parental_leave,
        params.second.income,
    )?;

    let first = parent_financials(
        first_adjusted,
        first_nannying,
        first_leave,
        params.expecting_another_baby,
    )?;
    let second = parent_financials(
        second_adjusted,
        second_nannying,
        second_leave,
        params.expecting_another_baby,
    )?;

    let total_take_home_pay =
        checked::add(first.take_home_pay, second.take_home_pay, "family take home pay")?;
    let total_take_home_pay_with_leave = checked::add(
        first.take_home_pay_with_leave,
        second.take_home_pay_with_leave,
        "family take home pay",
    )?;

    let child_care_cost = checked::mul(
        childcare.family_cost,
        params.number_of_children_in_childcare,
        "childcare cost",
    )?;
    let with_children =
        checked::sub(total_take_home_pay, child_care_cost, "take home pay after childcare")?;
    let parental_leave_payment = checked::sub(
        total_take_home_pay_with_leave,
        total_take_home_pay,
        "parental leave payment",
    )?;

    let financials = IntermediateFinancials {
        family_income: checked::add(first.total_income, second.total_income, "family income")?,
        first,
        second,
        childcare,
        total_take_home_pay,
        total_take_home_pay_with_leave,
    };

    let nanny_rate = calculate_nanny_rate(
        params.nannying_rate,
        params.number_of_children_to_nanny,
        nanny_discount_additional_child(),
    )?;
    let (explanation, steps) = explain(params, &financials, nanny_rate, with_children);

    Ok(ScenarioResult {
        with_children,
        child_care_cost,
        parental_leave_payment,
        explanation,
        steps,
        financials,
    })
}

fn parent_financials(
    adjusted_income: Decimal,
    nannying_income: Decimal,
    parental_leave_entitlement: Decimal,
    expecting_another_baby: bool,
) -> EngineResult<ParentFinancials> {
    let total_income = checked::add(adjusted_income, nannying_income, "total income")?;
    let leave = if expecting_another_baby {
        parental_leave_entitlement
    } else {
        Decimal::ZERO
    };
    let income_with_leave = checked::add(total_income, leave, "take home pay with leave")?;

    Ok(ParentFinancials {
        adjusted_income,
        nannying_income,
        total_income,
        take_home_pay: calculate_take_home_pay(total_income),
        parental_leave_entitlement,
        take_home_pay_with_leave: calculate_take_home_pay(income_with_leave),
    })
}

/// Builds the numbered explanation for a finished calculation.
fn explain(
    params: &HouseholdParameters,
    financials: &IntermediateFinancials,
    discounted_rate: Decimal,
    with_children: Decimal,
) -> (String, Vec<ExplanationStep>) {
    let parents = [
        ("Person 1", &params.first, &financials.first),
        ("Person 2", &params.second, &financials.second),
    ];
    let mut builder = ExplanationBuilder::new();

    for (label, schedule, figures) in parents {
        builder.push_if(schedule.has_days_off(), || {
            StepDraft::new(
                "adjusted_income",
                format!("Adjusted Income for {}", label),
                format!(
                    "income({}) * ((work_days_per_week({}) - days_off_per_week({})) / work_days_per_week({})) = {}",
                    format_currency(schedule.income),
                    schedule.work_days_per_week.normalize(),
                    schedule.days_off_per_week.normalize(),
                    schedule.work_days_per_week.normalize(),
                    format_currency(figures.adjusted_income)
                ),
            )
            .with_input(serde_json::json!({
                "parent": label,
                "income": schedule.income.to_string(),
                "work_days_per_week": schedule.work_days_per_week.to_string(),
                "days_off_per_week": schedule.days_off_per_week.to_string()
            }))
            .with_output(serde_json::json!({
                "adjusted_income": figures.adjusted_income.to_string()
            }))
        });
    }

    let anyone_nannying = params.first.is_nannying() || params.second.is_nannying();
    let discount = nanny_discount_additional_child();
    let additional_children = params.number_of_children_to_nanny.saturating_sub(Decimal::ONE);

    builder.push_if(anyone_nannying, || {
        StepDraft::new(
            "nanny_rate",
            "Effective Nannying Rate",
            format!(
                "nannying_base_rate({}) + (discount of {}% for each additional child)[{}] = {}",
                format_currency(params.nannying_rate),
                (discount * Decimal::ONE_HUNDRED).normalize(),
                additional_children.normalize(),
                format_currency(discounted_rate)
            ),
        )
        .with_input(serde_json::json!({
            "nannying_rate": params.nannying_rate.to_string(),
            "number_of_children_to_nanny": params.number_of_children_to_nanny.to_string(),
            "discount": discount.to_string()
        }))
        .with_output(serde_json::json!({
            "discounted_rate": discounted_rate.to_string()
        }))
    });

    for (label, schedule, figures) in parents {
        builder.push_if(schedule.is_nannying(), || {
            StepDraft::new(
                "nannying_income",
                format!("Nannying Income for {}", label),
                format!(
                    "discounted_nanny_rate({}) * days_nannying_per_week({}) * nanny_hours_per_day({}) * {} weeks = {}",
                    format_currency(discounted_rate),
                    schedule.days_nannying_per_week.normalize(),
                    ASSUMED_NANNY_HOURS_PER_DAY,
                    WEEKS_PER_YEAR,
                    format_currency(figures.nannying_income)
                ),
            )
            .with_input(serde_json::json!({
                "parent": label,
                "discounted_rate": discounted_rate.to_string(),
                "days_nannying_per_week": schedule.days_nannying_per_week.to_string()
            }))
            .with_output(serde_json::json!({
                "nannying_income": figures.nannying_income.to_string()
            }))
        });
    }

    for (label, schedule, figures) in parents {
        let mut sources = Vec::new();
        if schedule.has_days_off() {
            sources.push("Adjusted Income");
        }
        if schedule.is_nannying() {
            sources.push("Nannying Income");
        }
        let breakdown = if sources.is_empty() {
            String::new()
        } else {
            format!("({})", sources.join(" + "))
        };

        builder.push(
            StepDraft::new(
                "total_income",
                format!("Total Income for {}", label),
                format!("{}{}", format_currency(figures.total_income), breakdown),
            )
            .with_output(serde_json::json!({
                "parent": label,
                "total_income": figures.total_income.to_string()
            })),
        );
    }

    builder.push(
        StepDraft::new(
            "family_income",
            "Family Income",
            format!(
                "total_income_person_1({}) + total_income_person_2({}) = {}",
                format_currency(financials.first.total_income),
                format_currency(financials.second.total_income),
                format_currency(financials.family_income)
            ),
        )
        .with_output(serde_json::json!({
            "family_income": financials.family_income.to_string()
        })),
    );

    let childcare = &financials.childcare;
    builder.push(
        StepDraft::new(
            "family_childcare_cost",
            "Family Cost of Childcare After CCS",
            format!(
                "(hourly_childcare_rate({}) * required_hours_per_week({}) - weekly_subsidy({})) * weeks_in_care({}) = {}",
                format_currency(params.hourly_childcare_rate),
                childcare.required_hours_per_week.normalize(),
                format_currency(childcare.weekly_subsidy),
                childcare.weeks_in_care.normalize(),
                format_currency(childcare.family_cost)
            ),
        )
        .with_input(serde_json::json!({
            "childcare_category": params.childcare_category.map(|c| c.as_str()),
            "hourly_childcare_rate": params.hourly_childcare_rate.to_string(),
            "hourly_rate_cap": childcare.hourly_rate_cap.to_string(),
            "means_test_income": childcare.family_income.to_string(),
            "ccs_percentage": childcare.ccs_percentage.to_string(),
            "activity_hours_per_fortnight": childcare.activity_hours_per_fortnight.to_string(),
            "eligible_hours": childcare.eligible_hours.to_string()
        }))
        .with_output(serde_json::json!({
            "weekly_subsidy": childcare.weekly_subsidy.to_string(),
            "family_cost": childcare.family_cost.to_string()
        })),
    );

    for (label, _, figures) in parents {
        builder.push(
            StepDraft::new(
                "take_home_pay",
                format!("Total Take Home for {} (Income After Tax)", label),
                format!(
                    "income({}) - tax({}) - medicare_levy({}) = {}",
                    format_currency(figures.total_income),
                    format_currency(calculate_tax(figures.total_income)),
                    format_currency(calculate_medicare_levy(figures.total_income)),
                    format_currency(figures.take_home_pay)
                ),
            )
            .with_output(serde_json::json!({
                "parent": label,
                "take_home_pay": figures.take_home_pay.to_string()
            })),
        );
    }

    builder.push(
        StepDraft::new(
            "family_take_home",
            "Family Take Home",
            format!(
                "take_home_person_1({}) + take_home_person_2({}) = {}",
                format_currency(financials.first.take_home_pay),
                format_currency(financials.second.take_home_pay),
                format_currency(financials.total_take_home_pay)
            ),
        )
        .with_output(serde_json::json!({
            "total_take_home_pay": financials.total_take_home_pay.to_string()
        })),
    );

    builder.push(
        StepDraft::new(
            "family_take_home_after_childcare",
            "Family Take Home After Childcare",
            format!(
                "total_take_home_pay({}) - family_cost_after_ccs({}) * number_of_children_in_childcare({}) = {}",
                format_currency(financials.total_take_home_pay),
                format_currency(childcare.family_cost),
                params.number_of_children_in_childcare.normalize(),
                format_currency(with_children)
            ),
        )
        .with_output(serde_json::json!({
            "with_children": with_children.to_string()
        })),
    );

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChildcareCategory;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn labels(result: &ScenarioResult) -> Vec<String> {
        result.steps.iter().map(|s| s.label.clone()).collect()
    }

    #[test]
    fn test_default_household_headline_figures() {
        let result =
            calculate_total_take_home_pay_with_childcare(&HouseholdParameters::default()).unwrap();

        assert_eq!(result.child_care_cost, dec("19099.6992"));
        // 2 * 69,793 - 19,099.6992
        assert_eq!(result.with_children, dec("120486.3008"));
        // 2 * 24,769.23 leave * (1 - 0.325 - 0.02)
        assert_eq!(result.parental_leave_payment.round_dp(2), dec("32447.69"));
    }

    #[test]
    fn test_default_household_intermediate_figures() {
        let result =
            calculate_total_take_home_pay_with_childcare(&HouseholdParameters::default()).unwrap();
        let financials = &result.financials;

        assert_eq!(financials.first.adjusted_income, dec("92000"));
        assert_eq!(financials.first.nannying_income, Decimal::ZERO);
        assert_eq!(financials.first.total_income, dec("92000"));
        assert_eq!(financials.first.take_home_pay, dec("69793"));
        assert_eq!(financials.family_income, dec("184000"));
        assert_eq!(financials.total_take_home_pay, dec("139586"));
        assert_eq!(
            financials.first.parental_leave_entitlement.round_dp(2),
            dec("24769.23")
        );
    }

    #[test]
    fn test_default_household_explanation_order() {
        let result =
            calculate_total_take_home_pay_with_childcare(&HouseholdParameters::default()).unwrap();

        assert_eq!(
            labels(&result),
            vec![
                "Total Income for Person 1",
                "Total Income for Person 2",
                "Family Income",
                "Family Cost of Childcare After CCS",
                "Total Take Home for Person 1 (Income After Tax)",
                "Total Take Home for Person 2 (Income After Tax)",
                "Family Take Home",
                "Family Take Home After Childcare",
            ]
        );

        let lines: Vec<&str> = result.explanation.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(
            lines[2],
            "3. Family Income: total_income_person_1($92000.00) + total_income_person_2($92000.00) = $184000.00"
        );
        assert_eq!(
            lines[3],
            "4. Family Cost of Childcare After CCS: (hourly_childcare_rate($18.75) * required_hours_per_week(40) - weekly_subsidy($352.09)) * weeks_in_care(48) = $19099.70"
        );
        assert_eq!(
            lines[7],
            "8. Family Take Home After Childcare: total_take_home_pay($139586.00) - family_cost_after_ccs($19099.70) * number_of_children_in_childcare(1) = $120486.30"
        );
    }

    #[test]
    fn test_family_income_precedes_take_home_lines() {
        let result =
            calculate_total_take_home_pay_with_childcare(&HouseholdParameters::default()).unwrap();
        let text = &result.explanation;

        let family_income = text.find("Family Income").unwrap();
        let first_take_home = text.find("Total Take Home for Person 1").unwrap();
        let second_take_home = text.find("Total Take Home for Person 2").unwrap();
        assert!(family_income < first_take_home);
        assert!(first_take_home < second_take_home);
    }

    #[test]
    fn test_no_days_off_omits_adjusted_income_lines() {
        let result =
            calculate_total_take_home_pay_with_childcare(&HouseholdParameters::default()).unwrap();
        assert!(!result.explanation.contains("Adjusted Income"));
    }

    #[test]
    fn test_days_off_adds_adjusted_income_line_first() {
        let mut params = HouseholdParameters::default();
        params.second.days_off_per_week = dec("1");

        let result = calculate_total_take_home_pay_with_childcare(&params).unwrap();

        assert_eq!(result.steps[0].label, "Adjusted Income for Person 2");
        assert_eq!(
            result.steps[0].render(),
            "1. Adjusted Income for Person 2: income($92000.00) * ((work_days_per_week(5) - days_off_per_week(1)) / work_days_per_week(5)) = $73600.00"
        );
        assert_eq!(result.financials.second.adjusted_income, dec("73600"));
        assert_eq!(
            result.steps[2].render(),
            "3. Total Income for Person 2: $73600.00(Adjusted Income)"
        );
    }

    #[test]
    fn test_days_off_reduce_required_childcare_hours() {
        let mut params = HouseholdParameters::default();
        params.second.days_off_per_week = dec("1");

        let result = calculate_total_take_home_pay_with_childcare(&params).unwrap();

        assert_eq!(result.financials.childcare.required_hours_per_week, dec("32"));
        // Means test re-scales the already adjusted income: 92,000 + 73,600 * 4/5
        assert_eq!(result.financials.childcare.family_income, dec("150880"));
    }

    #[test]
    fn test_nannying_adds_rate_and_income_lines() {
        let mut params = HouseholdParameters::default();
        params.first.days_off_per_week = dec("2");
        params.first.days_nannying_per_week = dec("2");
        params.number_of_children_to_nanny = dec("2");

        let result = calculate_total_take_home_pay_with_childcare(&params).unwrap();

        assert_eq!(
            labels(&result)[..4],
            [
                "Adjusted Income for Person 1",
                "Effective Nannying Rate",
                "Nannying Income for Person 1",
                "Total Income for Person 1",
            ]
        );
        // (35 + 26.25) * 2 days * 8 hours * 52 weeks
        assert_eq!(result.financials.first.nannying_income, dec("50960"));
        // 92,000 * 3/5 + 50,960
        assert_eq!(result.financials.first.total_income, dec("106160"));
        assert_eq!(
            result.steps[1].render(),
            "2. Effective Nannying Rate: nannying_base_rate($35.00) + (discount of 25% for each additional child)[1] = $61.25"
        );
        assert_eq!(
            result.steps[3].render(),
            "4. Total Income for Person 1: $106160.00(Adjusted Income + Nannying Income)"
        );
    }

    #[test]
    fn test_not_expecting_baby_has_no_leave_payment() {
        let params = HouseholdParameters {
            expecting_another_baby: false,
            ..HouseholdParameters::default()
        };

        let result = calculate_total_take_home_pay_with_childcare(&params).unwrap();

        assert_eq!(result.parental_leave_payment, Decimal::ZERO);
        assert!(!result.explanation.contains("Parental Leave Value"));
        assert_eq!(
            result.financials.total_take_home_pay_with_leave,
            result.financials.total_take_home_pay
        );
    }

    #[test]
    fn test_leave_value_is_reported_without_an_explanation_step() {
        let result =
            calculate_total_take_home_pay_with_childcare(&HouseholdParameters::default()).unwrap();

        assert!(result.parental_leave_payment > Decimal::ZERO);
        assert!(!result.explanation.contains("Parental Leave Value"));
        assert!(
            result
                .explanation
                .lines()
                .last()
                .unwrap()
                .starts_with("8. Family Take Home After Childcare: ")
        );
    }

    #[test]
    fn test_oversized_income_is_an_overflow_error() {
        let mut params = HouseholdParameters::default();
        params.first.income = dec("20000000000000000000000000000");

        let result = calculate_total_take_home_pay_with_childcare(&params);

        assert!(matches!(result, Err(EngineError::ArithmeticOverflow { .. })));
    }

    #[test]
    fn test_oversized_children_to_nanny_is_an_overflow_error() {
        let mut params = HouseholdParameters::default();
        params.first.days_nannying_per_week = dec("1");
        params.number_of_children_to_nanny = Decimal::MAX;

        let result = calculate_total_take_home_pay_with_childcare(&params);

        assert!(matches!(result, Err(EngineError::ArithmeticOverflow { .. })));
    }

    #[test]
    fn test_most_negative_children_to_nanny_pays_base_rate() {
        let mut params = HouseholdParameters::default();
        params.first.days_nannying_per_week = dec("1");
        params.number_of_children_to_nanny = Decimal::MIN;

        let result = calculate_total_take_home_pay_with_childcare(&params).unwrap();

        // 35 * 1 day * 8 hours * 52 weeks
        assert_eq!(result.financials.first.nannying_income, dec("14560"));
    }

    #[test]
    fn test_leave_uses_raw_income_not_adjusted() {
        let mut params = HouseholdParameters::default();
        params.first.days_off_per_week = dec("2");

        let result = calculate_total_take_home_pay_with_childcare(&params).unwrap();

        assert_eq!(
            result.financials.first.parental_leave_entitlement,
            result.financials.second.parental_leave_entitlement
        );
    }

    #[test]
    fn test_childcare_cost_scales_with_children() {
        let params = HouseholdParameters {
            number_of_children_in_childcare: dec("2"),
            ..HouseholdParameters::default()
        };

        let result = calculate_total_take_home_pay_with_childcare(&params).unwrap();

        assert_eq!(result.child_care_cost, dec("38199.3984"));
        assert_eq!(result.with_children, dec("101386.6016"));
    }

    #[test]
    fn test_in_home_care_cap_is_applied_per_child() {
        let params = HouseholdParameters {
            childcare_category: Some(ChildcareCategory::InHomeCare),
            hourly_childcare_rate: dec("40"),
            number_of_children_in_childcare: dec("2"),
            ..HouseholdParameters::default()
        };

        let result = calculate_total_take_home_pay_with_childcare(&params).unwrap();

        assert_eq!(
            result.child_care_cost,
            result.financials.childcare.family_cost * dec("2")
        );
    }

    #[test]
    fn test_zero_work_days_is_rejected() {
        let mut params = HouseholdParameters::default();
        params.first.work_days_per_week = Decimal::ZERO;

        let result = calculate_total_take_home_pay_with_childcare(&params);

        match result {
            Err(EngineError::InvalidSchedule { parent, .. }) => assert_eq!(parent, "Person 1"),
            other => panic!("Expected InvalidSchedule, got {:?}", other),
        }
    }

    #[test]
    fn test_adjusted_income_is_not_clamped() {
        let schedule = ParentSchedule {
            work_days_per_week: dec("2"),
            days_off_per_week: dec("3"),
            income: dec("40000"),
            ..ParentSchedule::default()
        };
        assert_eq!(
            calculate_adjusted_income("Person 1", &schedule).unwrap(),
            dec("-20000")
        );
    }

    #[test]
    fn test_calculation_is_idempotent() {
        let mut params = HouseholdParameters::default();
        params.first.days_off_per_week = dec("1.5");
        params.second.days_nannying_per_week = dec("1");

        let first = calculate_total_take_home_pay_with_childcare(&params).unwrap();
        let second = calculate_total_take_home_pay_with_childcare(&params).unwrap();

        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn prop_steps_are_numbered_without_gaps(
            off_1 in 0u32..3,
            off_2 in 0u32..3,
            nanny_1 in 0u32..3,
            nanny_2 in 0u32..3,
            expecting in any::<bool>(),
        ) {
            let mut params = HouseholdParameters::default();
            params.first.days_off_per_week = Decimal::from(off_1);
            params.second.days_off_per_week = Decimal::from(off_2);
            params.first.days_nannying_per_week = Decimal::from(nanny_1);
            params.second.days_nannying_per_week = Decimal::from(nanny_2);
            params.expecting_another_baby = expecting;

            let result = calculate_total_take_home_pay_with_childcare(&params).unwrap();

            for (index, step) in result.steps.iter().enumerate() {
                prop_assert_eq!(step.step_number as usize, index + 1);
            }
            prop_assert_eq!(result.explanation.lines().count(), result.steps.len());
            prop_assert_eq!(
                result.steps.last().map(|s| s.label.as_str()),
                Some("Family Take Home After Childcare")
            );
        }

        #[test]
        fn prop_identical_inputs_give_identical_results(
            income_1 in 0u32..300_000,
            income_2 in 0u32..300_000,
            children in 0u32..4,
        ) {
            let mut params = HouseholdParameters::default();
            params.first.income = Decimal::from(income_1);
            params.second.income = Decimal::from(income_2);
            params.number_of_children_in_childcare = Decimal::from(children);

            let a = calculate_total_take_home_pay_with_childcare(&params).unwrap();
            let b = calculate_total_take_home_pay_with_childcare(&params).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
