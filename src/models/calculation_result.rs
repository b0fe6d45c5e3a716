//! Scenario result models.
//!
//! This module contains the [`ScenarioResult`] type and the derived figures
//! that make up a calculation: per-parent financials, the subsidy breakdown
//! and the numbered explanation steps.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single numbered step in a scenario explanation.
///
/// Each step records the figures that went into one intermediate value and
/// the formula, with values substituted, that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplanationStep {
    /// The sequential step number, starting at 1.
    pub step_number: u32,
    /// A stable identifier for the kind of step.
    pub rule_id: String,
    /// The human-readable label shown before the formula.
    pub label: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// The formula with substituted values.
    pub reasoning: String,
}

impl ExplanationStep {
    /// Renders the step as a single numbered explanation line.
    ///
    /// # Example
    ///
    /// ```
    /// use childcare_calculator::models::ExplanationStep;
    ///
    /// let step = ExplanationStep {
    ///     step_number: 3,
    ///     rule_id: "family_income".to_string(),
    ///     label: "Family Income".to_string(),
    ///     input: serde_json::json!({}),
    ///     output: serde_json::json!({}),
    ///     reasoning: "$1.00 + $2.00 = $3.00".to_string(),
    /// };
    /// assert_eq!(step.render(), "3. Family Income: $1.00 + $2.00 = $3.00");
    /// ```
    pub fn render(&self) -> String {
        format!("{}. {}: {}", self.step_number, self.label, self.reasoning)
    }
}

/// Income figures derived for one parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentFinancials {
    /// Employment income scaled by the fraction of the work week worked.
    pub adjusted_income: Decimal,
    /// Annual income from nannying other children.
    pub nannying_income: Decimal,
    /// Adjusted income plus nannying income.
    pub total_income: Decimal,
    /// Take-home pay on the total income.
    pub take_home_pay: Decimal,
    /// Value of the employer-paid parental leave allotment.
    pub parental_leave_entitlement: Decimal,
    /// Take-home pay when the leave entitlement is paid on top of total income.
    pub take_home_pay_with_leave: Decimal,
}

/// Breakdown of the Child Care Subsidy calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildcareSubsidyBreakdown {
    /// Family income used for the means test.
    pub family_income: Decimal,
    /// Weekly childcare hours needed while both parents work.
    pub required_hours_per_week: Decimal,
    /// Combined nominal work hours of both parents over a fortnight.
    pub activity_hours_per_fortnight: Decimal,
    /// Subsidy percentage as a fraction (0.9 = 90%).
    pub ccs_percentage: Decimal,
    /// Hourly rate cap for the childcare category.
    pub hourly_rate_cap: Decimal,
    /// Subsidised-hours ceiling from the activity test.
    pub max_subsidized_hours_per_week: Decimal,
    /// Hours per week that attract the subsidy.
    pub eligible_hours: Decimal,
    /// Subsidy paid per eligible hour.
    pub subsidized_hourly_rate: Decimal,
    /// Subsidy paid per week.
    pub weekly_subsidy: Decimal,
    /// Weeks of the year the child is in care.
    pub weeks_in_care: Decimal,
    /// Annual out-of-pocket cost for one child.
    pub family_cost: Decimal,
}

/// Intermediate values computed while evaluating a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntermediateFinancials {
    /// Figures for the first parent.
    pub first: ParentFinancials,
    /// Figures for the second parent.
    pub second: ParentFinancials,
    /// Sum of both parents' total incomes.
    pub family_income: Decimal,
    /// The Child Care Subsidy breakdown.
    pub childcare: ChildcareSubsidyBreakdown,
    /// Combined take-home pay before childcare.
    pub total_take_home_pay: Decimal,
    /// Combined take-home pay including any new-baby leave entitlement.
    pub total_take_home_pay_with_leave: Decimal,
}

/// The outcome of a household scenario calculation.
///
/// # Example
///
/// ```
/// use childcare_calculator::calculation::calculate_total_take_home_pay_with_childcare;
/// use childcare_calculator::models::HouseholdParameters;
///
/// let result = calculate_total_take_home_pay_with_childcare(&HouseholdParameters::default()).unwrap();
/// assert!(result.explanation.starts_with("1. "));
/// assert_eq!(result.steps.len(), result.explanation.lines().count());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Household take-home pay after the annual childcare cost.
    pub with_children: Decimal,
    /// Annual childcare cost after subsidy, across all children in care.
    pub child_care_cost: Decimal,
    /// Extra take-home pay from parental leave for a new child.
    pub parental_leave_payment: Decimal,
    /// Numbered explanation lines joined by newlines.
    pub explanation: String,
    /// The structured explanation steps.
    pub steps: Vec<ExplanationStep>,
    /// Every intermediate value behind the headline figures.
    pub financials: IntermediateFinancials,
}
