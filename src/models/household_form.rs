//! Flat household parameter form.
//!
//! Scenarios arrive from clients and configuration files as a flat mapping
//! of camelCase field names (`income1`, `workDaysPerWeek2`, ...) to values.
//! Every field is optional; missing fields fall back to a set of defaults
//! when the form is turned into [`HouseholdParameters`].

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::amount::parse_amount;
use super::household::{ChildcareCategory, HouseholdParameters, ParentSchedule};

#[derive(Deserialize)]
#[serde(untagged)]
enum AmountInput {
    Number(Decimal),
    Text(String),
}

/// Accepts an amount as a number, a numeric string or formatted text like
/// `"$92,000"`.
fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let input: Option<AmountInput> = Option::deserialize(deserializer)?;
    Ok(input.map(|value| match value {
        AmountInput::Number(amount) => amount,
        AmountInput::Text(text) => parse_amount(&text),
    }))
}

/// Keeps an explicit `null` apart from a missing field: `Some(None)` for
/// `null`, and `None` (via `#[serde(default)]`) when the field is absent.
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// A household scenario as a flat, partially-filled form.
///
/// # Example
///
/// ```
/// use childcare_calculator::models::{HouseholdForm, HouseholdParameters};
/// use rust_decimal::Decimal;
///
/// let form: HouseholdForm = serde_json::from_str(
///     r#"{ "income1": "$120,000", "daysOffPerWeek2": 1, "childcareType": "centre-based" }"#,
/// )
/// .unwrap();
///
/// let params = form.into_parameters(&HouseholdParameters::default());
/// assert_eq!(params.first.income, Decimal::from(120_000));
/// assert_eq!(params.second.days_off_per_week, Decimal::ONE);
/// assert_eq!(params.second.income, Decimal::from(92_000));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HouseholdForm {
    /// First parent's annual pre-tax income.
    #[serde(deserialize_with = "lenient_amount", skip_serializing_if = "Option::is_none")]
    pub income1: Option<Decimal>,
    /// Second parent's annual pre-tax income.
    #[serde(deserialize_with = "lenient_amount", skip_serializing_if = "Option::is_none")]
    pub income2: Option<Decimal>,
    /// First parent's hours per working day.
    #[serde(deserialize_with = "lenient_amount", skip_serializing_if = "Option::is_none")]
    pub work_hours_per_day1: Option<Decimal>,
    /// Second parent's hours per working day.
    #[serde(deserialize_with = "lenient_amount", skip_serializing_if = "Option::is_none")]
    pub work_hours_per_day2: Option<Decimal>,
    /// First parent's working days per week.
    #[serde(deserialize_with = "lenient_amount", skip_serializing_if = "Option::is_none")]
    pub work_days_per_week1: Option<Decimal>,
    /// Second parent's working days per week.
    #[serde(deserialize_with = "lenient_amount", skip_serializing_if = "Option::is_none")]
    pub work_days_per_week2: Option<Decimal>,
    /// First parent's days off per week.
    #[serde(deserialize_with = "lenient_amount", skip_serializing_if = "Option::is_none")]
    pub days_off_per_week1: Option<Decimal>,
    /// Second parent's days off per week.
    #[serde(deserialize_with = "lenient_amount", skip_serializing_if = "Option::is_none")]
    pub days_off_per_week2: Option<Decimal>,
    /// Hourly fee charged by the childcare provider.
    #[serde(deserialize_with = "lenient_amount", skip_serializing_if = "Option::is_none")]
    pub hourly_childcare_rate: Option<Decimal>,
    /// Childcare category name; unrecognised names mean no subsidy.
    ///
    /// A missing field uses the default category, while an explicit `null`
    /// selects no category at all (and so no subsidy).
    #[serde(deserialize_with = "present_or_null", skip_serializing_if = "Option::is_none")]
    pub childcare_type: Option<Option<String>>,
    /// Base hourly nannying rate.
    #[serde(deserialize_with = "lenient_amount", skip_serializing_if = "Option::is_none")]
    pub nannying_rate: Option<Decimal>,
    /// Number of children looked after while nannying.
    #[serde(deserialize_with = "lenient_amount", skip_serializing_if = "Option::is_none")]
    pub number_of_children_to_nanny: Option<Decimal>,
    /// First parent's nannying days per week.
    #[serde(deserialize_with = "lenient_amount", skip_serializing_if = "Option::is_none")]
    pub days_nannying_per_week1: Option<Decimal>,
    /// Second parent's nannying days per week.
    #[serde(deserialize_with = "lenient_amount", skip_serializing_if = "Option::is_none")]
    pub days_nannying_per_week2: Option<Decimal>,
    /// Weeks per year without childcare.
    #[serde(deserialize_with = "lenient_amount", skip_serializing_if = "Option::is_none")]
    pub weeks_without_childcare: Option<Decimal>,
    /// Number of children in childcare.
    #[serde(deserialize_with = "lenient_amount", skip_serializing_if = "Option::is_none")]
    pub number_of_children_in_childcare: Option<Decimal>,
    /// First parent's weeks of paid parental leave.
    #[serde(deserialize_with = "lenient_amount", skip_serializing_if = "Option::is_none")]
    pub weeks_paid_parental_leave1: Option<Decimal>,
    /// Second parent's weeks of paid parental leave.
    #[serde(deserialize_with = "lenient_amount", skip_serializing_if = "Option::is_none")]
    pub weeks_paid_parental_leave2: Option<Decimal>,
    /// Whether another child is expected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expecting_another_baby: Option<bool>,
}

impl HouseholdForm {
    /// Fills a complete parameter record, taking missing fields from `defaults`.
    ///
    /// A `childcareType` that is present but unrecognised becomes `None`
    /// rather than falling back to the default category.
    pub fn into_parameters(self, defaults: &HouseholdParameters) -> HouseholdParameters {
        let first = ParentSchedule {
            income: self.income1.unwrap_or(defaults.first.income),
            work_hours_per_day: self
                .work_hours_per_day1
                .unwrap_or(defaults.first.work_hours_per_day),
            work_days_per_week: self
                .work_days_per_week1
                .unwrap_or(defaults.first.work_days_per_week),
            days_off_per_week: self
                .days_off_per_week1
                .unwrap_or(defaults.first.days_off_per_week),
            days_nannying_per_week: self
                .days_nannying_per_week1
                .unwrap_or(defaults.first.days_nannying_per_week),
            weeks_paid_parental_leave: self
                .weeks_paid_parental_leave1
                .unwrap_or(defaults.first.weeks_paid_parental_leave),
        };

        let second = ParentSchedule {
            income: self.income2.unwrap_or(defaults.second.income),
            work_hours_per_day: self
                .work_hours_per_day2
                .unwrap_or(defaults.second.work_hours_per_day),
            work_days_per_week: self
                .work_days_per_week2
                .unwrap_or(defaults.second.work_days_per_week),
            days_off_per_week: self
                .days_off_per_week2
                .unwrap_or(defaults.second.days_off_per_week),
            days_nannying_per_week: self
                .days_nannying_per_week2
                .unwrap_or(defaults.second.days_nannying_per_week),
            weeks_paid_parental_leave: self
                .weeks_paid_parental_leave2
                .unwrap_or(defaults.second.weeks_paid_parental_leave),
        };

        let childcare_category = match self.childcare_type {
            Some(Some(name)) => ChildcareCategory::parse(&name),
            Some(None) => None,
            None => defaults.childcare_category,
        };

        HouseholdParameters {
            first,
            second,
            hourly_childcare_rate: self
                .hourly_childcare_rate
                .unwrap_or(defaults.hourly_childcare_rate),
            childcare_category,
            nannying_rate: self.nannying_rate.unwrap_or(defaults.nannying_rate),
            number_of_children_to_nanny: self
                .number_of_children_to_nanny
                .unwrap_or(defaults.number_of_children_to_nanny),
            weeks_without_childcare: self
                .weeks_without_childcare
                .unwrap_or(defaults.weeks_without_childcare),
            number_of_children_in_childcare: self
                .number_of_children_in_childcare
                .unwrap_or(defaults.number_of_children_in_childcare),
            expecting_another_baby: self
                .expecting_another_baby
                .unwrap_or(defaults.expecting_another_baby),
        }
    }
}

impl From<&HouseholdParameters> for HouseholdForm {
    fn from(params: &HouseholdParameters) -> Self {
        HouseholdForm {
            income1: Some(params.first.income),
            income2: Some(params.second.income),
            work_hours_per_day1: Some(params.first.work_hours_per_day),
            work_hours_per_day2: Some(params.second.work_hours_per_day),
            work_days_per_week1: Some(params.first.work_days_per_week),
            work_days_per_week2: Some(params.second.work_days_per_week),
            days_off_per_week1: Some(params.first.days_off_per_week),
            days_off_per_week2: Some(params.second.days_off_per_week),
            hourly_childcare_rate: Some(params.hourly_childcare_rate),
            childcare_type: Some(params.childcare_category.map(|c| c.as_str().to_string())),
            nannying_rate: Some(params.nannying_rate),
            number_of_children_to_nanny: Some(params.number_of_children_to_nanny),
            days_nannying_per_week1: Some(params.first.days_nannying_per_week),
            days_nannying_per_week2: Some(params.second.days_nannying_per_week),
            weeks_without_childcare: Some(params.weeks_without_childcare),
            number_of_children_in_childcare: Some(params.number_of_children_in_childcare),
            weeks_paid_parental_leave1: Some(params.first.weeks_paid_parental_leave),
            weeks_paid_parental_leave2: Some(params.second.weeks_paid_parental_leave),
            expecting_another_baby: Some(params.expecting_another_baby),
        }
    }
}
