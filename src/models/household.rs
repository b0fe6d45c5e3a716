//! Household parameter models.
//!
//! This module defines the input record for a scenario calculation: one
//! [`ParentSchedule`] per parent plus the childcare and nannying settings
//! shared by the household.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The category of childcare a child attends.
///
/// Each category carries its own hourly rate cap for the Child Care Subsidy.
///
/// # Example
///
/// ```
/// use childcare_calculator::models::ChildcareCategory;
///
/// let category: ChildcareCategory = serde_json::from_str("\"family-day-care\"").unwrap();
/// assert_eq!(category, ChildcareCategory::FamilyDayCare);
/// assert_eq!(category.as_str(), "family-day-care");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChildcareCategory {
    /// Long day care delivered from a centre.
    CentreBased,
    /// Care delivered by an educator in their own home.
    FamilyDayCare,
    /// Before and after school care.
    OutsideSchoolHours,
    /// Care delivered in the family's home by an approved service.
    InHomeCare,
    /// Private nanny arrangement, not eligible for the subsidy.
    Nannying,
}

impl ChildcareCategory {
    /// Returns the kebab-case name used in requests and explanation text.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChildcareCategory::CentreBased => "centre-based",
            ChildcareCategory::FamilyDayCare => "family-day-care",
            ChildcareCategory::OutsideSchoolHours => "outside-school-hours",
            ChildcareCategory::InHomeCare => "in-home-care",
            ChildcareCategory::Nannying => "nannying",
        }
    }

    /// Parses a category name, returning `None` for anything unrecognised.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim() {
            "centre-based" => Some(ChildcareCategory::CentreBased),
            "family-day-care" => Some(ChildcareCategory::FamilyDayCare),
            "outside-school-hours" => Some(ChildcareCategory::OutsideSchoolHours),
            "in-home-care" => Some(ChildcareCategory::InHomeCare),
            "nannying" => Some(ChildcareCategory::Nannying),
            _ => None,
        }
    }
}

/// One parent's income and weekly work pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParentSchedule {
    /// Annual pre-tax income from employment.
    pub income: Decimal,
    /// Hours worked on a working day.
    pub work_hours_per_day: Decimal,
    /// Nominal working days per week. Must be nonzero.
    pub work_days_per_week: Decimal,
    /// Working days per week the parent takes off to care for children.
    pub days_off_per_week: Decimal,
    /// Days per week spent nannying other children.
    pub days_nannying_per_week: Decimal,
    /// Weeks of employer-paid parental leave available for a new child.
    pub weeks_paid_parental_leave: Decimal,
}

impl ParentSchedule {
    /// Days per week actually worked, net of days off.
    ///
    /// Not clamped; a parent with more days off than work days yields a
    /// negative value here. `None` when the difference is out of range.
    pub fn days_worked_per_week(&self) -> Option<Decimal> {
        self.work_days_per_week.checked_sub(self.days_off_per_week)
    }

    /// Returns true if the parent takes any days off work.
    pub fn has_days_off(&self) -> bool {
        self.days_off_per_week > Decimal::ZERO
    }

    /// Returns true if the parent nannies on any day of the week.
    pub fn is_nannying(&self) -> bool {
        self.days_nannying_per_week > Decimal::ZERO
    }
}

impl Default for ParentSchedule {
    fn default() -> Self {
        Self {
            income: Decimal::from(92_000),
            work_hours_per_day: Decimal::from(8),
            work_days_per_week: Decimal::from(5),
            days_off_per_week: Decimal::ZERO,
            days_nannying_per_week: Decimal::ZERO,
            weeks_paid_parental_leave: Decimal::from(14),
        }
    }
}

/// The complete set of parameters for one household scenario.
///
/// The record is immutable for the duration of a calculation.
///
/// # Example
///
/// ```
/// use childcare_calculator::models::{ChildcareCategory, HouseholdParameters};
/// use rust_decimal::Decimal;
///
/// let params = HouseholdParameters::default();
/// assert_eq!(params.first.income, Decimal::from(92_000));
/// assert_eq!(params.childcare_category, Some(ChildcareCategory::FamilyDayCare));
/// assert!(params.expecting_another_baby);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseholdParameters {
    /// The first parent ("Person 1").
    pub first: ParentSchedule,
    /// The second parent ("Person 2").
    pub second: ParentSchedule,
    /// Hourly fee charged by the childcare provider.
    pub hourly_childcare_rate: Decimal,
    /// The childcare category, or `None` when unknown.
    pub childcare_category: Option<ChildcareCategory>,
    /// Base hourly rate charged when nannying one child.
    pub nannying_rate: Decimal,
    /// Number of children looked after while nannying.
    pub number_of_children_to_nanny: Decimal,
    /// Weeks per year the children are not in childcare.
    pub weeks_without_childcare: Decimal,
    /// Number of the household's children in childcare.
    pub number_of_children_in_childcare: Decimal,
    /// Whether the household is planning another child.
    pub expecting_another_baby: bool,
}

impl Default for HouseholdParameters {
    fn default() -> Self {
        Self {
            first: ParentSchedule::default(),
            second: ParentSchedule::default(),
            hourly_childcare_rate: Decimal::new(1875, 2),
            childcare_category: Some(ChildcareCategory::FamilyDayCare),
            nannying_rate: Decimal::from(35),
            number_of_children_to_nanny: Decimal::ONE,
            weeks_without_childcare: Decimal::from(4),
            number_of_children_in_childcare: Decimal::ONE,
            expecting_another_baby: true,
        }
    }
}
