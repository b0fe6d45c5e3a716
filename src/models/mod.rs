//! Core data models for the household calculator.
//!
//! This module contains the parameter, form, result and saved-scenario
//! records used throughout the crate.

mod amount;
mod calculation_result;
mod household;
mod household_form;
mod saved_scenario;

pub use amount::{format_currency, parse_amount};
pub use calculation_result::{
    ChildcareSubsidyBreakdown, ExplanationStep, IntermediateFinancials, ParentFinancials,
    ScenarioResult,
};
pub use household::{ChildcareCategory, HouseholdParameters, ParentSchedule};
pub use household_form::HouseholdForm;
pub use saved_scenario::{DISPLAY_NAME_LIMIT, SavedScenario};
