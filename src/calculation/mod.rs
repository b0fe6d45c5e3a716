//! Calculation logic for the household calculator.
//!
//! This module contains the income tax and Medicare levy schedule, the Child
//! Care Subsidy rules (means test, activity test and hourly rate caps),
//! nannying income, parental leave valuation, and the scenario calculation
//! that combines them with a numbered explanation.

mod checked;
mod childcare_subsidy;
mod explanation;
mod nanny_income;
mod parental_leave;
mod scenario;
mod tax;

pub use childcare_subsidy::{
    FamilyChildcareNeeds, WEEKS_PER_YEAR, calculate_ccs, calculate_ccs_percentage,
    calculate_family_income_and_childcare, ccs_cut_off, ccs_taper_start, ccs_taper_step,
    hourly_rate_cap, max_ccs_percentage, max_subsidized_hours_per_week,
};
pub use explanation::{ExplanationBuilder, StepDraft};
pub use nanny_income::{
    ASSUMED_NANNY_HOURS_PER_DAY, calculate_nanny_rate, calculate_nannying_income,
    nanny_discount_additional_child,
};
pub use parental_leave::{FULL_TIME_DAYS_PER_WEEK, calculate_parental_leave_entitlement};
pub use scenario::{calculate_adjusted_income, calculate_total_take_home_pay_with_childcare};
pub use tax::{
    TaxBracket, calculate_medicare_levy, calculate_take_home_pay, calculate_tax,
    medicare_levy_rate, tax_brackets,
};
