//! Request types for the household calculator API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! and `/scenarios` endpoints.

use serde::{Deserialize, Serialize};

use crate::models::{HouseholdForm, HouseholdParameters, SavedScenario};

/// Request body for the `/calculate` endpoint.
///
/// A flat form of camelCase fields (`income1`, `daysOffPerWeek2`, ...).
/// Every field is optional and falls back to the configured defaults.
/// Amounts may be sent as numbers or as text such as `"$92,000"`.
pub type CalculationRequest = HouseholdForm;

/// Request body for `POST /scenarios`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveScenarioRequest {
    /// The name to save the scenario under.
    pub name: String,
    /// The scenario's parameters, in the same form as a calculation request.
    #[serde(default)]
    pub parameters: CalculationRequest,
}

impl SaveScenarioRequest {
    /// Returns the trimmed name, or `None` if it is blank.
    pub fn trimmed_name(&self) -> Option<&str> {
        let name = self.name.trim();
        (!name.is_empty()).then_some(name)
    }

    /// Builds the scenario to store, filling missing parameters from `defaults`.
    ///
    /// # Example
    ///
    /// ```
    /// use childcare_calculator::api::SaveScenarioRequest;
    /// use childcare_calculator::models::HouseholdParameters;
    /// use rust_decimal::Decimal;
    ///
    /// let request: SaveScenarioRequest =
    ///     serde_json::from_str(r#"{ "name": " Part time ", "parameters": { "daysOffPerWeek1": 2 } }"#)
    ///         .unwrap();
    ///
    /// let scenario = request.into_scenario(&HouseholdParameters::default());
    /// assert_eq!(scenario.name, "Part time");
    /// assert_eq!(scenario.parameters.first.days_off_per_week, Decimal::from(2));
    /// ```
    pub fn into_scenario(self, defaults: &HouseholdParameters) -> SavedScenario {
        let parameters = self.parameters.into_parameters(defaults);
        SavedScenario::new(&self.name, parameters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChildcareCategory;
    use rust_decimal::Decimal;

    #[test]
    fn test_save_request_without_parameters_uses_defaults() {
        let request: SaveScenarioRequest =
            serde_json::from_str(r#"{ "name": "Baseline" }"#).unwrap();
        let scenario = request.into_scenario(&HouseholdParameters::default());

        assert_eq!(scenario.name, "Baseline");
        assert_eq!(scenario.parameters, HouseholdParameters::default());
    }

    #[test]
    fn test_save_request_missing_name_is_rejected() {
        let result = serde_json::from_str::<SaveScenarioRequest>(r#"{ "parameters": {} }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_trimmed_name_rejects_blank_names() {
        let request = SaveScenarioRequest {
            name: "   ".to_string(),
            parameters: CalculationRequest::default(),
        };
        assert_eq!(request.trimmed_name(), None);

        let request = SaveScenarioRequest {
            name: "  Nanny share ".to_string(),
            parameters: CalculationRequest::default(),
        };
        assert_eq!(request.trimmed_name(), Some("Nanny share"));
    }

    #[test]
    fn test_save_request_uses_supplied_defaults() {
        let mut defaults = HouseholdParameters::default();
        defaults.childcare_category = Some(ChildcareCategory::CentreBased);
        defaults.first.income = Decimal::from(150_000);

        let request: SaveScenarioRequest =
            serde_json::from_str(r#"{ "name": "Custom", "parameters": { "income2": "$60,000" } }"#)
                .unwrap();
        let scenario = request.into_scenario(&defaults);

        assert_eq!(scenario.parameters.first.income, Decimal::from(150_000));
        assert_eq!(scenario.parameters.second.income, Decimal::from(60_000));
        assert_eq!(
            scenario.parameters.childcare_category,
            Some(ChildcareCategory::CentreBased)
        );
    }
}
