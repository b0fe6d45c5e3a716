//! Saved scenario model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::HouseholdParameters;

/// Characters of a scenario name shown before it is truncated.
pub const DISPLAY_NAME_LIMIT: usize = 18;

/// A named set of household parameters kept for later comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedScenario {
    /// Unique identifier for the scenario.
    pub id: Uuid,
    /// The name the user gave the scenario.
    pub name: String,
    /// When the scenario was saved.
    pub created_at: DateTime<Utc>,
    /// The saved parameters.
    pub parameters: HouseholdParameters,
}

impl SavedScenario {
    /// Creates a scenario with a fresh id and the current timestamp.
    ///
    /// Leading and trailing whitespace is trimmed from the name.
    pub fn new(name: &str, parameters: HouseholdParameters) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            created_at: Utc::now(),
            parameters,
        }
    }

    /// Returns the name shortened for list display.
    ///
    /// Names longer than [`DISPLAY_NAME_LIMIT`] characters are cut and
    /// suffixed with `...`.
    ///
    /// # Example
    ///
    /// ```
    /// use childcare_calculator::models::{HouseholdParameters, SavedScenario};
    ///
    /// let scenario = SavedScenario::new("Grandparents two days each", HouseholdParameters::default());
    /// assert_eq!(scenario.display_name(), "Grandparents two d...");
    /// ```
    pub fn display_name(&self) -> String {
        if self.name.chars().count() > DISPLAY_NAME_LIMIT {
            let shortened: String = self.name.chars().take(DISPLAY_NAME_LIMIT).collect();
            format!("{}...", shortened)
        } else {
            self.name.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_name() {
        let scenario = SavedScenario::new("  Part time  ", HouseholdParameters::default());
        assert_eq!(scenario.name, "Part time");
    }

    #[test]
    fn test_new_assigns_unique_ids() {
        let a = SavedScenario::new("a", HouseholdParameters::default());
        let b = SavedScenario::new("a", HouseholdParameters::default());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_short_name_is_not_truncated() {
        let scenario = SavedScenario::new("Nanny share", HouseholdParameters::default());
        assert_eq!(scenario.display_name(), "Nanny share");
    }

    #[test]
    fn test_name_at_limit_is_not_truncated() {
        let name = "a".repeat(DISPLAY_NAME_LIMIT);
        let scenario = SavedScenario::new(&name, HouseholdParameters::default());
        assert_eq!(scenario.display_name(), name);
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let name = "é".repeat(DISPLAY_NAME_LIMIT + 2);
        let scenario = SavedScenario::new(&name, HouseholdParameters::default());
        assert_eq!(
            scenario.display_name(),
            format!("{}...", "é".repeat(DISPLAY_NAME_LIMIT))
        );
    }
}
