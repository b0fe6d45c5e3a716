//! Error types for the household calculator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while evaluating or storing
//! scenarios.

use thiserror::Error;

/// The main error type for the household calculator.
///
/// # Example
///
/// ```
/// use childcare_calculator::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/service.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/service.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A parent's schedule cannot be used in the calculation.
    #[error("Invalid schedule for {parent} ({field}): {message}")]
    InvalidSchedule {
        /// The parent the schedule belongs to (e.g. "Person 1").
        parent: String,
        /// The offending field.
        field: String,
        /// A description of the problem.
        message: String,
    },

    /// No saved scenario exists with the given id.
    #[error("Scenario not found: {id}")]
    ScenarioNotFound {
        /// The id that was requested.
        id: String,
    },

    /// A figure grew beyond the range of a decimal amount.
    #[error("Arithmetic overflow while calculating {quantity}")]
    ArithmeticOverflow {
        /// The quantity being calculated (e.g. "family income").
        quantity: String,
    },
}

impl EngineError {
    /// Builds the error raised when a parent's work days per week is zero.
    pub fn zero_work_days(parent: &str) -> Self {
        EngineError::InvalidSchedule {
            parent: parent.to_string(),
            field: "work_days_per_week".to_string(),
            message: "work days per week must be greater than zero".to_string(),
        }
    }

    /// Builds the error raised when calculating `quantity` overflows.
    pub fn overflow(quantity: &str) -> Self {
        EngineError::ArithmeticOverflow {
            quantity: quantity.to_string(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/defaults.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/defaults.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_zero_work_days_names_parent_and_field() {
        let error = EngineError::zero_work_days("Person 2");
        assert_eq!(
            error.to_string(),
            "Invalid schedule for Person 2 (work_days_per_week): work days per week must be greater than zero"
        );
    }

    #[test]
    fn test_scenario_not_found_displays_id() {
        let error = EngineError::ScenarioNotFound {
            id: "abc".to_string(),
        };
        assert_eq!(error.to_string(), "Scenario not found: abc");
    }

    #[test]
    fn test_overflow_names_quantity() {
        let error = EngineError::overflow("family income");
        assert_eq!(
            error.to_string(),
            "Arithmetic overflow while calculating family income"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_schedule() -> EngineResult<()> {
            Err(EngineError::zero_work_days("Person 1"))
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_schedule()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
