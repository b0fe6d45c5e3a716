//! Response types for the household calculator API.
//!
//! This module defines the success bodies, the error response structures
//! and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{HouseholdParameters, SavedScenario, ScenarioResult};

/// Response body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the calculator that produced the result.
    pub engine_version: String,
    /// The complete parameters used, after defaults were applied.
    pub parameters: HouseholdParameters,
    /// The scenario result.
    pub result: ScenarioResult,
}

impl CalculationResponse {
    /// Wraps a result with a fresh calculation id and timestamp.
    pub fn new(parameters: HouseholdParameters, result: ScenarioResult) -> Self {
        Self {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            parameters,
            result,
        }
    }
}

/// A saved scenario as returned by the `/scenarios` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResponse {
    /// Unique identifier for the scenario.
    pub id: Uuid,
    /// The full scenario name.
    pub name: String,
    /// The name shortened for list display.
    pub display_name: String,
    /// When the scenario was saved.
    pub created_at: DateTime<Utc>,
    /// The saved parameters.
    pub parameters: HouseholdParameters,
}

impl From<SavedScenario> for ScenarioResponse {
    fn from(scenario: SavedScenario) -> Self {
        Self {
            display_name: scenario.display_name(),
            id: scenario.id,
            name: scenario.name,
            created_at: scenario.created_at,
            parameters: scenario.parameters,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a scenario not found error response.
    pub fn scenario_not_found(id: &str) -> Self {
        Self::with_details(
            "SCENARIO_NOT_FOUND",
            format!("Scenario not found: {}", id),
            format!("No saved scenario has the id '{}'", id),
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response with the given error body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidSchedule {
                parent,
                field,
                message,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_SCHEDULE",
                    format!("Invalid schedule for {} ({}): {}", parent, field, message),
                    "The household parameters cannot be used in the calculation",
                ),
            },
            EngineError::ScenarioNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::scenario_not_found(&id),
            },
            EngineError::ArithmeticOverflow { quantity } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "ARITHMETIC_OVERFLOW",
                    format!("Arithmetic overflow while calculating {}", quantity),
                    "One or more amounts are too large to calculate with",
                ),
            },
        }
    }
}
