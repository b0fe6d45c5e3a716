//! HTTP request handlers for the household calculator API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_total_take_home_pay_with_childcare;
use crate::error::EngineError;

use super::request::{CalculationRequest, SaveScenarioRequest};
use super::response::{ApiError, ApiErrorResponse, CalculationResponse, ScenarioResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/defaults", get(defaults_handler))
        .route("/scenarios", get(list_scenarios_handler).post(save_scenario_handler))
        .route("/scenarios/:id", delete(delete_scenario_handler))
        .with_state(state)
}

/// Converts a JSON extraction failure into a 400 error body.
fn json_rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error)
}

/// Handler for POST /calculate endpoint.
///
/// Fills missing fields from the configured defaults and returns the
/// scenario result with its explanation.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_error(correlation_id, rejection).into_response(),
    };

    let parameters = request.into_parameters(state.config().defaults());

    let start_time = Instant::now();
    match calculate_total_take_home_pay_with_childcare(&parameters) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                with_children = %result.with_children,
                child_care_cost = %result.child_care_cost,
                parental_leave_payment = %result.parental_leave_payment,
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                Json(CalculationResponse::new(parameters, result)),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /defaults endpoint.
async fn defaults_handler(State(state): State<AppState>) -> Response {
    (StatusCode::OK, Json(state.config().defaults().clone())).into_response()
}

/// Handler for GET /scenarios endpoint.
async fn list_scenarios_handler(State(state): State<AppState>) -> Response {
    let scenarios: Vec<ScenarioResponse> = state
        .scenarios()
        .list()
        .into_iter()
        .map(ScenarioResponse::from)
        .collect();
    (StatusCode::OK, Json(scenarios)).into_response()
}

/// Handler for POST /scenarios endpoint.
async fn save_scenario_handler(
    State(state): State<AppState>,
    payload: Result<Json<SaveScenarioRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_error(correlation_id, rejection).into_response(),
    };

    if request.trimmed_name().is_none() {
        warn!(correlation_id = %correlation_id, "Scenario name is blank");
        return ApiErrorResponse::bad_request(ApiError::validation_error(
            "scenario name must not be blank",
        ))
        .into_response();
    }

    let scenario = request.into_scenario(state.config().defaults());
    info!(
        correlation_id = %correlation_id,
        scenario_id = %scenario.id,
        name = %scenario.name,
        "Saving scenario"
    );
    state.scenarios().save(scenario.clone());

    (StatusCode::CREATED, Json(ScenarioResponse::from(scenario))).into_response()
}

/// Handler for DELETE /scenarios/:id endpoint.
async fn delete_scenario_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let result = Uuid::parse_str(&id)
        .map_err(|_| EngineError::ScenarioNotFound { id: id.clone() })
        .and_then(|uuid| state.scenarios().delete(uuid));

    match result {
        Ok(()) => {
            info!(scenario_id = %id, "Deleted scenario");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => {
            warn!(scenario_id = %id, error = %err, "Scenario delete failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::HouseholdParameters;
    use axum::body::Body;
    use axum::http::Request;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/household").expect("Failed to load config");
        AppState::new(config)
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_bytes(response: Response) -> axum::body::Bytes {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_empty_request_calculates_default_household() {
        let router = create_router(create_test_state());

        let response = router.oneshot(post_json("/calculate", "{}")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let result: CalculationResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(result.parameters, HouseholdParameters::default());
        assert_eq!(
            result.result.with_children,
            Decimal::from_str("120486.3008").unwrap()
        );
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_json("/calculate", "{invalid json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_zero_work_days_returns_invalid_schedule() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_json("/calculate", r#"{ "workDaysPerWeek2": 0 }"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "INVALID_SCHEDULE");
        assert!(error.message.contains("Person 2"));
    }

    #[tokio::test]
    async fn test_defaults_endpoint_returns_configured_defaults() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(Request::builder().uri("/defaults").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let defaults: HouseholdParameters =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(defaults, HouseholdParameters::default());
    }

    #[tokio::test]
    async fn test_blank_scenario_name_returns_validation_error() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_json("/scenarios", r#"{ "name": "   " }"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_missing_scenario_name_returns_validation_error() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_json("/scenarios", r#"{ "parameters": {} }"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("missing field"));
    }

    #[tokio::test]
    async fn test_delete_with_malformed_id_returns_404() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/scenarios/not-a-uuid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "SCENARIO_NOT_FOUND");
    }
}
