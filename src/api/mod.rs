//! HTTP API module for the household calculator.
//!
//! This module provides the REST API endpoints for calculating a
//! household's take-home pay with childcare and for keeping named
//! scenarios for comparison.

mod handlers;
mod request;
mod response;
mod state;
mod store;

pub use handlers::create_router;
pub use request::{CalculationRequest, SaveScenarioRequest};
pub use response::{ApiError, CalculationResponse, ScenarioResponse};
pub use state::AppState;
pub use store::{InMemoryScenarioStore, ScenarioStore};
