//! Application state for the household calculator API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;

use super::store::{InMemoryScenarioStore, ScenarioStore};

/// Shared application state.
///
/// Contains resources that are shared across all request handlers:
/// the loaded configuration and the saved scenario store.
#[derive(Clone)]
pub struct AppState {
    /// The loaded calculator configuration.
    config: Arc<ConfigLoader>,
    /// Saved scenarios.
    scenarios: Arc<dyn ScenarioStore>,
}

impl AppState {
    /// Creates a new application state with an empty in-memory scenario store.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_store(config, Arc::new(InMemoryScenarioStore::new()))
    }

    /// Creates a new application state backed by the given scenario store.
    pub fn with_store(config: ConfigLoader, scenarios: Arc<dyn ScenarioStore>) -> Self {
        Self {
            config: Arc::new(config),
            scenarios,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the saved scenario store.
    pub fn scenarios(&self) -> &dyn ScenarioStore {
        self.scenarios.as_ref()
    }
}
