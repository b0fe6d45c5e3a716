//! Configuration types for the household calculator service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::HouseholdParameters;

/// Identifying information about the running service.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceMetadata {
    /// The human-readable service name.
    pub name: String,
    /// The configuration version.
    pub version: String,
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address the server listens on (e.g. "127.0.0.1:3000").
    pub bind_address: String,
}

/// Service configuration file structure (`service.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Service metadata.
    #[serde(flatten)]
    pub metadata: ServiceMetadata,
    /// Server settings.
    pub server: ServerConfig,
}

/// The complete configuration loaded from YAML files.
///
/// Aggregates the service settings with the default household scenario
/// offered to clients that have not entered their own figures.
#[derive(Debug, Clone)]
pub struct CalculatorConfig {
    service: ServiceConfig,
    defaults: HouseholdParameters,
}

impl CalculatorConfig {
    /// Creates a new CalculatorConfig from its component parts.
    pub fn new(service: ServiceConfig, defaults: HouseholdParameters) -> Self {
        Self { service, defaults }
    }

    /// Returns the service configuration.
    pub fn service(&self) -> &ServiceConfig {
        &self.service
    }

    /// Returns the default household scenario.
    pub fn defaults(&self) -> &HouseholdParameters {
        &self.defaults
    }
}
