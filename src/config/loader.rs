//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading service
//! settings and the default household scenario from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{HouseholdForm, HouseholdParameters};

use super::types::{CalculatorConfig, ServiceConfig, ServiceMetadata};

/// Loads and provides access to calculator configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/household/
/// ├── service.yaml   # Service metadata and server settings
/// └── defaults.yaml  # Default household scenario (flat form fields)
/// ```
///
/// # Example
///
/// ```no_run
/// use childcare_calculator::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/household").unwrap();
/// println!("Listening on {}", loader.bind_address());
/// println!("Default income: ${}", loader.defaults().first.income);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CalculatorConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/household")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from `service.yaml`
    ///
    /// Fields missing from `defaults.yaml` take the built-in defaults.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use childcare_calculator::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/household")?;
    /// # Ok::<(), childcare_calculator::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let service = Self::load_yaml::<ServiceConfig>(&path.join("service.yaml"))?;

        // An empty defaults file deserializes to an empty form
        let form = Self::load_yaml::<Option<HouseholdForm>>(&path.join("defaults.yaml"))?
            .unwrap_or_default();
        let defaults = form.into_parameters(&HouseholdParameters::default());

        Ok(Self {
            config: CalculatorConfig::new(service, defaults),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Returns the service metadata.
    pub fn service(&self) -> &ServiceMetadata {
        &self.config.service().metadata
    }

    /// Returns the address the HTTP server should bind to.
    pub fn bind_address(&self) -> &str {
        &self.config.service().server.bind_address
    }

    /// Returns the default household scenario.
    pub fn defaults(&self) -> &HouseholdParameters {
        self.config.defaults()
    }
}
