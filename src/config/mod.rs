//! Configuration loading for the household calculator service.
//!
//! This module loads the service settings and the default household
//! scenario from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use childcare_calculator::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/household").unwrap();
//! println!("Loaded service: {}", config.service().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CalculatorConfig, ServerConfig, ServiceConfig, ServiceMetadata};
