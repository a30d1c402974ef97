//! Application state for the salary input API.
//!
//! This module defines the shared application state that is available
//! to all request handlers. It holds configuration and the engine only;
//! request data never lives here.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::validation::ValidationEngine;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The loaded service configuration.
    config: Arc<ConfigLoader>,
    /// The engine configured from `config`.
    engine: ValidationEngine,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        let engine = ValidationEngine::new(config.engine_options());
        Self {
            config: Arc::new(config),
            engine,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the validation engine.
    pub fn engine(&self) -> &ValidationEngine {
        &self.engine
    }
}
