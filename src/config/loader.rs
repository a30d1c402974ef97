//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::downstream::DownstreamService;
use crate::error::{ServiceError, ServiceResult};
use crate::validation::EngineOptions;

use super::types::{DownstreamConfig, ServiceConfig};

/// Name of the configuration file inside a configuration directory.
pub const CONFIG_FILE_NAME: &str = "service.yaml";

/// Loads and provides access to the service configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── service.yaml    # Service, engine and downstream settings
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_input::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Age groups enabled: {}", loader.engine_options().compute_age_group);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ServiceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `service.yaml` is missing
    /// - The file contains invalid YAML
    /// - A downstream URL is not an `http://` or `https://` URL
    ///
    /// # Example
    ///
    /// ```no_run
    /// use salary_input::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// # Ok::<(), salary_input::error::ServiceError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> ServiceResult<Self> {
        let config_path = path.as_ref().join(CONFIG_FILE_NAME);
        let config = Self::load_yaml(&config_path)?;
        Self::validate_downstream(&config.downstream)?;

        info!(
            path = %config_path.display(),
            service = %config.service.name,
            "Loaded service configuration"
        );

        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: ServiceConfig) -> ServiceResult<Self> {
        Self::validate_downstream(&config.downstream)?;
        Ok(Self { config })
    }

    /// Loads and parses the YAML file. An empty file yields the defaults.
    fn load_yaml(path: &Path) -> ServiceResult<ServiceConfig> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ServiceError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        if content.trim().is_empty() {
            return Ok(ServiceConfig::default());
        }

        serde_yaml::from_str(&content).map_err(|e| ServiceError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Checks that every configured downstream URL is usable.
    fn validate_downstream(downstream: &DownstreamConfig) -> ServiceResult<()> {
        for service in DownstreamService::ALL {
            let Some(target) = downstream.target(service) else {
                continue;
            };

            let url = target.url.trim();
            if url.is_empty() {
                return Err(ServiceError::InvalidConfig {
                    field: format!("downstream.{}.url", service.key()),
                    message: "must not be empty".to_string(),
                });
            }
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ServiceError::InvalidConfig {
                    field: format!("downstream.{}.url", service.key()),
                    message: format!("must start with http:// or https://, got '{}'", url),
                });
            }
        }

        Ok(())
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Returns the engine options.
    pub fn engine_options(&self) -> EngineOptions {
        self.config.engine
    }

    /// Returns the downstream service configuration.
    pub fn downstream(&self) -> &DownstreamConfig {
        &self.config.downstream
    }

    /// Returns the text served on the root route.
    pub fn welcome_message(&self) -> &str {
        &self.config.service.welcome_message
    }
}
