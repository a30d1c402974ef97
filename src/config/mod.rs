//! Configuration loading and management for the salary input service.
//!
//! This module loads the service configuration from a YAML file: engine
//! feature flags, the welcome text, and the downstream services that consume
//! validated records.
//!
//! # Example
//!
//! ```no_run
//! use salary_input::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Serving as: {}", config.config().service.name);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{
    DEFAULT_WELCOME_MESSAGE, DownstreamConfig, DownstreamTarget, ServiceConfig, ServiceSection,
};
