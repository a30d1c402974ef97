//! Configuration types for the salary input service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from `service.yaml`. Every section has defaults, so an
//! empty file is a valid configuration.

use serde::Deserialize;

use crate::downstream::DownstreamService;
use crate::validation::EngineOptions;

/// Default text served on the root route.
pub const DEFAULT_WELCOME_MESSAGE: &str = "Welcome to the Salary Calculator Service!";

/// Top-level service configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Identity and presentation of the service.
    pub service: ServiceSection,
    /// Which derived fields the engine computes.
    pub engine: EngineOptions,
    /// Services that consume validated records.
    pub downstream: DownstreamConfig,
}

/// Identity and presentation of the service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServiceSection {
    /// Name used in logs.
    pub name: String,
    /// Text returned by `GET /`.
    pub welcome_message: String,
}

impl Default for ServiceSection {
    fn default() -> Self {
        Self {
            name: "user-input-service".to_string(),
            welcome_message: DEFAULT_WELCOME_MESSAGE.to_string(),
        }
    }
}

/// Location of one downstream service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DownstreamTarget {
    /// Endpoint URL the validated payload is addressed to.
    pub url: String,
}

/// Downstream services that consume validated records.
///
/// A service left out of the file is simply not addressed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DownstreamConfig {
    /// Tax-table lookup service.
    pub tax_table: Option<DownstreamTarget>,
    /// Salary calculation service.
    pub calculation: Option<DownstreamTarget>,
    /// Feedback service.
    pub feedback: Option<DownstreamTarget>,
}

impl DownstreamConfig {
    /// Returns the configured target for `service`, if any.
    pub fn target(&self, service: DownstreamService) -> Option<&DownstreamTarget> {
        match service {
            DownstreamService::TaxTable => self.tax_table.as_ref(),
            DownstreamService::Calculation => self.calculation.as_ref(),
            DownstreamService::Feedback => self.feedback.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: ServiceConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.service.welcome_message, DEFAULT_WELCOME_MESSAGE);
        assert!(config.engine.compute_age_group);
        assert!(config.downstream.tax_table.is_none());
    }

    #[test]
    fn test_partial_engine_section() {
        let yaml = r#"
engine:
  compute_income_aggregates: false
"#;
        let config: ServiceConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(config.engine.compute_age_group);
        assert!(!config.engine.compute_income_aggregates);
    }

    #[test]
    fn test_downstream_targets() {
        let yaml = r#"
downstream:
  tax_table:
    url: http://tax-table:5001/tax-table
"#;
        let config: ServiceConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            config.downstream.tax_table,
            Some(DownstreamTarget {
                url: "http://tax-table:5001/tax-table".to_string()
            })
        );
        assert!(config.downstream.calculation.is_none());
        assert!(
            config
                .downstream
                .target(DownstreamService::TaxTable)
                .is_some()
        );
        assert!(
            config
                .downstream
                .target(DownstreamService::Feedback)
                .is_none()
        );
    }

    #[test]
    fn test_downstream_target_requires_url() {
        let yaml = r#"
downstream:
  feedback: {}
"#;
        assert!(serde_yaml::from_str::<ServiceConfig>(yaml).is_err());
    }
}
