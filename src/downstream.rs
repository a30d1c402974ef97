//! Requests addressed to the services that consume validated records.
//!
//! A validated record is projected into one JSON body per downstream
//! service. The bodies are built from the record of the current request only;
//! this crate never sends them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::DownstreamConfig;
use crate::models::ValidatedRecord;

/// A service that consumes validated records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DownstreamService {
    /// Looks up the tax table for a year, month and age group.
    TaxTable,
    /// Runs the salary calculation.
    Calculation,
    /// Stores the submission for feedback.
    Feedback,
}

impl DownstreamService {
    /// Every downstream service, in the order requests are built.
    pub const ALL: [DownstreamService; 3] = [
        DownstreamService::TaxTable,
        DownstreamService::Calculation,
        DownstreamService::Feedback,
    ];

    /// The configuration key of this service.
    pub fn key(self) -> &'static str {
        match self {
            DownstreamService::TaxTable => "tax_table",
            DownstreamService::Calculation => "calculation",
            DownstreamService::Feedback => "feedback",
        }
    }
}

/// A JSON body addressed to a downstream service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DownstreamRequest {
    /// The receiving service.
    pub service: DownstreamService,
    /// The configured endpoint.
    pub url: String,
    /// The JSON body.
    pub body: Value,
}

/// Builds one request per configured downstream service.
///
/// Services without a configured target are skipped.
///
/// # Example
///
/// ```
/// use salary_input::config::{DownstreamConfig, DownstreamTarget};
/// use salary_input::downstream::{DownstreamService, build_downstream_requests};
/// use salary_input::models::InputRecord;
/// use salary_input::validation::validate;
/// use serde_json::json;
///
/// let record = InputRecord::from_value(json!({
///     "month": "April", "year": 2025, "age": 30, "basic_salary": 5000
/// }))
/// .unwrap();
/// let result = validate(&record);
///
/// let config = DownstreamConfig {
///     tax_table: Some(DownstreamTarget { url: "http://tax:5001/tax-table".to_string() }),
///     ..Default::default()
/// };
/// let requests = build_downstream_requests(&config, result.validated().unwrap());
///
/// assert_eq!(requests.len(), 1);
/// assert_eq!(requests[0].service, DownstreamService::TaxTable);
/// assert_eq!(requests[0].body, json!({"year": 2025, "month": 4, "age_group": "Primary"}));
/// ```
pub fn build_downstream_requests(
    config: &DownstreamConfig,
    record: &ValidatedRecord,
) -> Vec<DownstreamRequest> {
    DownstreamService::ALL
        .into_iter()
        .filter_map(|service| {
            config.target(service).map(|target| DownstreamRequest {
                service,
                url: target.url.clone(),
                body: request_body(service, record),
            })
        })
        .collect()
}

/// Builds the body a service receives for `record`.
pub fn request_body(service: DownstreamService, record: &ValidatedRecord) -> Value {
    match service {
        DownstreamService::TaxTable => tax_table_body(record),
        DownstreamService::Calculation => calculation_body(record),
        DownstreamService::Feedback => Value::Object(record.data()),
    }
}

fn period_fields(record: &ValidatedRecord) -> Map<String, Value> {
    let mut body = Map::new();
    body.insert("year".to_string(), Value::from(record.input().year));
    body.insert(
        "month".to_string(),
        Value::from(record.derived().month_number),
    );
    body
}

fn tax_table_body(record: &ValidatedRecord) -> Value {
    let mut body = period_fields(record);
    if let Some(age_group) = record.derived().age_group {
        body.insert("age_group".to_string(), Value::from(age_group.label()));
    }
    Value::Object(body)
}

fn calculation_body(record: &ValidatedRecord) -> Value {
    let mut body = period_fields(record);

    for (field, amount) in record.input().income.present() {
        body.insert(field.key().to_string(), amount.to_json());
    }

    if let Some(income) = &record.derived().income {
        for (key, amount) in income.entries() {
            body.insert(key.to_string(), amount.to_json());
        }
    }

    Value::Object(body)
}
