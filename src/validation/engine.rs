//! The validation engine.
//!
//! [`ValidationEngine`] runs the month, year, age and income checks against a
//! record. Checks never short-circuit: every failure is collected so callers
//! can fix all of them in one round trip. Only a fully valid record gets its
//! derived fields computed.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::models::{
    DerivedFields, InputRecord, SalaryInput, ValidatedRecord, ValidationError, ValidationResult,
};

use super::{check_age, check_income_fields, check_month, check_year, compute_income_aggregates};

/// Switches for the optional derived fields.
///
/// The checks always run. These flags only control what is added to a valid
/// record's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    /// Add `age_group` to valid records.
    pub compute_age_group: bool,
    /// Add the income totals to valid records.
    pub compute_income_aggregates: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            compute_age_group: true,
            compute_income_aggregates: true,
        }
    }
}

/// Validates input records and derives income figures.
///
/// The engine holds no per-request state and can be shared freely between
/// threads.
///
/// # Example
///
/// ```
/// use salary_input::models::InputRecord;
/// use salary_input::validation::{EngineOptions, ValidationEngine};
/// use serde_json::json;
///
/// let engine = ValidationEngine::new(EngineOptions::default());
/// let record = InputRecord::from_value(json!({
///     "month": "April",
///     "year": 2025,
///     "age": 30,
///     "basic_salary": 50000,
///     "bonus": 10000
/// }))
/// .unwrap();
///
/// let result = engine.validate(&record);
/// assert!(result.is_valid());
///
/// let data = result.validated().unwrap().data();
/// assert_eq!(data["month"], json!(4));
/// assert_eq!(data["total_income"], json!(60000));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationEngine {
    options: EngineOptions,
}

impl ValidationEngine {
    /// Creates an engine with the given options.
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    /// Returns the engine's options.
    pub fn options(&self) -> EngineOptions {
        self.options
    }

    /// Validates a record.
    ///
    /// The record is not modified. A valid result holds a copy of it.
    pub fn validate(&self, record: &InputRecord) -> ValidationResult {
        debug!(fields = record.fields().len(), "Starting validation");
        let mut errors = Vec::new();

        let month = collect(&mut errors, check_month(record));
        let year = collect(&mut errors, check_year(record));
        let age = collect(&mut errors, check_age(record));
        let income = match check_income_fields(record) {
            Ok(income) => Some(income),
            Err(income_errors) => {
                errors.extend(income_errors);
                None
            }
        };

        // A missing value always comes with at least one error.
        let (Some(month), Some(year), Some(age), Some(income)) = (month, year, age, income) else {
            warn!(
                error_count = errors.len(),
                errors = ?errors,
                "Validation failed"
            );
            return ValidationResult::Invalid(errors);
        };

        let derived = DerivedFields {
            month_number: month.number_from_month(),
            age_group: self.options.compute_age_group.then_some(age.age_group),
            income: self
                .options
                .compute_income_aggregates
                .then(|| compute_income_aggregates(&income)),
        };

        info!(
            month = derived.month_number,
            year,
            age = age.age,
            income_fields = income.present().count(),
            "Validation successful"
        );

        let input = SalaryInput {
            month,
            year,
            age: age.age,
            income,
        };

        ValidationResult::Valid(ValidatedRecord::new(record.clone(), input, derived))
    }
}

/// Validates a record with the default options.
///
/// # Example
///
/// ```
/// use salary_input::models::InputRecord;
/// use salary_input::validation::validate;
/// use serde_json::json;
///
/// let record = InputRecord::from_value(json!({"month": "Aprril"})).unwrap();
/// let result = validate(&record);
/// assert!(!result.is_valid());
/// assert_eq!(result.errors().len(), 3);
/// ```
pub fn validate(record: &InputRecord) -> ValidationResult {
    ValidationEngine::default().validate(record)
}

fn collect<T>(errors: &mut Vec<ValidationError>, result: Result<T, ValidationError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            errors.push(error);
            None
        }
    }
}
