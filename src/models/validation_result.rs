//! Validation result models.
//!
//! This module contains the [`ValidationResult`] returned by the engine and
//! the structures describing a record that passed every check: the typed
//! [`SalaryInput`], the [`DerivedFields`] computed from it, and the
//! [`ValidatedRecord`] tying both back to the caller's original fields.

use chrono::Month;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;

use super::{AgeGroup, Amount, IncomeBreakdown, IncomeField, InputRecord};

/// A single failed check.
///
/// The `Display` output is the message sent to callers and must not change.
///
/// # Example
///
/// ```
/// use salary_input::models::{IncomeField, ValidationError};
///
/// let error = ValidationError::InvalidIncome { field: IncomeField::Bonus };
/// assert_eq!(error.to_string(), "bonus must be a positive number if provided.");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `month` is missing or not a recognised month name.
    #[error("Month must be a valid month name (e.g., 'January').")]
    InvalidMonth,

    /// `year` is missing, not an integer, or out of range.
    #[error("Year must be an integer between 1900 and 2100.")]
    InvalidYear,

    /// `age` is missing, not an integer, or out of range.
    #[error("Age must be an integer between 0 and 120.")]
    InvalidAge,

    /// An income field is present but not a non-negative number.
    #[error("{field} must be a positive number if provided.")]
    InvalidIncome {
        /// The offending field.
        field: IncomeField,
    },
}

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Typed view of a record that passed every check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryInput {
    /// The month the income relates to.
    pub month: Month,
    /// The calendar year.
    pub year: i32,
    /// The employee's age in years.
    pub age: u8,
    /// The income fields that were supplied.
    pub income: IncomeBreakdown,
}

/// Income totals derived from the supplied income fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IncomeAggregates {
    /// Sum of every present income field.
    pub total_income: Amount,
    /// Sum of every present income field except commission.
    pub total_income_excluding_commission: Amount,
    /// Recurring income multiplied by twelve.
    pub projected_annual_income: Amount,
    /// Annual projection plus the one-off bonus and leave pay.
    pub projected_annual_income_plus_bonus_leave: Amount,
}

impl IncomeAggregates {
    /// The aggregates as `(key, value)` pairs in output order.
    pub fn entries(&self) -> [(&'static str, Amount); 4] {
        [
            ("total_income", self.total_income),
            (
                "total_income_excluding_commission",
                self.total_income_excluding_commission,
            ),
            ("projected_annual_income", self.projected_annual_income),
            (
                "projected_annual_income_plus_bonus_leave",
                self.projected_annual_income_plus_bonus_leave,
            ),
        ]
    }
}

/// Values computed from a validated record.
///
/// `age_group` and `income` are `None` when the engine was configured not to
/// compute them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedFields {
    /// 1-based calendar index of the month.
    pub month_number: u32,
    /// The age band, if computed.
    pub age_group: Option<AgeGroup>,
    /// The income totals, if computed.
    pub income: Option<IncomeAggregates>,
}

/// A record that passed validation, with everything derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRecord {
    original: InputRecord,
    input: SalaryInput,
    derived: DerivedFields,
}

impl ValidatedRecord {
    /// Creates a validated record.
    pub fn new(original: InputRecord, input: SalaryInput, derived: DerivedFields) -> Self {
        Self {
            original,
            input,
            derived,
        }
    }

    /// The record as the caller submitted it.
    pub fn original(&self) -> &InputRecord {
        &self.original
    }

    /// The typed input.
    pub fn input(&self) -> &SalaryInput {
        &self.input
    }

    /// The derived fields.
    pub fn derived(&self) -> &DerivedFields {
        &self.derived
    }

    /// Builds the `data` object returned to callers.
    ///
    /// This is a fresh copy of the original fields with `month` replaced by
    /// its number and every derived field added.
    pub fn data(&self) -> Map<String, Value> {
        let mut data = self.original.fields().clone();
        data.insert("month".to_string(), Value::from(self.derived.month_number));

        if let Some(age_group) = self.derived.age_group {
            data.insert("age_group".to_string(), Value::from(age_group.label()));
        }

        if let Some(income) = &self.derived.income {
            for (key, amount) in income.entries() {
                data.insert(key.to_string(), amount.to_json());
            }
        }

        data
    }
}

/// Outcome of validating one record.
///
/// Serializes to `{"is_valid": true, "data": {...}}` or
/// `{"is_valid": false, "errors": [...]}`.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    /// Every check passed.
    Valid(ValidatedRecord),
    /// At least one check failed. The list is never empty.
    Invalid(Vec<ValidationError>),
}

impl ValidationResult {
    /// Returns true if every check passed.
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    /// The failed checks, empty for a valid result.
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            ValidationResult::Valid(_) => &[],
            ValidationResult::Invalid(errors) => errors,
        }
    }

    /// The error messages in check order.
    pub fn messages(&self) -> Vec<String> {
        self.errors().iter().map(ToString::to_string).collect()
    }

    /// The validated record, if every check passed.
    pub fn validated(&self) -> Option<&ValidatedRecord> {
        match self {
            ValidationResult::Valid(record) => Some(record),
            ValidationResult::Invalid(_) => None,
        }
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationResult", 2)?;
        match self {
            ValidationResult::Valid(record) => {
                state.serialize_field("is_valid", &true)?;
                state.serialize_field("data", &record.data())?;
            }
            ValidationResult::Invalid(errors) => {
                state.serialize_field("is_valid", &false)?;
                state.serialize_field("errors", errors)?;
            }
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_test_record(age_group: Option<AgeGroup>, with_income: bool) -> ValidatedRecord {
        let original = InputRecord::from_value(json!({
            "month": "April",
            "year": 2025,
            "age": 30,
            "basic_salary": 5000,
            "employee_ref": "emp_001"
        }))
        .unwrap();

        let income = IncomeBreakdown::new().with(IncomeField::BasicSalary, Amount::Integer(5000));
        let input = SalaryInput {
            month: Month::April,
            year: 2025,
            age: 30,
            income,
        };
        let aggregates = IncomeAggregates {
            total_income: Amount::Integer(5000),
            total_income_excluding_commission: Amount::Integer(5000),
            projected_annual_income: Amount::Integer(60000),
            projected_annual_income_plus_bonus_leave: Amount::Integer(60000),
        };
        let derived = DerivedFields {
            month_number: 4,
            age_group,
            income: with_income.then_some(aggregates),
        };

        ValidatedRecord::new(original, input, derived)
    }

    #[test]
    fn test_error_messages_match_wire_contract() {
        assert_eq!(
            ValidationError::InvalidMonth.to_string(),
            "Month must be a valid month name (e.g., 'January')."
        );
        assert_eq!(
            ValidationError::InvalidYear.to_string(),
            "Year must be an integer between 1900 and 2100."
        );
        assert_eq!(
            ValidationError::InvalidAge.to_string(),
            "Age must be an integer between 0 and 120."
        );
        assert_eq!(
            ValidationError::InvalidIncome {
                field: IncomeField::LeavePay
            }
            .to_string(),
            "leave_pay must be a positive number if provided."
        );
    }

    #[test]
    fn test_data_replaces_month_and_keeps_unknown_fields() {
        let record = create_test_record(Some(AgeGroup::Primary), true);
        let data = record.data();

        assert_eq!(data["month"], json!(4));
        assert_eq!(data["employee_ref"], json!("emp_001"));
        assert_eq!(data["age_group"], json!("Primary"));
        assert_eq!(data["total_income"], json!(5000));
        assert_eq!(data["projected_annual_income"], json!(60000));
    }

    #[test]
    fn test_data_does_not_touch_original() {
        let record = create_test_record(Some(AgeGroup::Primary), true);
        let _ = record.data();
        assert_eq!(record.original().get("month"), Some(&json!("April")));
        assert!(!record.original().contains("total_income"));
    }

    #[test]
    fn test_data_omits_fields_that_were_not_computed() {
        let record = create_test_record(None, false);
        let data = record.data();

        assert_eq!(data["month"], json!(4));
        assert!(!data.contains_key("age_group"));
        assert!(!data.contains_key("total_income"));
        assert!(!data.contains_key("projected_annual_income_plus_bonus_leave"));
    }

    #[test]
    fn test_valid_result_serialization() {
        let result = ValidationResult::Valid(create_test_record(Some(AgeGroup::Primary), true));
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["is_valid"], json!(true));
        assert_eq!(json["data"]["month"], json!(4));
        assert!(json.get("errors").is_none());
    }

    #[test]
    fn test_invalid_result_serialization() {
        let result = ValidationResult::Invalid(vec![
            ValidationError::InvalidMonth,
            ValidationError::InvalidIncome {
                field: IncomeField::Bonus,
            },
        ]);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(
            json,
            json!({
                "is_valid": false,
                "errors": [
                    "Month must be a valid month name (e.g., 'January').",
                    "bonus must be a positive number if provided."
                ]
            })
        );
    }

    #[test]
    fn test_result_accessors() {
        let valid = ValidationResult::Valid(create_test_record(None, true));
        assert!(valid.is_valid());
        assert!(valid.errors().is_empty());
        assert!(valid.validated().is_some());

        let invalid = ValidationResult::Invalid(vec![ValidationError::InvalidAge]);
        assert!(!invalid.is_valid());
        assert_eq!(
            invalid.messages(),
            vec!["Age must be an integer between 0 and 120."]
        );
        assert!(invalid.validated().is_none());
    }
}
