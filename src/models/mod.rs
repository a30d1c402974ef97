//! Core data models for the salary input service.
//!
//! This module contains the domain models used by the validation engine and
//! the HTTP layer.

mod age_group;
mod income;
mod month;
mod record;
mod validation_result;

pub use age_group::AgeGroup;
pub use income::{Amount, IncomeBreakdown, IncomeField};
pub use month::{MONTHS, month_from_name, month_from_number};
pub use record::InputRecord;
pub use validation_result::{
    DerivedFields, IncomeAggregates, SalaryInput, ValidatedRecord, ValidationError,
    ValidationResult,
};
