//! Validation and derivation logic for salary input records.
//!
//! Each check lives in its own module and reads one part of an
//! [`InputRecord`](crate::models::InputRecord): month, year, age and the
//! income fields. [`ValidationEngine`] runs all of them, collects every
//! failure, and derives the age group and income totals for records that
//! pass.

mod age;
mod aggregates;
mod engine;
mod income;
mod month;
mod year;

pub use age::{AgeCheck, MAX_AGE, MIN_AGE, check_age};
pub use aggregates::{ANNUALISATION_FACTOR, compute_income_aggregates};
pub use engine::{EngineOptions, ValidationEngine, validate};
pub use income::check_income_fields;
pub use month::check_month;
pub use year::{MAX_YEAR, MIN_YEAR, check_year};

use serde_json::Value;

/// Reads a JSON integer, rejecting floats even when they are whole.
fn strict_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64(),
        _ => None,
    }
}
