//! Year check.

use tracing::debug;

use super::strict_integer;
use crate::models::{InputRecord, ValidationError};

/// Earliest accepted year.
pub const MIN_YEAR: i32 = 1900;

/// Latest accepted year.
pub const MAX_YEAR: i32 = 2100;

/// Checks the `year` field: an integer in `MIN_YEAR..=MAX_YEAR`.
pub fn check_year(record: &InputRecord) -> Result<i32, ValidationError> {
    let year = record
        .get("year")
        .and_then(strict_integer)
        .and_then(|year| i32::try_from(year).ok())
        .filter(|year| (MIN_YEAR..=MAX_YEAR).contains(year));

    match year {
        Some(year) => Ok(year),
        None => {
            debug!(year = ?record.get("year"), "Invalid year");
            Err(ValidationError::InvalidYear)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn check(value: Value) -> Result<i32, ValidationError> {
        check_year(&InputRecord::from_value(json!({ "year": value })).unwrap())
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert_eq!(check(json!(1900)), Ok(1900));
        assert_eq!(check(json!(2100)), Ok(2100));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(check(json!(1899)), Err(ValidationError::InvalidYear));
        assert_eq!(check(json!(2101)), Err(ValidationError::InvalidYear));
        assert_eq!(check(json!(1800)), Err(ValidationError::InvalidYear));
        assert_eq!(check(json!(i64::MAX)), Err(ValidationError::InvalidYear));
    }

    #[test]
    fn test_non_integer_year() {
        assert_eq!(check(json!(2025.0)), Err(ValidationError::InvalidYear));
        assert_eq!(check(json!("2025")), Err(ValidationError::InvalidYear));
        assert_eq!(check(json!(null)), Err(ValidationError::InvalidYear));
    }

    #[test]
    fn test_missing_year() {
        let record = InputRecord::from_value(json!({})).unwrap();
        assert_eq!(check_year(&record), Err(ValidationError::InvalidYear));
    }
}
