//! Month check.

use chrono::Month;
use serde_json::Value;
use tracing::debug;

use crate::models::{InputRecord, ValidationError, month_from_name, month_from_number};

/// Checks the `month` field.
///
/// Accepts the exact English name of a month. A month already converted to
/// its number (1 to 12) by an earlier validation is accepted too, so that a
/// successful `data` output validates again unchanged.
///
/// Callers may therefore submit `"month": 4` directly and get the same result
/// as `"month": "April"`. Any other number, including `4.0`, is rejected.
///
/// # Example
///
/// ```
/// use chrono::Month;
/// use salary_input::models::InputRecord;
/// use salary_input::validation::check_month;
/// use serde_json::json;
///
/// let record = InputRecord::from_value(json!({"month": "April"})).unwrap();
/// assert_eq!(check_month(&record), Ok(Month::April));
/// ```
pub fn check_month(record: &InputRecord) -> Result<Month, ValidationError> {
    let month = match record.get("month") {
        Some(Value::String(name)) => month_from_name(name),
        Some(Value::Number(number)) => number.as_u64().and_then(month_from_number),
        _ => None,
    };

    match month {
        Some(month) => {
            debug!(month = month.name(), "Month validated");
            Ok(month)
        }
        None => {
            debug!(month = ?record.get("month"), "Invalid month");
            Err(ValidationError::InvalidMonth)
        }
    }
}
