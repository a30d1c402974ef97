//! Age check and age group assignment.

use tracing::debug;

use super::strict_integer;
use crate::models::{AgeGroup, InputRecord, ValidationError};

/// Youngest accepted age.
pub const MIN_AGE: u8 = 0;

/// Oldest accepted age.
pub const MAX_AGE: u8 = 120;

/// The result of a successful age check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeCheck {
    /// The validated age.
    pub age: u8,
    /// The band the age falls into.
    pub age_group: AgeGroup,
}

/// Checks the `age` field: an integer in `MIN_AGE..=MAX_AGE`.
///
/// # Example
///
/// ```
/// use salary_input::models::{AgeGroup, InputRecord};
/// use salary_input::validation::check_age;
/// use serde_json::json;
///
/// let record = InputRecord::from_value(json!({"age": 70})).unwrap();
/// let check = check_age(&record).unwrap();
/// assert_eq!(check.age_group, AgeGroup::Secondary);
/// ```
pub fn check_age(record: &InputRecord) -> Result<AgeCheck, ValidationError> {
    let age = record
        .get("age")
        .and_then(strict_integer)
        .and_then(|age| u8::try_from(age).ok())
        .filter(|age| (MIN_AGE..=MAX_AGE).contains(age));

    let Some(age) = age else {
        debug!(age = ?record.get("age"), "Invalid age");
        return Err(ValidationError::InvalidAge);
    };

    let age_group = AgeGroup::from_age(age);
    debug!(age, age_group = age_group.label(), "Age group assigned");

    Ok(AgeCheck { age, age_group })
}
