//! Income field checks.

use tracing::debug;

use crate::models::{Amount, IncomeBreakdown, IncomeField, InputRecord, ValidationError};

/// Checks every income field present on the record.
///
/// Absent fields are fine. A present field must be a non-negative number;
/// each one that is not adds its own error, in declaration order.
///
/// # Example
///
/// ```
/// use salary_input::models::{Amount, IncomeField, InputRecord};
/// use salary_input::validation::check_income_fields;
/// use serde_json::json;
///
/// let record = InputRecord::from_value(json!({"bonus": 250})).unwrap();
/// let income = check_income_fields(&record).unwrap();
/// assert_eq!(income.get(IncomeField::Bonus), Some(Amount::Integer(250)));
/// assert_eq!(income.get(IncomeField::Commission), None);
/// ```
pub fn check_income_fields(record: &InputRecord) -> Result<IncomeBreakdown, Vec<ValidationError>> {
    let mut breakdown = IncomeBreakdown::new();
    let mut errors = Vec::new();

    for field in IncomeField::ALL {
        let Some(value) = record.get(field.key()) else {
            continue;
        };

        match Amount::from_json(value) {
            Some(amount) => breakdown.set(field, amount),
            None => {
                debug!(field = field.key(), value = %value, "Invalid income field");
                errors.push(ValidationError::InvalidIncome { field });
            }
        }
    }

    if errors.is_empty() {
        Ok(breakdown)
    } else {
        Err(errors)
    }
}
