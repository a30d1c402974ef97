//! Income fields and the numeric amounts they carry.
//!
//! Income values arrive as JSON numbers that are either integers or floats.
//! [`Amount`] keeps that distinction so that sums of integers stay integers
//! and a single float turns the whole sum into a float.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// One of the optional income fields of an input record.
///
/// Variants are declared in the order the fields are checked and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeField {
    /// Regular salary for the month.
    BasicSalary,
    /// Sales commission.
    Commission,
    /// One-off bonus payment.
    Bonus,
    /// Overtime pay.
    Overtime,
    /// Leave paid out in the month.
    LeavePay,
}

impl IncomeField {
    /// All income fields in declaration order.
    pub const ALL: [IncomeField; 5] = [
        IncomeField::BasicSalary,
        IncomeField::Commission,
        IncomeField::Bonus,
        IncomeField::Overtime,
        IncomeField::LeavePay,
    ];

    /// The JSON key of this field.
    ///
    /// # Example
    ///
    /// ```
    /// use salary_input::models::IncomeField;
    ///
    /// assert_eq!(IncomeField::LeavePay.key(), "leave_pay");
    /// ```
    pub fn key(self) -> &'static str {
        match self {
            IncomeField::BasicSalary => "basic_salary",
            IncomeField::Commission => "commission",
            IncomeField::Bonus => "bonus",
            IncomeField::Overtime => "overtime",
            IncomeField::LeavePay => "leave_pay",
        }
    }

    /// Returns true if the field recurs monthly and is annualised.
    ///
    /// Bonus and leave pay are one-off amounts and are added to the annual
    /// projection once rather than multiplied.
    pub fn is_recurring(self) -> bool {
        !matches!(self, IncomeField::Bonus | IncomeField::LeavePay)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for IncomeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A non-negative monetary amount as supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Amount {
    /// A whole number.
    Integer(u64),
    /// A floating point number.
    Float(f64),
}

impl Amount {
    /// Integer zero, used for absent fields.
    pub const ZERO: Amount = Amount::Integer(0);

    /// Reads a non-negative number from a JSON value.
    ///
    /// Returns `None` for anything that is not a number, and for negative
    /// numbers.
    ///
    /// # Example
    ///
    /// ```
    /// use salary_input::models::Amount;
    /// use serde_json::json;
    ///
    /// assert_eq!(Amount::from_json(&json!(500)), Some(Amount::Integer(500)));
    /// assert_eq!(Amount::from_json(&json!(12.5)), Some(Amount::Float(12.5)));
    /// assert_eq!(Amount::from_json(&json!(-1)), None);
    /// assert_eq!(Amount::from_json(&json!("500")), None);
    /// ```
    pub fn from_json(value: &Value) -> Option<Amount> {
        let Value::Number(number) = value else {
            return None;
        };

        if let Some(integer) = number.as_u64() {
            return Some(Amount::Integer(integer));
        }
        if number.is_i64() {
            // negative integer
            return None;
        }
        number
            .as_f64()
            .filter(|float| *float >= 0.0)
            .map(Amount::Float)
    }

    /// Returns true if the amount is a float.
    pub fn is_float(self) -> bool {
        matches!(self, Amount::Float(_))
    }

    /// The amount as a float.
    pub fn as_f64(self) -> f64 {
        match self {
            Amount::Integer(integer) => integer as f64,
            Amount::Float(float) => float,
        }
    }

    /// Converts the amount into a JSON value.
    ///
    /// Non-finite floats become `null`, since JSON has no infinity. Only a
    /// float total beyond `f64::MAX` can reach this.
    pub fn to_json(self) -> Value {
        match self {
            Amount::Integer(integer) => Value::from(integer),
            Amount::Float(float) => Value::from(float),
        }
    }
}

impl Default for Amount {
    fn default() -> Self {
        Amount::ZERO
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        match (self, rhs) {
            (Amount::Integer(a), Amount::Integer(b)) => a
                .checked_add(b)
                .map(Amount::Integer)
                .unwrap_or(Amount::Float(a as f64 + b as f64)),
            (a, b) => Amount::Float(a.as_f64() + b.as_f64()),
        }
    }
}

impl Mul<u64> for Amount {
    type Output = Amount;

    fn mul(self, rhs: u64) -> Amount {
        match self {
            Amount::Integer(a) => a
                .checked_mul(rhs)
                .map(Amount::Integer)
                .unwrap_or(Amount::Float(a as f64 * rhs as f64)),
            Amount::Float(a) => Amount::Float(a * rhs as f64),
        }
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::ZERO, Add::add)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Amount::Integer(integer) => serializer.serialize_u64(integer),
            Amount::Float(float) => serializer.serialize_f64(float),
        }
    }
}

/// The income fields present on a record, by field.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IncomeBreakdown {
    amounts: [Option<Amount>; 5],
}

impl IncomeBreakdown {
    /// Creates a breakdown with no fields present.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the breakdown with `field` set to `amount`.
    pub fn with(mut self, field: IncomeField, amount: Amount) -> Self {
        self.set(field, amount);
        self
    }

    /// Sets `field` to `amount`.
    pub fn set(&mut self, field: IncomeField, amount: Amount) {
        self.amounts[field.index()] = Some(amount);
    }

    /// The amount supplied for `field`, if present.
    pub fn get(&self, field: IncomeField) -> Option<Amount> {
        self.amounts[field.index()]
    }

    /// The amount supplied for `field`, or zero when absent.
    pub fn amount_or_zero(&self, field: IncomeField) -> Amount {
        self.get(field).unwrap_or(Amount::ZERO)
    }

    /// Iterates the present fields in declaration order.
    pub fn present(&self) -> impl Iterator<Item = (IncomeField, Amount)> + '_ {
        IncomeField::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|amount| (field, amount)))
    }

    /// Returns true if no income field is present.
    pub fn is_empty(&self) -> bool {
        self.amounts.iter().all(Option::is_none)
    }
}
