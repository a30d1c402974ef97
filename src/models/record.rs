//! The input record submitted by callers.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A caller-supplied record, kept as the raw JSON object.
///
/// The engine inspects field types itself so that a wrongly-typed field is
/// reported as a validation error instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputRecord(Map<String, Value>);

impl InputRecord {
    /// Wraps an existing JSON object.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Wraps a JSON value if it is an object.
    ///
    /// # Example
    ///
    /// ```
    /// use salary_input::models::InputRecord;
    /// use serde_json::json;
    ///
    /// assert!(InputRecord::from_value(json!({"month": "May"})).is_some());
    /// assert!(InputRecord::from_value(json!(["May"])).is_none());
    /// ```
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self(fields)),
            _ => None,
        }
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns true if `key` is present, whatever its value.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the underlying fields.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_from_object() {
        let record: InputRecord =
            serde_json::from_str(r#"{"month": "April", "year": 2025}"#).unwrap();
        assert_eq!(record.get("month"), Some(&json!("April")));
        assert!(record.contains("year"));
        assert!(!record.contains("age"));
    }

    #[test]
    fn test_deserialize_rejects_non_object() {
        assert!(serde_json::from_str::<InputRecord>("[1, 2, 3]").is_err());
        assert!(serde_json::from_str::<InputRecord>("\"April\"").is_err());
    }

    #[test]
    fn test_new_wraps_fields() {
        let mut fields = Map::new();
        fields.insert("age".to_string(), json!(30));
        let record = InputRecord::new(fields.clone());
        assert_eq!(record.fields(), &fields);
    }

    #[test]
    fn test_null_value_counts_as_present() {
        let record = InputRecord::from_value(json!({"bonus": null})).unwrap();
        assert!(record.contains("bonus"));
    }
}
