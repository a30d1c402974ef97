//! Age group classification used for tax-table lookups.

use serde::{Deserialize, Serialize};

/// Age band an employee falls into.
///
/// The bands are inclusive and cover every valid age.
///
/// # Example
///
/// ```
/// use salary_input::models::AgeGroup;
///
/// assert_eq!(AgeGroup::from_age(64), AgeGroup::Primary);
/// assert_eq!(AgeGroup::from_age(65).label(), "Secondary (65 and older)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    /// Ages up to and including 64.
    #[serde(rename = "Primary")]
    Primary,
    /// Ages 65 to 74.
    #[serde(rename = "Secondary (65 and older)")]
    Secondary,
    /// Ages 75 and above.
    #[serde(rename = "Tertiary (75 and older)")]
    Tertiary,
}

impl AgeGroup {
    /// First age of the secondary band.
    pub const SECONDARY_FROM: u8 = 65;
    /// First age of the tertiary band.
    pub const TERTIARY_FROM: u8 = 75;

    /// Classifies an age.
    pub fn from_age(age: u8) -> Self {
        if age < Self::SECONDARY_FROM {
            AgeGroup::Primary
        } else if age < Self::TERTIARY_FROM {
            AgeGroup::Secondary
        } else {
            AgeGroup::Tertiary
        }
    }

    /// The label sent to callers and downstream services.
    pub fn label(self) -> &'static str {
        match self {
            AgeGroup::Primary => "Primary",
            AgeGroup::Secondary => "Secondary (65 and older)",
            AgeGroup::Tertiary => "Tertiary (75 and older)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_edges() {
        assert_eq!(AgeGroup::from_age(0), AgeGroup::Primary);
        assert_eq!(AgeGroup::from_age(64), AgeGroup::Primary);
        assert_eq!(AgeGroup::from_age(65), AgeGroup::Secondary);
        assert_eq!(AgeGroup::from_age(74), AgeGroup::Secondary);
        assert_eq!(AgeGroup::from_age(75), AgeGroup::Tertiary);
        assert_eq!(AgeGroup::from_age(120), AgeGroup::Tertiary);
    }

    #[test]
    fn test_serialization_uses_labels() {
        for group in [AgeGroup::Primary, AgeGroup::Secondary, AgeGroup::Tertiary] {
            assert_eq!(
                serde_json::to_string(&group).unwrap(),
                format!("\"{}\"", group.label())
            );
        }
    }

    #[test]
    fn test_deserialize_from_label() {
        let group: AgeGroup = serde_json::from_str("\"Tertiary (75 and older)\"").unwrap();
        assert_eq!(group, AgeGroup::Tertiary);
    }
}
