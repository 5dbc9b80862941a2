//! Category module - the stance label set

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Stance category assigned to a comment
///
/// Three substantive labels plus an error sentinel:
/// - Justified: supports the agent's actions
/// - Excessive: criticizes the actions as excessive force
/// - Neutral: no clear stance
/// - Error: classification could not be obtained after retries
///
/// A category is always one of these values, never arbitrary text, even when
/// the upstream model returns something malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Supports the agent's actions
    Justified,

    /// Criticizes the actions as excessive force
    Excessive,

    /// No clear stance
    Neutral,

    /// Error sentinel - classification failed terminally
    Error,
}

impl Category {
    /// The default label used when the model output omits or mangles the field
    pub const DEFAULT: Category = Category::Neutral;

    /// Get the category name as its wire/CSV string
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Justified => "JUSTIFIED",
            Category::Excessive => "EXCESSIVE",
            Category::Neutral => "NEUTRAL",
            Category::Error => "ERROR",
        }
    }

    /// Parse a category from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "JUSTIFIED" => Some(Category::Justified),
            "EXCESSIVE" => Some(Category::Excessive),
            "NEUTRAL" => Some(Category::Neutral),
            "ERROR" => Some(Category::Error),
            _ => None,
        }
    }

    /// Whether this is one of the three substantive labels (not the sentinel)
    pub fn is_substantive(&self) -> bool {
        !matches!(self, Category::Error)
    }

    /// The three substantive labels, in display order
    pub fn substantive() -> [Category; 3] {
        [Category::Justified, Category::Excessive, Category::Neutral]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid category: {}", s))
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid category: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        for cat in [
            Category::Justified,
            Category::Excessive,
            Category::Neutral,
            Category::Error,
        ] {
            assert_eq!(Category::parse(cat.as_str()), Some(cat));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Category::parse("justified"), Some(Category::Justified));
        assert_eq!(Category::parse(" Neutral "), Some(Category::Neutral));
    }

    #[test]
    fn test_parse_rejects_arbitrary_text() {
        assert_eq!(Category::parse("SOMEWHAT_JUSTIFIED"), None);
        assert_eq!(Category::parse(""), None);
    }

    #[test]
    fn test_substantive_excludes_sentinel() {
        assert!(Category::Justified.is_substantive());
        assert!(!Category::Error.is_substantive());
        assert!(!Category::substantive().contains(&Category::Error));
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Category::Justified).unwrap();
        assert_eq!(json, "\"JUSTIFIED\"");
        let parsed: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Category::Justified);
    }

    #[test]
    fn test_serde_rejects_unknown_label() {
        let result: Result<Category, _> = serde_json::from_str("\"OUTRAGED\"");
        assert!(result.is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: parse is total and never yields a label outside the
        /// fixed set; every accepted input round-trips through as_str
        #[test]
        fn test_parse_never_escapes_label_set(s in ".*") {
            if let Some(category) = Category::parse(&s) {
                prop_assert_eq!(Category::parse(category.as_str()), Some(category));
            }
        }

        /// Property: case never changes the parse outcome
        #[test]
        fn test_parse_case_insensitive(s in "[a-zA-Z]{1,16}") {
            prop_assert_eq!(
                Category::parse(&s),
                Category::parse(&s.to_uppercase())
            );
        }
    }
}
