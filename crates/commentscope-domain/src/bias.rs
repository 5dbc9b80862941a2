//! Bias module - channel bias tags assigned at collection time

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Political-bias tag of the channel a comment was collected from
///
/// Assigned by the collector from a fixed channel lookup table and carried
/// through the pipeline unchanged. Unlike [`crate::Category`] and
/// [`crate::Frame`], unrecognized values fall back to `Unknown` rather than
/// failing, so hand-edited input files still load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bias {
    /// Local Minneapolis/Minnesota news channels
    Local,

    /// Mainstream national news channels
    Mainstream,

    /// Right-leaning channels
    Right,

    /// Left-leaning channels
    Left,

    /// Channel not present in the lookup table
    Unknown,
}

impl Bias {
    /// Get the bias name as its wire/CSV string
    pub fn as_str(&self) -> &'static str {
        match self {
            Bias::Local => "LOCAL",
            Bias::Mainstream => "MAINSTREAM",
            Bias::Right => "RIGHT",
            Bias::Left => "LEFT",
            Bias::Unknown => "UNKNOWN",
        }
    }

    /// Parse a bias tag, falling back to `Unknown` for unrecognized input
    pub fn parse(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "LOCAL" => Bias::Local,
            "MAINSTREAM" => Bias::Mainstream,
            "RIGHT" => Bias::Right,
            "LEFT" => Bias::Left,
            _ => Bias::Unknown,
        }
    }

    /// All tags, in display order
    pub fn all() -> [Bias; 5] {
        [
            Bias::Local,
            Bias::Mainstream,
            Bias::Right,
            Bias::Left,
            Bias::Unknown,
        ]
    }
}

impl std::fmt::Display for Bias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Bias {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Bias {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        for bias in Bias::all() {
            assert_eq!(Bias::parse(bias.as_str()), bias);
        }
    }

    #[test]
    fn test_unknown_fallback() {
        assert_eq!(Bias::parse("CENTRIST"), Bias::Unknown);
        assert_eq!(Bias::parse(""), Bias::Unknown);
    }

    #[test]
    fn test_serde_deserialize_is_total() {
        let parsed: Bias = serde_json::from_str("\"LEFT\"").unwrap();
        assert_eq!(parsed, Bias::Left);
        let parsed: Bias = serde_json::from_str("\"whatever\"").unwrap();
        assert_eq!(parsed, Bias::Unknown);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: parse always yields a tag; known tags round-trip and
        /// everything else collapses to Unknown
        #[test]
        fn test_parse_total(s in ".*") {
            let bias = Bias::parse(&s);
            prop_assert_eq!(Bias::parse(bias.as_str()), bias);
        }
    }
}
