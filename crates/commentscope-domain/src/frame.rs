//! Frame module - the framing label set

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Dominant frame identified in a comment
///
/// Three substantive labels plus an error sentinel:
/// - Morality: ethical/moral arguments
/// - Conflict: us-vs-them, political polarization
/// - Legality: legal rights, constitutional arguments
/// - Error: classification could not be obtained after retries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frame {
    /// Ethical/moral arguments
    Morality,

    /// Us-vs-them, political polarization
    Conflict,

    /// Legal rights, constitutional arguments
    Legality,

    /// Error sentinel - classification failed terminally
    Error,
}

impl Frame {
    /// The default label used when the model output omits or mangles the field
    pub const DEFAULT: Frame = Frame::Conflict;

    /// Get the frame name as its wire/CSV string
    pub fn as_str(&self) -> &'static str {
        match self {
            Frame::Morality => "MORALITY",
            Frame::Conflict => "CONFLICT",
            Frame::Legality => "LEGALITY",
            Frame::Error => "ERROR",
        }
    }

    /// Parse a frame from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "MORALITY" => Some(Frame::Morality),
            "CONFLICT" => Some(Frame::Conflict),
            "LEGALITY" => Some(Frame::Legality),
            "ERROR" => Some(Frame::Error),
            _ => None,
        }
    }

    /// Whether this is one of the three substantive labels (not the sentinel)
    pub fn is_substantive(&self) -> bool {
        !matches!(self, Frame::Error)
    }

    /// The three substantive labels, in display order
    pub fn substantive() -> [Frame; 3] {
        [Frame::Morality, Frame::Conflict, Frame::Legality]
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Frame {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid frame: {}", s))
    }
}

impl Serialize for Frame {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Frame {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid frame: {}", s)))
    }
}
