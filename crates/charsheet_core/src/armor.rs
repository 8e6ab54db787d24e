use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Armor {
    #[default]
    Unarmored,
    Light,
    Medium,
    Heavy,
}

impl Armor {
    pub const ALL: [Armor; 4] = [Armor::Unarmored, Armor::Light, Armor::Medium, Armor::Heavy];

    /// Position in [`Armor::ALL`], used to index the derivation tables.
    pub fn index(self) -> usize {
        match self {
            Self::Unarmored => 0,
            Self::Light => 1,
            Self::Medium => 2,
            Self::Heavy => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::Unarmored => "Unarmored",
            Self::Light => "Light",
            Self::Medium => "Medium",
            Self::Heavy => "Heavy",
        }
    }

    /// Name stored in the persisted record.
    pub fn wire_name(&self) -> &'static str {
        match *self {
            Self::Unarmored => "UNARMORED",
            Self::Light => "LIGHT",
            Self::Medium => "MEDIUM",
            Self::Heavy => "HEAVY",
        }
    }

    /// Next tier in selector order, wrapping from Heavy to Unarmored.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Armor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Armor {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "unarmored" => Ok(Self::Unarmored),
            "light" => Ok(Self::Light),
            "medium" => Ok(Self::Medium),
            "heavy" => Ok(Self::Heavy),
            _ => Err(format!(
                "invalid armor '{value}', expected one of: unarmored, light, medium, heavy"
            )),
        }
    }
}

impl Serialize for Armor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.wire_name())
    }
}

// An unrecognised tier name decodes as Unarmored; a non-string value is still
// a shape error and rejects the whole record.
impl<'de> Deserialize<'de> for Armor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().unwrap_or_else(|_| {
            tracing::warn!(armor = %raw, "unknown armor tier in stored record, using Unarmored");
            Self::Unarmored
        }))
    }
}
