use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::armor::Armor;

pub const DEFAULT_STAT_LEVEL: i32 = 5;
pub const DEFAULT_HEALTH: i32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    Speed,
    Strength,
    Dexterity,
    Willpower,
    Perception,
}

impl StatKind {
    pub const ALL: [StatKind; 5] = [
        StatKind::Speed,
        StatKind::Strength,
        StatKind::Dexterity,
        StatKind::Willpower,
        StatKind::Perception,
    ];

    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::Speed => "Speed",
            Self::Strength => "Strength",
            Self::Dexterity => "Dexterity",
            Self::Willpower => "Willpower",
            Self::Perception => "Perception",
        }
    }

    /// Field name inside the persisted `stats` object.
    pub fn key(&self) -> &'static str {
        match *self {
            Self::Speed => "speed",
            Self::Strength => "strength",
            Self::Dexterity => "dexterity",
            Self::Willpower => "willpower",
            Self::Perception => "perception",
        }
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let lowered = value.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.key() == lowered)
            .ok_or_else(|| {
                format!(
                    "invalid stat '{value}', expected one of: speed, strength, dexterity, willpower, perception"
                )
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Stats {
    pub speed: i32,
    pub strength: i32,
    pub dexterity: i32,
    pub willpower: i32,
    pub perception: i32,
}

impl Stats {
    pub fn get(&self, kind: StatKind) -> i32 {
        match kind {
            StatKind::Speed => self.speed,
            StatKind::Strength => self.strength,
            StatKind::Dexterity => self.dexterity,
            StatKind::Willpower => self.willpower,
            StatKind::Perception => self.perception,
        }
    }

    pub fn set(&mut self, kind: StatKind, value: i32) {
        let slot = match kind {
            StatKind::Speed => &mut self.speed,
            StatKind::Strength => &mut self.strength,
            StatKind::Dexterity => &mut self.dexterity,
            StatKind::Willpower => &mut self.willpower,
            StatKind::Perception => &mut self.perception,
        };
        *slot = value;
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            speed: DEFAULT_STAT_LEVEL,
            strength: DEFAULT_STAT_LEVEL,
            dexterity: DEFAULT_STAT_LEVEL,
            willpower: DEFAULT_STAT_LEVEL,
            perception: DEFAULT_STAT_LEVEL,
        }
    }
}

/// The single persisted character.
///
/// The serde shape is the stored wire format: a flat object with exactly
/// these fields, `maxHealth` in camelCase. Missing or extra fields fail to
/// decode so a damaged slot is replaced rather than half-read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct CharacterRecord {
    pub level: i32,
    pub stats: Stats,
    pub bleeding: bool,
    pub armor: Armor,
    pub health: i32,
    pub max_health: i32,
    pub items: Vec<String>,
    pub notes: String,
}

impl Default for CharacterRecord {
    fn default() -> Self {
        Self {
            level: 0,
            stats: Stats::default(),
            bleeding: false,
            armor: Armor::Unarmored,
            health: DEFAULT_HEALTH,
            max_health: DEFAULT_HEALTH,
            items: Vec::new(),
            notes: String::new(),
        }
    }
}

impl CharacterRecord {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}
