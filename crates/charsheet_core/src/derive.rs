//! Secondary combat values computed from a [`CharacterRecord`].
//!
//! Every function here is pure; callers recompute on each read. Thresholds
//! are inclusive upper bounds and anything past the last one takes the final
//! bucket.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::armor::Armor;
use crate::record::CharacterRecord;

const ATTACK_DICE_THRESHOLDS: [i32; 7] = [4, 9, 16, 24, 33, 41, 49];
const PARRY_DICE_THRESHOLDS: [i32; 3] = [12, 24, 36];

// Indexed by `Armor::index`.
const SPEED_BONUS: [i32; 4] = [2, 0, -1, -3];
const DEFENSE_BONUS: [i32; 4] = [1, 0, 0, -1];
const DAMAGE_BONUS_TABLE: [DamageBonuses; 4] = [
    DamageBonuses::new(1.5, 1.5, 1.5, 1.5),
    DamageBonuses::new(1.5, 0.5, 1.0, 1.0),
    DamageBonuses::new(0.5, 1.5, 1.0, 1.0),
    DamageBonuses::new(0.5, 0.5, 0.5, 1.0),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiceSize {
    D6,
    D8,
    D10,
    D12,
}

impl DiceSize {
    pub fn faces(self) -> i32 {
        match self {
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::D6 => "d6",
            Self::D8 => "d8",
            Self::D10 => "d10",
            Self::D12 => "d12",
        }
    }
}

impl fmt::Display for DiceSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Damage multipliers applied to incoming hits by damage type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageBonuses {
    pub slashing: f64,
    pub piercing: f64,
    pub blunt: f64,
    pub bludgeoning: f64,
}

impl DamageBonuses {
    const fn new(slashing: f64, piercing: f64, blunt: f64, bludgeoning: f64) -> Self {
        Self {
            slashing,
            piercing,
            blunt,
            bludgeoning,
        }
    }

    /// Label/value pairs in display order.
    pub fn entries(&self) -> [(&'static str, f64); 4] {
        [
            ("Slashing", self.slashing),
            ("Piercing", self.piercing),
            ("Blunt", self.blunt),
            ("Bludgeoning", self.bludgeoning),
        ]
    }
}

pub fn dice_size(level: i32) -> DiceSize {
    if level <= 2 {
        DiceSize::D6
    } else if level <= 5 {
        DiceSize::D8
    } else if level <= 8 {
        DiceSize::D10
    } else {
        DiceSize::D12
    }
}

pub fn attack_dice(strength: i32) -> u8 {
    bucket(strength, &ATTACK_DICE_THRESHOLDS)
}

pub fn speed_bonus(armor: Armor) -> i32 {
    SPEED_BONUS[armor.index()]
}

pub fn total_speed(speed: i32, armor: Armor) -> i32 {
    speed.saturating_add(speed_bonus(armor))
}

pub fn parry_dice(total_speed: i32) -> u8 {
    bucket(total_speed, &PARRY_DICE_THRESHOLDS)
}

pub fn defense_base(dice: DiceSize) -> i32 {
    dice.faces() / 2
}

pub fn defense_bonus(armor: Armor) -> i32 {
    DEFENSE_BONUS[armor.index()]
}

pub fn defense_total(dice: DiceSize, armor: Armor) -> i32 {
    defense_base(dice) + defense_bonus(armor)
}

pub fn armor_damage_bonuses(armor: Armor) -> DamageBonuses {
    DAMAGE_BONUS_TABLE[armor.index()]
}

/// 1-based index of the first threshold `value` does not exceed.
fn bucket(value: i32, thresholds: &[i32]) -> u8 {
    let index = thresholds
        .iter()
        .position(|&limit| value <= limit)
        .unwrap_or(thresholds.len());
    (index + 1) as u8
}

/// Every derived value for one record, computed together for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Derived {
    pub dice_size: DiceSize,
    pub attack_dice: u8,
    pub speed_bonus: i32,
    pub total_speed: i32,
    pub parry_dice: u8,
    pub defense_base: i32,
    pub defense_bonus: i32,
    pub defense_total: i32,
    pub damage_bonuses: DamageBonuses,
}

impl Derived {
    pub fn from_record(record: &CharacterRecord) -> Self {
        let dice = dice_size(record.level);
        let total = total_speed(record.stats.speed, record.armor);
        Self {
            dice_size: dice,
            attack_dice: attack_dice(record.stats.strength),
            speed_bonus: speed_bonus(record.armor),
            total_speed: total,
            parry_dice: parry_dice(total),
            defense_base: defense_base(dice),
            defense_bonus: defense_bonus(record.armor),
            defense_total: defense_total(dice, record.armor),
            damage_bonuses: armor_damage_bonuses(record.armor),
        }
    }
}
