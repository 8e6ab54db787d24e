use std::fmt::Write as _;

use charsheet_core::CharacterRecord;
use charsheet_core::StatKind;
use charsheet_core::derive::{DamageBonuses, Derived, DiceSize};
use serde_json::{Map as JsonMap, Value as JsonValue};

const SHEET_WIDTH: usize = 60;
const STAT_LABEL_WIDTH: usize = 14;
const TWO_COL_WIDTH_LEFT: usize = 26;
const TWO_COL_WIDTH_RIGHT: usize = 32;

/// Placeholder text for a freshly added item.
pub const NEW_ITEM_TEXT: &str = "My first item";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextRenderOptions {
    /// Show raw editable values (base speed) instead of armor-adjusted ones.
    pub editing: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FieldSelection {
    pub level: bool,
    pub stats: bool,
    pub bleeding: bool,
    pub armor: bool,
    pub health: bool,
    pub items: bool,
    pub notes: bool,
    pub attack: bool,
    pub parry: bool,
    pub defense: bool,
    pub damage_bonuses: bool,
}

impl FieldSelection {
    pub fn is_any_selected(&self) -> bool {
        self.level
            || self.stats
            || self.bleeding
            || self.armor
            || self.health
            || self.items
            || self.notes
            || self.attack
            || self.parry
            || self.defense
            || self.damage_bonuses
    }
}

pub fn render_json_full(record: &CharacterRecord) -> JsonValue {
    let derived = Derived::from_record(record);
    let mut out = record_json(record);
    out.insert("derived".to_string(), derived_json(&derived));
    JsonValue::Object(out)
}

pub fn render_json_selected(record: &CharacterRecord, fields: &FieldSelection) -> JsonValue {
    JsonValue::Object(selected_json(record, fields))
}

/// `key=value` lines for the selected fields, in canonical order.
///
/// Newlines inside items and notes are escaped as `\n`.
pub fn render_field_pairs(
    record: &CharacterRecord,
    fields: &FieldSelection,
) -> Vec<(&'static str, String)> {
    let derived = Derived::from_record(record);
    let mut out = Vec::new();

    if fields.level {
        out.push(("level", record.level.to_string()));
    }
    if fields.stats {
        for kind in StatKind::ALL {
            out.push(("stat", format!("{}={}", kind, record.stats.get(kind))));
        }
        out.push(("total_speed", derived.total_speed.to_string()));
    }
    if fields.bleeding {
        out.push(("bleeding", record.bleeding.to_string()));
    }
    if fields.armor {
        out.push(("armor", record.armor.to_string()));
    }
    if fields.health {
        out.push(("health", record.health.to_string()));
        out.push(("max_health", record.max_health.to_string()));
    }
    if fields.items {
        for item in &record.items {
            out.push(("item", item.replace('\n', "\\n")));
        }
    }
    if fields.notes {
        out.push(("notes", record.notes.replace('\n', "\\n")));
    }
    if fields.attack {
        out.push((
            "attack_dice",
            format_dice_pool(derived.attack_dice, derived.dice_size),
        ));
    }
    if fields.parry {
        out.push((
            "parry_dice",
            format_dice_pool(derived.parry_dice, derived.dice_size),
        ));
    }
    if fields.defense {
        out.push(("defense", format_defense(&derived)));
    }
    if fields.damage_bonuses {
        for (name, value) in derived.damage_bonuses.entries() {
            out.push(("damage_bonus", format!("{name}={}", format_multiplier(value))));
        }
    }

    out
}

pub fn render_sheet(record: &CharacterRecord) -> String {
    render_sheet_with_options(record, TextRenderOptions::default())
}

pub fn render_sheet_with_options(record: &CharacterRecord, options: TextRenderOptions) -> String {
    let derived = Derived::from_record(record);
    let mut out = String::new();

    writeln!(&mut out).expect("writing to String cannot fail");
    writeln!(&mut out).expect("writing to String cannot fail");
    writeln!(
        &mut out,
        "{}",
        centered_no_trailing("CHARACTER RECORD", SHEET_WIDTH)
    )
    .expect("writing to String cannot fail");
    writeln!(
        &mut out,
        "{}",
        centered_no_trailing(&format!("Level: {}", record.level), SHEET_WIDTH)
    )
    .expect("writing to String cannot fail");
    writeln!(&mut out).expect("writing to String cannot fail");

    writeln!(&mut out, " ::: Stats :::").expect("writing to String cannot fail");
    for kind in StatKind::ALL {
        let value = match kind {
            StatKind::Speed if !options.editing => format_speed(record, &derived),
            _ => record.stats.get(kind).to_string(),
        };
        writeln!(
            &mut out,
            "{:>w$}: {}",
            kind.as_str(),
            value,
            w = STAT_LABEL_WIDTH
        )
        .expect("writing to String cannot fail");
    }
    writeln!(&mut out).expect("writing to String cannot fail");

    let statuses = if record.bleeding { "Bleeding" } else { "none" };
    write_two_columns(
        &mut out,
        &[format!("Health: {}/{}", record.health, record.max_health)],
        &[format!("Statuses: {statuses}")],
    );
    writeln!(&mut out).expect("writing to String cannot fail");

    writeln!(&mut out, " ::: Combat :::").expect("writing to String cannot fail");
    writeln!(
        &mut out,
        "  Attack dice: {}",
        format_dice_pool(derived.attack_dice, derived.dice_size)
    )
    .expect("writing to String cannot fail");
    writeln!(
        &mut out,
        "  Parry pool: {}",
        format_dice_pool(derived.parry_dice, derived.dice_size)
    )
    .expect("writing to String cannot fail");
    writeln!(&mut out, "  Defense: {}", format_defense(&derived))
        .expect("writing to String cannot fail");
    writeln!(&mut out).expect("writing to String cannot fail");

    writeln!(&mut out, " ::: Armour :::            ::: Bonuses :::")
        .expect("writing to String cannot fail");
    write_two_columns(
        &mut out,
        &[record.armor.to_string()],
        &bonus_lines(&derived.damage_bonuses),
    );
    writeln!(&mut out).expect("writing to String cannot fail");

    writeln!(&mut out, " ::: Items :::").expect("writing to String cannot fail");
    if record.items.is_empty() {
        writeln!(&mut out, "  none").expect("writing to String cannot fail");
    }
    for item in &record.items {
        writeln!(&mut out, "  - {item}").expect("writing to String cannot fail");
    }
    writeln!(&mut out).expect("writing to String cannot fail");

    writeln!(&mut out, " ::: Notes :::").expect("writing to String cannot fail");
    if record.notes.trim().is_empty() {
        writeln!(&mut out, "  none").expect("writing to String cannot fail");
    } else {
        for line in record.notes.lines() {
            writeln!(&mut out, "  {}", line.trim_end()).expect("writing to String cannot fail");
        }
    }

    out
}

/// Signed number with an explicit `+` for zero and positives.
pub fn format_signed(value: i32) -> String {
    format!("{value:+}")
}

/// Damage multiplier without a trailing `.0`.
pub fn format_multiplier(value: f64) -> String {
    format!("{value}")
}

/// Dice pool such as `3 d10`.
pub fn format_dice_pool(count: u8, dice: DiceSize) -> String {
    format!("{count} {dice}")
}

/// Armor-adjusted speed with its breakdown, e.g. `16 (14+2)`.
pub fn format_speed(record: &CharacterRecord, derived: &Derived) -> String {
    format!(
        "{} ({}{})",
        derived.total_speed,
        record.stats.speed,
        format_signed(derived.speed_bonus)
    )
}

/// Defense total with its breakdown, e.g. `6 (5, +1 from armor)`.
pub fn format_defense(derived: &Derived) -> String {
    format!(
        "{} ({}, {} from armor)",
        derived.defense_total,
        derived.defense_base,
        format_signed(derived.defense_bonus)
    )
}

pub fn bonus_lines(bonuses: &DamageBonuses) -> Vec<String> {
    bonuses
        .entries()
        .iter()
        .map(|(name, value)| format!("{name}: {}", format_multiplier(*value)))
        .collect()
}

fn selected_json(record: &CharacterRecord, fields: &FieldSelection) -> JsonMap<String, JsonValue> {
    let derived = Derived::from_record(record);
    let mut out = JsonMap::new();

    if fields.level {
        out.insert("level".to_string(), JsonValue::from(record.level));
    }
    if fields.stats {
        out.insert("stats".to_string(), stats_json(record));
        out.insert(
            "total_speed".to_string(),
            JsonValue::from(derived.total_speed),
        );
    }
    if fields.bleeding {
        out.insert("bleeding".to_string(), JsonValue::Bool(record.bleeding));
    }
    if fields.armor {
        out.insert(
            "armor".to_string(),
            JsonValue::String(record.armor.wire_name().to_string()),
        );
    }
    if fields.health {
        out.insert("health".to_string(), JsonValue::from(record.health));
        out.insert("maxHealth".to_string(), JsonValue::from(record.max_health));
    }
    if fields.items {
        out.insert("items".to_string(), items_json(record));
    }
    if fields.notes {
        out.insert(
            "notes".to_string(),
            JsonValue::String(record.notes.clone()),
        );
    }
    if fields.attack {
        out.insert(
            "attack_dice".to_string(),
            dice_pool_json(derived.attack_dice, derived.dice_size),
        );
    }
    if fields.parry {
        out.insert(
            "parry_dice".to_string(),
            dice_pool_json(derived.parry_dice, derived.dice_size),
        );
    }
    if fields.defense {
        let mut m = JsonMap::new();
        m.insert("base".to_string(), JsonValue::from(derived.defense_base));
        m.insert("bonus".to_string(), JsonValue::from(derived.defense_bonus));
        m.insert("total".to_string(), JsonValue::from(derived.defense_total));
        out.insert("defense".to_string(), JsonValue::Object(m));
    }
    if fields.damage_bonuses {
        out.insert(
            "damage_bonuses".to_string(),
            damage_bonuses_json(&derived.damage_bonuses),
        );
    }

    out
}

fn record_json(record: &CharacterRecord) -> JsonMap<String, JsonValue> {
    let mut out = JsonMap::new();
    out.insert("level".to_string(), JsonValue::from(record.level));
    out.insert("stats".to_string(), stats_json(record));
    out.insert("bleeding".to_string(), JsonValue::Bool(record.bleeding));
    out.insert(
        "armor".to_string(),
        JsonValue::String(record.armor.wire_name().to_string()),
    );
    out.insert("health".to_string(), JsonValue::from(record.health));
    out.insert("maxHealth".to_string(), JsonValue::from(record.max_health));
    out.insert("items".to_string(), items_json(record));
    out.insert(
        "notes".to_string(),
        JsonValue::String(record.notes.clone()),
    );
    out
}

fn stats_json(record: &CharacterRecord) -> JsonValue {
    let mut m = JsonMap::new();
    for kind in StatKind::ALL {
        m.insert(
            kind.key().to_string(),
            JsonValue::from(record.stats.get(kind)),
        );
    }
    JsonValue::Object(m)
}

fn items_json(record: &CharacterRecord) -> JsonValue {
    JsonValue::Array(
        record
            .items
            .iter()
            .map(|item| JsonValue::String(item.clone()))
            .collect(),
    )
}

fn derived_json(derived: &Derived) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert(
        "dice_size".to_string(),
        JsonValue::String(derived.dice_size.to_string()),
    );
    m.insert(
        "attack_dice".to_string(),
        JsonValue::from(derived.attack_dice),
    );
    m.insert(
        "speed_bonus".to_string(),
        JsonValue::from(derived.speed_bonus),
    );
    m.insert(
        "total_speed".to_string(),
        JsonValue::from(derived.total_speed),
    );
    m.insert("parry_dice".to_string(), JsonValue::from(derived.parry_dice));
    m.insert(
        "defense_base".to_string(),
        JsonValue::from(derived.defense_base),
    );
    m.insert(
        "defense_bonus".to_string(),
        JsonValue::from(derived.defense_bonus),
    );
    m.insert(
        "defense_total".to_string(),
        JsonValue::from(derived.defense_total),
    );
    m.insert(
        "damage_bonuses".to_string(),
        damage_bonuses_json(&derived.damage_bonuses),
    );
    JsonValue::Object(m)
}

fn dice_pool_json(count: u8, dice: DiceSize) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("count".to_string(), JsonValue::from(count));
    m.insert("die".to_string(), JsonValue::String(dice.to_string()));
    JsonValue::Object(m)
}

fn damage_bonuses_json(bonuses: &DamageBonuses) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("slashing".to_string(), JsonValue::from(bonuses.slashing));
    m.insert("piercing".to_string(), JsonValue::from(bonuses.piercing));
    m.insert("blunt".to_string(), JsonValue::from(bonuses.blunt));
    m.insert(
        "bludgeoning".to_string(),
        JsonValue::from(bonuses.bludgeoning),
    );
    JsonValue::Object(m)
}

fn write_two_columns(out: &mut String, left: &[String], right: &[String]) {
    let row_count = left.len().max(right.len());
    for row in 0..row_count {
        let l = left.get(row).map(String::as_str).unwrap_or("");
        let r = right.get(row).map(String::as_str).unwrap_or("");
        let line = format!(
            "  {:<a$}{:<b$}",
            fit_column(l, TWO_COL_WIDTH_LEFT),
            fit_column(r, TWO_COL_WIDTH_RIGHT),
            a = TWO_COL_WIDTH_LEFT,
            b = TWO_COL_WIDTH_RIGHT
        );
        writeln!(out, "{}", line.trim_end()).expect("writing to String cannot fail");
    }
}

fn fit_column(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 3 {
        return value.chars().take(width).collect();
    }

    let mut out = String::with_capacity(width);
    for ch in value.chars().take(width - 3) {
        out.push(ch);
    }
    out.push_str("...");
    out
}

fn centered_no_trailing(value: &str, width: usize) -> String {
    let len = value.chars().count();
    if len >= width {
        return value.to_string();
    }

    let left_padding = (width - len) / 2;
    format!("{}{}", " ".repeat(left_padding), value)
}
