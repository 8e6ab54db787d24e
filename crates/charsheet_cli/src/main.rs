use std::path::PathBuf;
use std::process;

use charsheet_core::config::StoreConfig;
use charsheet_core::core_api::{CoreError, Edit, FileStorage, Store};
use charsheet_core::{Armor, StatKind};
use charsheet_render::{
    FieldSelection, render_field_pairs, render_json_full, render_json_selected, render_sheet,
};
use clap::Parser;
use serde_json::Value as JsonValue;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Storage file holding the character slot.
    #[arg(long, value_name = "PATH")]
    store: Option<PathBuf>,
    #[arg(long)]
    level: bool,
    #[arg(long)]
    stats: bool,
    #[arg(long)]
    bleeding: bool,
    #[arg(long)]
    armor: bool,
    #[arg(long)]
    health: bool,
    #[arg(long)]
    items: bool,
    #[arg(long)]
    notes: bool,
    #[arg(long)]
    attack: bool,
    #[arg(long)]
    parry: bool,
    #[arg(long)]
    defense: bool,
    #[arg(long = "damage-bonuses")]
    damage_bonuses: bool,
    #[arg(long)]
    json: bool,
    /// Replace the character with a fresh default sheet before other edits.
    #[arg(long)]
    reset: bool,
    #[arg(long = "set-level", allow_hyphen_values = true)]
    set_level: Option<i32>,
    #[arg(long = "set-speed", allow_hyphen_values = true)]
    set_speed: Option<i32>,
    #[arg(long = "set-strength", allow_hyphen_values = true)]
    set_strength: Option<i32>,
    #[arg(long = "set-dexterity", allow_hyphen_values = true)]
    set_dexterity: Option<i32>,
    #[arg(long = "set-willpower", allow_hyphen_values = true)]
    set_willpower: Option<i32>,
    #[arg(long = "set-perception", allow_hyphen_values = true)]
    set_perception: Option<i32>,
    #[arg(long = "set-health", allow_hyphen_values = true)]
    set_health: Option<i32>,
    #[arg(long = "set-max-health", allow_hyphen_values = true)]
    set_max_health: Option<i32>,
    #[arg(long = "set-bleeding", value_name = "true|false")]
    set_bleeding: Option<bool>,
    #[arg(
        long = "set-armor",
        value_name = "unarmored|light|medium|heavy",
        value_parser = parse_armor
    )]
    set_armor: Option<Armor>,
    #[arg(long = "set-item", value_name = "INDEX=TEXT", value_parser = parse_item_edit)]
    set_item: Vec<(usize, String)>,
    #[arg(long = "add-item", value_name = "TEXT", allow_hyphen_values = true)]
    add_item: Vec<String>,
    #[arg(long = "remove-item", value_name = "INDEX")]
    remove_item: Option<usize>,
    #[arg(long = "set-notes", value_name = "TEXT", allow_hyphen_values = true)]
    set_notes: Option<String>,
}

impl Cli {
    fn field_selection(&self) -> FieldSelection {
        FieldSelection {
            level: self.level,
            stats: self.stats,
            bleeding: self.bleeding,
            armor: self.armor,
            health: self.health,
            items: self.items,
            notes: self.notes,
            attack: self.attack,
            parry: self.parry,
            defense: self.defense,
            damage_bonuses: self.damage_bonuses,
        }
    }

    /// Requested edits in the order they are applied, each with a label for
    /// error reporting.
    fn edits(&self) -> Vec<(&'static str, Edit)> {
        let mut out = Vec::new();

        if let Some(level) = self.set_level {
            out.push(("level", Edit::Level(level)));
        }
        let stat_edits = [
            (StatKind::Speed, self.set_speed),
            (StatKind::Strength, self.set_strength),
            (StatKind::Dexterity, self.set_dexterity),
            (StatKind::Willpower, self.set_willpower),
            (StatKind::Perception, self.set_perception),
        ];
        for (kind, value) in stat_edits {
            if let Some(v) = value {
                out.push(("stat", Edit::Stat(kind, v)));
            }
        }
        if let Some(health) = self.set_health {
            out.push(("health", Edit::Health(health)));
        }
        if let Some(max_health) = self.set_max_health {
            out.push(("max health", Edit::MaxHealth(max_health)));
        }
        if let Some(bleeding) = self.set_bleeding {
            out.push(("bleeding", Edit::Bleeding(bleeding)));
        }
        if let Some(armor) = self.set_armor {
            out.push(("armor", Edit::Armor(armor)));
        }
        for (index, value) in &self.set_item {
            out.push((
                "item",
                Edit::Item {
                    index: *index,
                    value: value.clone(),
                },
            ));
        }
        for item in &self.add_item {
            out.push(("item", Edit::AddItem(item.clone())));
        }
        if let Some(index) = self.remove_item {
            out.push(("item removal", Edit::RemoveItem(index)));
        }
        if let Some(notes) = &self.set_notes {
            out.push(("notes", Edit::Notes(notes.clone())));
        }

        out
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let fields = cli.field_selection();
    let edits = cli.edits();
    let has_edits = cli.reset || !edits.is_empty();

    let config = StoreConfig::resolve(cli.store.as_deref());
    tracing::debug!(path = %config.path.display(), "opening character store");
    let mut store = Store::open(FileStorage::new(&config.path));

    if cli.reset {
        store.reset().unwrap_or_else(|e| fail("reset", &e));
    }
    for (label, edit) in edits {
        store.apply(edit).unwrap_or_else(|e| fail(label, &e));
    }

    let record = store.get();

    if cli.json {
        let json = if fields.is_any_selected() {
            render_json_selected(record, &fields)
        } else {
            render_json_full(record)
        };
        print_json(&json);
        return;
    }

    if fields.is_any_selected() {
        for (key, value) in render_field_pairs(record, &fields) {
            println!("{key}={value}");
        }
        return;
    }

    if has_edits {
        println!("Saved character to {}", config.path.display());
        return;
    }

    print!("{}", render_sheet(record));
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(label: &str, error: &CoreError) -> ! {
    eprintln!("Error applying {label} edit: {error}");
    process::exit(1);
}

fn print_json(json: &JsonValue) {
    let rendered = serde_json::to_string_pretty(json).unwrap_or_else(|e| {
        eprintln!("Error rendering JSON output: {e}");
        process::exit(1);
    });
    println!("{rendered}");
}

fn parse_armor(value: &str) -> Result<Armor, String> {
    value.parse()
}

fn parse_item_edit(value: &str) -> Result<(usize, String), String> {
    let (index, text) = value
        .split_once('=')
        .ok_or_else(|| format!("invalid item edit '{value}', expected INDEX=TEXT"))?;
    let index = index
        .trim()
        .parse::<usize>()
        .map_err(|_| format!("invalid item index '{index}', expected a non-negative integer"))?;
    Ok((index, text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_edit_splits_on_first_equals() {
        assert_eq!(
            parse_item_edit("2=Potion=healing"),
            Ok((2, "Potion=healing".to_string()))
        );
        assert_eq!(parse_item_edit("0="), Ok((0, String::new())));
        assert!(parse_item_edit("Potion").is_err());
        assert!(parse_item_edit("-1=Potion").is_err());
    }

    #[test]
    fn edits_follow_fixed_order() {
        let cli = Cli::parse_from([
            "charsheet",
            "--set-notes",
            "n",
            "--set-armor",
            "light",
            "--set-strength",
            "-2",
            "--set-level",
            "4",
            "--remove-item",
            "0",
            "--add-item",
            "Sword",
        ]);
        let labels: Vec<&str> = cli.edits().iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            vec!["level", "stat", "armor", "item", "item removal", "notes"]
        );
        assert_eq!(cli.edits()[1].1, Edit::Stat(StatKind::Strength, -2));
    }
}
