use crate::armor::Armor;
use crate::record::{CharacterRecord, StatKind};

use super::error::{CoreError, CoreErrorCode};
use super::storage::Storage;

/// Key of the slot holding the serialized record.
pub const STORE_KEY: &str = "store";

/// A single-field update to the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Level(i32),
    Stat(StatKind, i32),
    Bleeding(bool),
    Armor(Armor),
    Health(i32),
    MaxHealth(i32),
    /// Replace the whole item list.
    Items(Vec<String>),
    /// Replace the item at `index`, or append when `index` equals the length.
    Item { index: usize, value: String },
    AddItem(String),
    /// Keep every item whose index differs from the one given.
    RemoveItem(usize),
    Notes(String),
}

/// Owns the in-memory record and writes it through to storage on every change.
#[derive(Debug)]
pub struct Store<S> {
    storage: S,
    record: CharacterRecord,
}

impl<S: Storage> Store<S> {
    pub fn open(storage: S) -> Self {
        let record = load_record(&storage);
        Self { storage, record }
    }

    pub fn get(&self) -> &CharacterRecord {
        &self.record
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Re-reads the slot, falling back to defaults like [`Store::open`].
    pub fn load(&self) -> CharacterRecord {
        load_record(&self.storage)
    }

    /// Applies `edit` and persists the full record.
    ///
    /// When persisting fails the in-memory record keeps the edit and the
    /// storage error is returned for the caller to report.
    pub fn apply(&mut self, edit: Edit) -> Result<(), CoreError> {
        let record = &mut self.record;
        match edit {
            Edit::Level(level) => record.level = level,
            Edit::Stat(kind, value) => record.stats.set(kind, value),
            Edit::Bleeding(bleeding) => record.bleeding = bleeding,
            Edit::Armor(armor) => record.armor = armor,
            Edit::Health(health) => record.health = health,
            Edit::MaxHealth(max_health) => record.max_health = max_health,
            Edit::Items(items) => record.items = items,
            Edit::Item { index, value } => {
                let len = record.items.len();
                if index < len {
                    record.items[index] = value;
                } else if index == len {
                    record.items.push(value);
                } else {
                    return Err(CoreError::new(
                        CoreErrorCode::InvalidEdit,
                        format!("item index {index} out of range, list has {len} items"),
                    ));
                }
            }
            Edit::AddItem(value) => record.items.push(value),
            Edit::RemoveItem(target) => {
                record.items = std::mem::take(&mut record.items)
                    .into_iter()
                    .enumerate()
                    .filter(|&(index, _)| index != target)
                    .map(|(_, item)| item)
                    .collect();
            }
            Edit::Notes(notes) => record.notes = notes,
        }

        self.persist()
    }

    pub fn reset(&mut self) -> Result<(), CoreError> {
        self.record = CharacterRecord::default();
        self.persist()
    }

    pub fn adjust_level(&mut self, delta: i32) -> Result<(), CoreError> {
        self.apply(Edit::Level(self.record.level.saturating_add(delta)))
    }

    pub fn adjust_stat(&mut self, kind: StatKind, delta: i32) -> Result<(), CoreError> {
        let value = self.record.stats.get(kind).saturating_add(delta);
        self.apply(Edit::Stat(kind, value))
    }

    pub fn adjust_health(&mut self, delta: i32) -> Result<(), CoreError> {
        self.apply(Edit::Health(self.record.health.saturating_add(delta)))
    }

    pub fn add_item(&mut self, value: impl Into<String>) -> Result<(), CoreError> {
        self.apply(Edit::AddItem(value.into()))
    }

    fn persist(&mut self) -> Result<(), CoreError> {
        let raw = self.record.to_json().map_err(|e| {
            CoreError::new(
                CoreErrorCode::Storage,
                format!("failed to serialize record: {e}"),
            )
        })?;

        match self.storage.save(STORE_KEY, &raw) {
            Ok(()) => {
                tracing::debug!(bytes = raw.len(), "persisted character record");
                Ok(())
            }
            Err(e) => {
                tracing::error!("failed to persist character record: {e}");
                Err(e)
            }
        }
    }
}

/// Reads the record from `storage`, using the default record when the slot is
/// absent, unreadable, or does not match the record shape.
pub fn load_record<S: Storage + ?Sized>(storage: &S) -> CharacterRecord {
    let raw = match storage.load(STORE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!("no stored character record, starting from defaults");
            return CharacterRecord::default();
        }
        Err(e) => {
            tracing::warn!("could not read character record, using defaults: {e}");
            return CharacterRecord::default();
        }
    };

    match CharacterRecord::from_json(&raw) {
        Ok(record) => {
            tracing::debug!("loaded character record");
            record
        }
        Err(e) => {
            tracing::warn!("stored character record is malformed, using defaults: {e}");
            CharacterRecord::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_api::MemoryStorage;

    fn store() -> Store<MemoryStorage> {
        Store::open(MemoryStorage::new())
    }

    fn stored(store: &Store<MemoryStorage>) -> CharacterRecord {
        let raw = store.storage().get(STORE_KEY).expect("slot should be written");
        CharacterRecord::from_json(raw).expect("slot should decode")
    }

    #[test]
    fn open_without_slot_uses_defaults_and_writes_nothing() {
        let store = store();
        assert_eq!(store.get(), &CharacterRecord::default());
        assert_eq!(store.storage().get(STORE_KEY), None);
    }

    #[test]
    fn every_edit_writes_through() {
        let mut store = store();
        store.apply(Edit::Level(4)).expect("level");
        assert_eq!(stored(&store).level, 4);

        store.apply(Edit::Stat(StatKind::Dexterity, 11)).expect("stat");
        store.apply(Edit::Bleeding(true)).expect("bleeding");
        store.apply(Edit::Armor(Armor::Medium)).expect("armor");
        store.apply(Edit::Health(-7)).expect("health");
        store.apply(Edit::MaxHealth(60)).expect("max health");
        store.apply(Edit::Notes("owes the ferryman".into())).expect("notes");

        let saved = stored(&store);
        assert_eq!(&saved, store.get());
        assert_eq!(saved.stats.dexterity, 11);
        assert!(saved.bleeding);
        assert_eq!(saved.armor, Armor::Medium);
        assert_eq!(saved.health, -7);
        assert_eq!(saved.max_health, 60);
        assert_eq!(saved.notes, "owes the ferryman");
    }

    #[test]
    fn item_edits_replace_append_and_remove() {
        let mut store = store();
        store.add_item("Sword").expect("append");
        assert_eq!(store.get().items, vec!["Sword"]);

        store
            .apply(Edit::Item {
                index: 1,
                value: "Rope".into(),
            })
            .expect("append at len");
        store
            .apply(Edit::Item {
                index: 0,
                value: "Axe".into(),
            })
            .expect("replace");
        assert_eq!(store.get().items, vec!["Axe", "Rope"]);

        store.apply(Edit::RemoveItem(0)).expect("remove");
        assert_eq!(stored(&store).items, vec!["Rope"]);

        store
            .apply(Edit::Items(vec!["a".into(), "b".into()]))
            .expect("replace all");
        assert_eq!(store.get().items, vec!["a", "b"]);
    }

    #[test]
    fn item_index_past_end_is_rejected_without_persisting() {
        let mut store = store();
        let err = store
            .apply(Edit::Item {
                index: 2,
                value: "Lantern".into(),
            })
            .expect_err("gap should be rejected");
        assert_eq!(err.code, CoreErrorCode::InvalidEdit);
        assert!(store.get().items.is_empty());
        assert_eq!(store.storage().get(STORE_KEY), None);
    }

    #[test]
    fn edits_apply_in_sequence() {
        let mut store = store();
        for edit in [Edit::AddItem("Sword".into()), Edit::RemoveItem(0)] {
            store.apply(edit).expect("item edit");
        }
        assert!(store.get().items.is_empty());
        assert!(stored(&store).items.is_empty());
    }

    #[test]
    fn removing_missing_index_leaves_items() {
        let mut store = store();
        store.add_item("Torch").expect("append");
        store.apply(Edit::RemoveItem(5)).expect("remove");
        assert_eq!(store.get().items, vec!["Torch"]);
    }

    #[test]
    fn adjustments_saturate() {
        let mut store = store();
        store.apply(Edit::Level(i32::MAX)).expect("level");
        store.adjust_level(1).expect("adjust");
        assert_eq!(store.get().level, i32::MAX);

        store.adjust_health(-60).expect("adjust");
        assert_eq!(store.get().health, -10);

        store.adjust_stat(StatKind::Strength, 3).expect("adjust");
        assert_eq!(store.get().stats.strength, 8);
    }

    #[test]
    fn reset_restores_defaults_and_persists() {
        let mut store = store();
        store.add_item("Shield").expect("append");
        store.apply(Edit::Armor(Armor::Heavy)).expect("armor");
        store.reset().expect("reset");

        assert_eq!(store.get(), &CharacterRecord::default());
        assert_eq!(stored(&store), CharacterRecord::default());
    }

    #[test]
    fn malformed_slot_falls_back_to_defaults() {
        for raw in ["", "null", "{", "[]", r#"{"level":"three"}"#] {
            let store = Store::open(MemoryStorage::with_slot(STORE_KEY, raw));
            assert_eq!(store.get(), &CharacterRecord::default(), "slot {raw:?}");
        }
    }

    #[test]
    fn load_picks_up_external_clear() {
        let mut store = store();
        store.apply(Edit::Level(9)).expect("level");
        assert_eq!(store.load().level, 9);

        let mut storage = store.storage().clone();
        storage.clear(STORE_KEY);
        assert_eq!(load_record(&storage), CharacterRecord::default());
    }
}
