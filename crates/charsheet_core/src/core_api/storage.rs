use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::error::{CoreError, CoreErrorCode};

/// A string key-value store holding named slots.
pub trait Storage {
    /// Returns `Ok(None)` when the key has never been written.
    fn load(&self, key: &str) -> Result<Option<String>, CoreError>;

    fn save(&mut self, key: &str, value: &str) -> Result<(), CoreError>;
}

/// Slots kept in a single JSON object file, one string value per key.
///
/// The file is re-read on every access so external edits (or deleting the
/// file) are picked up by the next load.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where an unreadable file is copied before `save` replaces it.
    pub fn backup_path(&self) -> PathBuf {
        self.path.with_extension("json.bak")
    }

    fn read_map(&self) -> Result<Option<BTreeMap<String, String>>, CoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(CoreError::new(
                    CoreErrorCode::Storage,
                    format!("failed to read {}: {e}", self.path.display()),
                ));
            }
        };

        serde_json::from_str(&raw).map(Some).map_err(|e| {
            CoreError::new(
                CoreErrorCode::Decode,
                format!("{} is not a key-value object: {e}", self.path.display()),
            )
        })
    }
}

impl Storage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self
            .read_map()?
            .and_then(|mut map| map.remove(key)))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        let mut map = match self.read_map() {
            Ok(map) => map.unwrap_or_default(),
            Err(e) if e.code == CoreErrorCode::Decode => {
                let backup = self.backup_path();
                fs::copy(&self.path, &backup).map_err(|copy_err| {
                    CoreError::new(
                        CoreErrorCode::Storage,
                        format!(
                            "refusing to replace unreadable {}: backup to {} failed: {copy_err}",
                            self.path.display(),
                            backup.display()
                        ),
                    )
                })?;
                tracing::warn!(
                    path = %self.path.display(),
                    backup = %backup.display(),
                    "replacing unreadable storage file: {e}"
                );
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        map.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| {
                CoreError::new(
                    CoreErrorCode::Storage,
                    format!("failed to create {}: {e}", parent.display()),
                )
            })?;
        }

        let data = serde_json::to_string_pretty(&map).map_err(|e| {
            CoreError::new(
                CoreErrorCode::Storage,
                format!("failed to serialize storage: {e}"),
            )
        })?;

        // Write beside the target, then rename over it.
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, data)
            .and_then(|()| fs::rename(&staging, &self.path))
            .map_err(|e| {
                CoreError::new(
                    CoreErrorCode::Storage,
                    format!("failed to write {}: {e}", self.path.display()),
                )
            })
    }
}

/// In-process slots, lost when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slot(key: &str, value: impl Into<String>) -> Self {
        let mut storage = Self::new();
        storage.slots.insert(key.to_string(), value.into());
        storage
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }

    /// Drops a slot, as if cleared from outside the application.
    pub fn clear(&mut self, key: &str) {
        self.slots.remove(key);
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self.slots.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
