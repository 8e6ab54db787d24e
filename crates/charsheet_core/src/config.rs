//! Where the storage file lives.
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable overriding the storage file path.
pub const STORE_PATH_ENV: &str = "CHARSHEET_STORE";

const STORAGE_FILE_NAME: &str = "storage.json";
const FALLBACK_STORAGE_PATH: &str = "charsheet_storage.json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl StoreConfig {
    /// Resolves the storage path: an explicit path wins, then
    /// `CHARSHEET_STORE`, then the platform data directory.
    pub fn resolve(explicit: Option<&Path>) -> Self {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| read_env::<PathBuf>(STORE_PATH_ENV))
            .unwrap_or_else(default_store_path);
        Self { path }
    }
}

/// Platform data directory for the storage file.
///
/// - Linux: `~/.local/share/charsheet/storage.json`
/// - macOS: `~/Library/Application Support/charsheet/storage.json`
/// - Windows: `%APPDATA%\charsheet\data\storage.json`
/// - Fallback: `./charsheet_storage.json`
pub fn default_store_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "charsheet")
        .map(|dirs| dirs.data_dir().join(STORAGE_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_STORAGE_PATH))
}

pub fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let value = env::var(key).ok()?;
    if value.is_empty() {
        return None;
    }
    value.parse().ok()
}
