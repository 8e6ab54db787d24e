//! Runtime configuration for the terminal sheet.
use std::path::PathBuf;

use charsheet_core::config::{StoreConfig, read_env};

/// Environment variable overriding the log directory.
pub const LOG_DIR_ENV: &str = "CHARSHEET_LOG_DIR";

pub const LOG_FILE_NAME: &str = "charsheet-tui.log";

#[derive(Clone, Debug)]
pub struct TuiConfig {
    pub store: StoreConfig,
    pub log_dir: PathBuf,
}

impl TuiConfig {
    pub fn from_env() -> Self {
        Self {
            store: StoreConfig::resolve(None),
            log_dir: read_env::<PathBuf>(LOG_DIR_ENV).unwrap_or_else(default_log_dir),
        }
    }
}

/// Platform cache directory for log files.
///
/// - Linux: `~/.cache/charsheet/logs`
/// - macOS: `~/Library/Caches/charsheet/logs`
/// - Fallback: `<tmp>/charsheet/logs`
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "charsheet")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("charsheet").join("logs"))
}
