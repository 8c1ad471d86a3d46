// Preferences for the app, read once at startup
use crate::model::MenuItem;
use crate::state::{AppConfig, AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Prefs {
    pub base_url: String,
    /// Menu keys in display order: `userPosts`, `userAlbums`, `allPosts`, `user`.
    pub menu: Vec<String>,
    pub transition_ticks: u64,
    pub notification_ms: u64,
    pub log_file: Option<PathBuf>,
}

impl Default for Prefs {
    fn default() -> Self {
        let config = AppConfig::default();
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            menu: ["userPosts", "userAlbums", "allPosts", "user"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            transition_ticks: config.transition_ticks,
            notification_ms: config.notification_ms,
            log_file: None,
        }
    }
}

impl Prefs {
    pub fn config_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".momentum_prefs.json")
    }

    /// Read `path`; a missing file means defaults.
    pub fn read(path: &Path) -> AppResult<Self> {
        match fs::read_to_string(path) {
            Ok(data) => serde_json::from_str(&data)
                .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Like [`Prefs::read`], but falls back to defaults on any error.
    pub fn load(path: &Path) -> Self {
        Self::read(path).unwrap_or_else(|e| {
            warn!(error = %e, "ignoring preferences file");
            Self::default()
        })
    }

    /// Menu entries; unknown keys are an error.
    pub fn menu_items(&self) -> AppResult<Vec<MenuItem>> {
        self.menu.iter().map(|key| key.parse()).collect()
    }

    pub fn app_config(&self) -> AppConfig {
        AppConfig {
            transition_ticks: self.transition_ticks,
            notification_ms: self.notification_ms,
            ..AppConfig::default()
        }
    }
}
