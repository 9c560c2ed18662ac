//! Application configuration constants.
//!
//! This module centralizes every tunable value: where the chapter data
//! lives, where the preference database lives, the server port, and the
//! constants that shape card display and input handling.

use serde::Deserialize;
use std::path::PathBuf;

// ==================== File Configuration ====================

/// Configuration file structure for config.toml
#[derive(Debug, Default, Deserialize)]
struct AppConfig {
    data: Option<DataConfig>,
    server: Option<ServerConfig>,
}

#[derive(Debug, Default, Deserialize)]
struct DataConfig {
    dir: Option<String>,
    prefs_db: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ServerConfig {
    port: Option<u16>,
}

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory holding `manifest.json` and the chapter datasets
    pub data_dir: PathBuf,
    /// SQLite file backing the preference store
    pub prefs_db: PathBuf,
    pub port: u16,
}

impl Settings {
    /// Load settings with priority: config.toml > .env / environment > default
    pub fn load() -> Self {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        let file = std::fs::read_to_string(CONFIG_FILE).ok();
        Self::resolve(file.as_deref(), |key| std::env::var(key).ok())
    }

    /// Resolve settings from optional config.toml contents and an env lookup.
    pub fn resolve(config_toml: Option<&str>, env: impl Fn(&str) -> Option<String>) -> Self {
        let config = match config_toml.map(toml::from_str::<AppConfig>) {
            Some(Ok(config)) => config,
            Some(Err(e)) => {
                tracing::warn!("Ignoring invalid {}: {}", CONFIG_FILE, e);
                AppConfig::default()
            }
            None => AppConfig::default(),
        };
        let data = config.data.unwrap_or_default();
        let server = config.server.unwrap_or_default();

        let data_dir = match data.dir {
            Some(dir) => {
                tracing::info!("Using data directory from {}: {}", CONFIG_FILE, dir);
                PathBuf::from(dir)
            }
            None => env("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
        };

        let prefs_db = data
            .prefs_db
            .or_else(|| env("PREFS_DB"))
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join(DEFAULT_PREFS_DB_FILE));

        let port = server
            .port
            .or_else(|| env("PORT").and_then(|p| p.parse().ok()))
            .unwrap_or(DEFAULT_SERVER_PORT);

        Self {
            data_dir,
            prefs_db,
            port,
        }
    }

    /// Get the full server bind address
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", SERVER_ADDR, self.port)
    }
}

/// Optional configuration file read from the working directory
pub const CONFIG_FILE: &str = "config.toml";

/// Default directory for the manifest and chapter datasets
pub const DEFAULT_DATA_DIR: &str = "data";

/// Preference database file name, placed inside the data directory by default
pub const DEFAULT_PREFS_DB_FILE: &str = "prefs.db";

// ==================== Server Configuration ====================

/// Server address to bind to
pub const SERVER_ADDR: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// ==================== Deck Configuration ====================

/// Preference key holding the last successfully loaded chapter file
pub const LAST_SELECTED_KEY: &str = "last-selected-chapter";

/// Horizontal drag distance (logical pixels) that turns a tap into a swipe.
/// A drag of exactly this distance still counts as a tap.
pub const SWIPE_THRESHOLD_PX: f64 = 40.0;

/// Language assumed for a front face without one
pub const FRONT_FALLBACK_LANGUAGE: &str = "ar";

/// Language assumed for a back face without one
pub const BACK_FALLBACK_LANGUAGE: &str = "en-US";

/// Language assumed for a hint without one
pub const HINT_FALLBACK_LANGUAGE: &str = "en-US";

/// Front text shown when the deck is empty
pub const EMPTY_DECK_PLACEHOLDER: &str = "No cards";
