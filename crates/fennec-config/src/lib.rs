//! Fennec shell configuration and persisted preferences.
//!
//! Two separate stores live here:
//! - `config.toml`: user-editable settings (startup page, gesture tuning,
//!   bridge options, logging). Every section uses serde defaults so
//!   partial files work.
//! - `prefs.toml`: machine-written session state, currently only the
//!   last visited URI (`browser.last.uri`).

pub mod prefs;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use prefs::{MemoryPrefs, PrefStore, TomlPrefs, DEFAULT_START_URI, LAST_URI_PREF};
pub use schema::{
    BridgeConfig, FennecConfig, GestureConfig, LogLevel, LoggingConfig, StartupConfig,
    CONFIG_SCHEMA_VERSION,
};

use fennec_common::ConfigError;

/// Load config from the platform default path, creating it if missing.
pub fn load_config() -> Result<FennecConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}
