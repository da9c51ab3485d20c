//! File-backed preference store.
//!
//! Preferences are a flat TOML table of quoted keys, e.g.
//! `"browser.last.uri" = "https://example.com/"`. Every read goes to disk
//! so a value rewritten by another process is seen immediately, and every
//! write is atomic (write to `.tmp`, then rename).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use fennec_common::ConfigError;

use super::PrefStore;
use crate::toml_loader::default_prefs_path;

type PrefTable = BTreeMap<String, String>;

#[derive(Debug, Clone)]
pub struct TomlPrefs {
    path: PathBuf,
}

impl TomlPrefs {
    /// Use the preference file at `path`. The file need not exist yet.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Use the platform default location (`<data dir>/fennec/prefs.toml`).
    pub fn open_default() -> Result<Self, ConfigError> {
        Ok(Self::at_path(default_prefs_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> Result<Option<PrefTable>, ConfigError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(ConfigError::ParseError(format!(
                    "failed to read {}: {e}",
                    self.path.display()
                )))
            }
        };

        toml::from_str(&content)
            .map(Some)
            .map_err(|e| ConfigError::ParseError(format!("failed to parse prefs: {e}")))
    }

    fn write_table(&self, table: &PrefTable) -> Result<(), ConfigError> {
        let toml_str = toml::to_string(table)
            .map_err(|e| ConfigError::ParseError(format!("failed to serialize prefs: {e}")))?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::ParseError(format!(
                    "failed to create prefs directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let tmp_path = self.path.with_extension("toml.tmp");
        std::fs::write(&tmp_path, &toml_str).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to write prefs to {}: {e}",
                tmp_path.display()
            ))
        })?;

        if let Err(e) = std::fs::rename(&tmp_path, &self.path) {
            // Windows refuses to rename over an existing file in some setups.
            tracing::warn!("atomic rename failed ({e}), falling back to direct write");
            std::fs::write(&self.path, &toml_str).map_err(|e2| {
                ConfigError::ParseError(format!(
                    "failed to write prefs to {}: {e2}",
                    self.path.display()
                ))
            })?;
        }
        Ok(())
    }
}

impl PrefStore for TomlPrefs {
    fn get_string(&self, key: &str) -> Result<String, ConfigError> {
        self.read_table()?
            .and_then(|mut table| table.remove(key))
            .ok_or_else(|| ConfigError::MissingPref(key.to_string()))
    }

    fn set_string(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut table = match self.read_table() {
            Ok(table) => table.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "discarding unreadable prefs: {e}");
                PrefTable::new()
            }
        };
        table.insert(key.to_string(), value.to_string());
        self.write_table(&table)?;
        tracing::debug!(path = %self.path.display(), key, "pref saved");
        Ok(())
    }
}
