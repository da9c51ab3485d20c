//! Persisted string preferences.
//!
//! The shell remembers exactly one value across restarts: the last URI
//! the content surface settled on. The store is a trait so the bridge can
//! run against an in-memory map in tests and a TOML file in the app.

mod file;
mod memory;

pub use file::TomlPrefs;
pub use memory::MemoryPrefs;

use fennec_common::ConfigError;

/// Preference key holding the last confirmed location of the content surface.
pub const LAST_URI_PREF: &str = "browser.last.uri";

/// Page loaded at startup when `LAST_URI_PREF` is absent or unreadable.
pub const DEFAULT_START_URI: &str = "about:support";

/// A string key/value preference store.
pub trait PrefStore {
    /// Read a preference. Fails with `ConfigError::MissingPref` when unset.
    fn get_string(&self, key: &str) -> Result<String, ConfigError>;

    /// Overwrite a preference.
    fn set_string(&mut self, key: &str, value: &str) -> Result<(), ConfigError>;
}

impl<P: PrefStore + ?Sized> PrefStore for Box<P> {
    fn get_string(&self, key: &str) -> Result<String, ConfigError> {
        (**self).get_string(key)
    }

    fn set_string(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        (**self).set_string(key, value)
    }
}
