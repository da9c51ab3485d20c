use std::collections::HashMap;

use fennec_common::ConfigError;

use super::PrefStore;

/// Process-local preference store. Nothing survives a restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryPrefs {
    values: HashMap<String, String>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `(key, value)` pairs.
    pub fn with_values<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl PrefStore for MemoryPrefs {
    fn get_string(&self, key: &str) -> Result<String, ConfigError> {
        self.values
            .get(key)
            .cloned()
            .ok_or_else(|| ConfigError::MissingPref(key.to_string()))
    }

    fn set_string(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
