use serde::{Deserialize, Serialize};

use crate::prefs::DEFAULT_START_URI;

/// What the content surface loads when there is no remembered URI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StartupConfig {
    pub default_uri: String,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            default_uri: DEFAULT_START_URI.to_string(),
        }
    }
}
