use serde::{Deserialize, Serialize};

/// Drag/tap disambiguation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// A pointer that travels strictly further than this (on either axis)
    /// between down and up suppresses the following click.
    pub click_threshold: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            click_threshold: 10.0,
        }
    }
}
