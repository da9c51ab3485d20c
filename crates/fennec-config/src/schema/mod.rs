//! Configuration schema types for the Fennec shell.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod bridge;
mod gesture;
mod logging;
mod startup;

pub use bridge::*;
pub use gesture::*;
pub use logging::*;
pub use startup::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FennecConfig {
    pub startup: StartupConfig,
    pub gesture: GestureConfig,
    pub bridge: BridgeConfig,
    pub logging: LoggingConfig,
}
