//! Engine lifecycle notifications for the content surface.

use crate::flags::StateFlags;

/// A progress-listener callback, captured so it can be queued and
/// dispatched on the shell's event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineNotification {
    /// A load transition started or stopped.
    StateChange { flags: StateFlags, status: u32 },
    /// The surface committed to a new location. `uri` is what the engine
    /// reported; the bridge reads the authoritative value from the surface.
    LocationChange { uri: String },
    /// Aggregate load progress. Either value may be `-1` (indeterminate).
    ProgressChange { current: i64, total: i64 },
    /// Human-readable status text changed.
    StatusChange { status: u32, message: String },
    /// Security state of the loaded document changed.
    SecurityChange { state: u32 },
}

impl EngineNotification {
    pub fn name(&self) -> &'static str {
        match self {
            EngineNotification::StateChange { .. } => "state_change",
            EngineNotification::LocationChange { .. } => "location_change",
            EngineNotification::ProgressChange { .. } => "progress_change",
            EngineNotification::StatusChange { .. } => "status_change",
            EngineNotification::SecurityChange { .. } => "security_change",
        }
    }
}
