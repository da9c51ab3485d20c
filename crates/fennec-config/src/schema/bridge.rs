use serde::{Deserialize, Serialize};

/// Outbound message protocol settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BridgeConfig {
    /// Value reported as `windowID`. The host only ever sees one surface.
    pub window_id: u32,
    /// Report `stateIs: "document"` for document-level transitions instead
    /// of always reporting `"network"`.
    pub report_document_scope: bool,
}
