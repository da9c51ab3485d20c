//! Outbound message protocol (shell -> native host).
//!
//! Every message is wrapped in an envelope naming the sender namespace:
//!
//! ```json
//! { "gecko": { "type": "onLocationChange", "windowID": 0, "uri": "https://example.com/" } }
//! ```
//!
//! The host parses by key, so field order is not part of the contract but
//! field names and presence are.

use serde::{Deserialize, Serialize};

/// Whether a load transition is starting or stopping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadPhase {
    Start,
    Stop,
}

/// Which level a load transition applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateScope {
    Network,
    Document,
}

/// A single notification for the native host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OutboundMessage {
    #[serde(rename = "onStateChange")]
    StateChange {
        #[serde(rename = "windowID")]
        window_id: u32,
        state: LoadPhase,
        #[serde(rename = "stateIs")]
        state_is: StateScope,
    },
    #[serde(rename = "onLocationChange")]
    LocationChange {
        #[serde(rename = "windowID")]
        window_id: u32,
        uri: String,
    },
    #[serde(rename = "onProgressChange")]
    ProgressChange {
        #[serde(rename = "windowID")]
        window_id: u32,
        current: i64,
        total: i64,
    },
    #[serde(rename = "hideLoadingScreen")]
    HideLoadingScreen {
        #[serde(rename = "windowID")]
        window_id: u32,
    },
}

impl OutboundMessage {
    /// The wire `type` discriminator.
    pub fn kind(&self) -> &'static str {
        match self {
            OutboundMessage::StateChange { .. } => "onStateChange",
            OutboundMessage::LocationChange { .. } => "onLocationChange",
            OutboundMessage::ProgressChange { .. } => "onProgressChange",
            OutboundMessage::HideLoadingScreen { .. } => "hideLoadingScreen",
        }
    }

    pub fn window_id(&self) -> u32 {
        match self {
            OutboundMessage::StateChange { window_id, .. }
            | OutboundMessage::LocationChange { window_id, .. }
            | OutboundMessage::ProgressChange { window_id, .. }
            | OutboundMessage::HideLoadingScreen { window_id } => *window_id,
        }
    }

    /// Wrap in the `gecko` envelope.
    pub fn into_envelope(self) -> Envelope {
        Envelope { gecko: self }
    }
}

/// The namespaced wrapper every outbound message travels in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub gecko: OutboundMessage,
}

impl Envelope {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decode an envelope as the host would receive it.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

impl From<OutboundMessage> for Envelope {
    fn from(message: OutboundMessage) -> Self {
        message.into_envelope()
    }
}
