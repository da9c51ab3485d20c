//! Engine lifecycle -> outbound message projection.
//!
//! `NavigationBridge` turns each progress-listener callback for the content
//! surface into at most two outbound messages and keeps the remembered
//! last URI up to date. It is the only writer of `browser.last.uri`; the
//! bridge owns the preference store so nothing else can write it.
//!
//! Callbacks never fail outward. Anything that goes wrong is logged and
//! the callback degrades to emitting nothing.

use fennec_config::{BridgeConfig, FennecConfig, PrefStore, DEFAULT_START_URI, LAST_URI_PREF};
use tracing::{debug, info, warn};

use crate::flags::StateFlags;
use crate::message::{LoadPhase, OutboundMessage, StateScope};
use crate::notification::EngineNotification;
use crate::surface::ContentSurface;
use crate::transport::Transport;

#[cfg(test)]
mod tests;

pub struct NavigationBridge<T, P> {
    transport: T,
    prefs: P,
    window_id: u32,
    report_document_scope: bool,
    default_uri: String,
}

impl<T: Transport, P: PrefStore> NavigationBridge<T, P> {
    pub fn new(transport: T, prefs: P) -> Self {
        Self {
            transport,
            prefs,
            window_id: 0,
            report_document_scope: false,
            default_uri: DEFAULT_START_URI.to_string(),
        }
    }

    pub fn from_config(transport: T, prefs: P, config: &FennecConfig) -> Self {
        Self::new(transport, prefs)
            .with_bridge_config(&config.bridge)
            .with_default_uri(config.startup.default_uri.clone())
    }

    pub fn with_bridge_config(mut self, config: &BridgeConfig) -> Self {
        self.window_id = config.window_id;
        self.report_document_scope = config.report_document_scope;
        self
    }

    pub fn with_default_uri(mut self, uri: impl Into<String>) -> Self {
        self.default_uri = uri.into();
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn prefs(&self) -> &P {
        &self.prefs
    }

    pub fn window_id(&self) -> u32 {
        self.window_id
    }

    /// Dispatch a queued engine notification.
    ///
    /// `surface` is `None` while the content surface is not attached yet;
    /// only location changes need it.
    pub fn handle<S: ContentSurface + ?Sized>(
        &mut self,
        notification: EngineNotification,
        surface: Option<&S>,
    ) {
        match notification {
            EngineNotification::StateChange { flags, status } => {
                self.on_state_change(flags, status)
            }
            EngineNotification::LocationChange { uri } => match surface {
                Some(surface) => self.on_location_change(surface, &uri),
                None => warn!(reported = %uri, "location change before surface is ready"),
            },
            EngineNotification::ProgressChange { current, total } => {
                self.on_progress_change(current, total)
            }
            EngineNotification::StatusChange { status, message } => {
                self.on_status_change(status, &message)
            }
            EngineNotification::SecurityChange { state } => self.on_security_change(state),
        }
    }

    /// Project a load start/stop into `onStateChange`.
    pub fn on_state_change(&self, flags: StateFlags, status: u32) {
        let state = if flags.contains(StateFlags::STOP) {
            LoadPhase::Stop
        } else {
            LoadPhase::Start
        };
        let state_is = if self.report_document_scope && flags.contains(StateFlags::IS_DOCUMENT) {
            StateScope::Document
        } else {
            StateScope::Network
        };

        debug!(flags = flags.bits(), status, ?state, ?state_is, "state change");
        self.emit(OutboundMessage::StateChange {
            window_id: self.window_id,
            state,
            state_is,
        });
    }

    /// Persist the surface's location and report it to the host.
    ///
    /// The surface is the authority on the current URI; `reported` is only
    /// logged. If the URI cannot be read or persisted nothing is sent. After
    /// `onLocationChange` the stored value is read back and
    /// `hideLoadingScreen` is sent only if it still matches what was just
    /// written, i.e. the write landed and nobody outside this process has
    /// rewritten the preference file since.
    pub fn on_location_change<S: ContentSurface + ?Sized>(&mut self, surface: &S, reported: &str) {
        let uri = match surface.current_uri() {
            Ok(uri) => uri,
            Err(e) => {
                warn!(reported = %reported, error = %e, "location change: cannot read surface uri");
                return;
            }
        };

        debug!(uri = %uri, "setting last uri");
        if let Err(e) = self.prefs.set_string(LAST_URI_PREF, &uri) {
            warn!(uri = %uri, error = %e, "failed to persist last uri, skipping location report");
            return;
        }

        self.emit(OutboundMessage::LocationChange {
            window_id: self.window_id,
            uri: uri.clone(),
        });

        match self.prefs.get_string(LAST_URI_PREF) {
            Ok(stored) if stored == uri => {
                self.emit(OutboundMessage::HideLoadingScreen {
                    window_id: self.window_id,
                });
            }
            Ok(stored) => {
                warn!(
                    expected = %uri,
                    stored = %stored,
                    "last uri changed by another writer, keeping loading screen"
                );
            }
            Err(e) => {
                warn!(error = %e, "last uri read-back failed, keeping loading screen");
            }
        }
    }

    /// Pass progress through verbatim, including indeterminate (`-1`) values.
    pub fn on_progress_change(&self, current: i64, total: i64) {
        debug!(current, total, "progress");
        self.emit(OutboundMessage::ProgressChange {
            window_id: self.window_id,
            current,
            total,
        });
    }

    pub fn on_status_change(&self, status: u32, message: &str) {
        debug!(status, text = %message, "status change");
    }

    pub fn on_security_change(&self, state: u32) {
        debug!(state, "security change");
    }

    /// The URI to open at startup: the remembered one, or the default.
    pub fn last_uri(&self) -> String {
        match self.prefs.get_string(LAST_URI_PREF) {
            Ok(uri) => uri,
            Err(e) => {
                debug!(error = %e, default = %self.default_uri, "no last uri");
                self.default_uri.clone()
            }
        }
    }

    /// Point the surface at the last remembered URI. Returns the URI used.
    pub fn restore_last_uri<S: ContentSurface + ?Sized>(&self, surface: &mut S) -> String {
        let uri = self.last_uri();
        info!(uri = %uri, "restoring last uri");
        if let Err(e) = surface.load_uri(&uri) {
            warn!(uri = %uri, error = %e, "failed to load last uri");
        }
        uri
    }

    fn emit(&self, message: OutboundMessage) {
        self.transport.send(&message.into_envelope());
    }
}
