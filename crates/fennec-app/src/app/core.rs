//! FennecApp struct definition and constructor.

use std::sync::Arc;
use std::time::Duration;

use winit::window::Window;

use fennec_config::{FennecConfig, PrefStore};
use fennec_webview::webview::SurfaceEventQueue;
use fennec_webview::{BrowserShell, QueueTransport, WebViewSurface};

/// How often queued surface events and outbound messages are pumped.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);

pub(super) type Shell = BrowserShell<WebViewSurface, QueueTransport, Box<dyn PrefStore>>;

/// Top-level application state.
pub struct FennecApp {
    pub(super) config: FennecConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,

    // Browser core
    pub(super) shell: Shell,
    pub(super) outbound: QueueTransport,
    pub(super) surface_events: SurfaceEventQueue,
}

impl FennecApp {
    pub fn new(config: FennecConfig, prefs: Box<dyn PrefStore>, remote: Option<String>) -> Self {
        let outbound = QueueTransport::new();
        let mut shell = BrowserShell::from_config(outbound.clone(), prefs, &config);

        // No surface yet, so this only queues; attach replays it.
        if let Some(uri) = remote {
            let outcome = shell.open_external(&uri);
            tracing::info!(uri = %uri, ?outcome, "remote open requested");
        }

        Self {
            config,
            window: None,
            shell,
            outbound,
            surface_events: SurfaceEventQueue::new(),
        }
    }
}
