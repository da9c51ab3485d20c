//! The browser shell: one content surface and everything wired to it.

use fennec_config::{FennecConfig, PrefStore};
use tracing::{debug, info, trace};

use crate::gesture::{Disposition, GestureInterpreter, PointerEvent};
use crate::navigation::NavigationBridge;
use crate::notification::EngineNotification;
use crate::router::{ExternalOpenRouter, OpenOutcome};
use crate::surface::ContentSurface;
use crate::transport::Transport;

/// Owns the single content surface together with the navigation bridge,
/// the gesture interpreter, and the external-open router.
///
/// All entry points are called from the one event loop that also drives
/// the engine, so nothing here is shared across threads.
pub struct BrowserShell<S, T, P> {
    surface: Option<S>,
    bridge: NavigationBridge<T, P>,
    gestures: GestureInterpreter,
    router: ExternalOpenRouter,
}

impl<S, T, P> BrowserShell<S, T, P>
where
    S: ContentSurface,
    T: Transport,
    P: PrefStore,
{
    pub fn new(bridge: NavigationBridge<T, P>, gestures: GestureInterpreter) -> Self {
        Self {
            surface: None,
            bridge,
            gestures,
            router: ExternalOpenRouter::new(),
        }
    }

    pub fn from_config(transport: T, prefs: P, config: &FennecConfig) -> Self {
        Self::new(
            NavigationBridge::from_config(transport, prefs, config),
            GestureInterpreter::with_threshold(config.gesture.click_threshold),
        )
    }

    /// Install the content surface and run the startup load.
    ///
    /// If an external open arrived before the surface existed, it wins over
    /// restoring the last URI. Returns the replaced surface, if any.
    pub fn attach_surface(&mut self, surface: S) -> Option<S> {
        let previous = self.surface.replace(surface);
        let Some(surface) = self.surface.as_mut() else {
            return previous;
        };

        if self.router.has_pending() {
            let opened = self.router.flush(surface);
            info!(opened, "surface attached, replayed external opens");
            if opened > 0 {
                return previous;
            }
        }

        self.bridge.restore_last_uri(surface);
        info!("surface attached");
        previous
    }

    pub fn detach_surface(&mut self) -> Option<S> {
        self.surface.take()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    pub fn bridge(&self) -> &NavigationBridge<T, P> {
        &self.bridge
    }

    pub fn gestures(&self) -> &GestureInterpreter {
        &self.gestures
    }

    pub fn router(&self) -> &ExternalOpenRouter {
        &self.router
    }

    /// Feed one engine lifecycle notification through the bridge.
    pub fn handle_notification(&mut self, notification: EngineNotification) {
        trace!(kind = notification.name(), "engine notification");
        self.bridge.handle(notification, self.surface.as_ref());
    }

    /// Interpret a raw pointer event. Events arriving before a surface is
    /// attached are passed through untouched.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Disposition {
        match self.surface.as_mut() {
            Some(surface) => self.gestures.handle(event, surface),
            None => {
                debug!(kind = ?event.kind, "pointer event without surface");
                Disposition::Pass
            }
        }
    }

    /// Route a URI supplied from outside the process into the surface.
    pub fn open_external(&mut self, uri: &str) -> OpenOutcome {
        self.router.open(uri, self.surface.as_mut())
    }
}
