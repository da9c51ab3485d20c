//! Per-turn pumping of surface events and outbound messages.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use fennec_webview::webview::SurfaceEvent;

use super::core::{FennecApp, POLL_INTERVAL};

impl FennecApp {
    /// Run one pump and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        self.poll_surface_events();
        self.drain_outbound();
        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    /// Feed what the web view's callbacks queued to the shell, in order.
    fn poll_surface_events(&mut self) {
        for event in self.surface_events.drain() {
            match event {
                SurfaceEvent::Engine(notification) => self.shell.handle_notification(notification),
                SurfaceEvent::Pointer(pointer) => self.handle_page_pointer(pointer),
            }
        }
    }

    /// Hand outbound messages to the native consumer. The consumer lives
    /// outside this process, so for now every message is logged.
    fn drain_outbound(&mut self) {
        for message in self.outbound.drain() {
            tracing::info!(payload = %message, "outbound message");
        }
    }
}
