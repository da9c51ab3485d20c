//! Window creation and content surface setup.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use fennec_webview::webview::full_window_bounds;
use fennec_webview::{WebViewConfig, WebViewSurface};

use super::core::FennecApp;

impl FennecApp {
    /// Create the window and the content surface, then attach it to the
    /// shell (which loads the startup page).
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title("Fennec")
            .with_inner_size(winit::dpi::LogicalSize::new(1024.0, 768.0));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let size = window.inner_size().to_logical::<f64>(window.scale_factor());
        let surface = match WebViewSurface::create(
            &*window,
            full_window_bounds(size.width, size.height),
            WebViewConfig::default(),
            self.surface_events.clone(),
        ) {
            Ok(s) => s,
            Err(e) => {
                tracing::error!("Failed to create web view: {e}");
                return false;
            }
        };

        self.window = Some(window);
        if self.shell.attach_surface(surface).is_some() {
            tracing::warn!("Replaced an existing content surface");
        }
        tracing::info!(
            window_id = self.config.bridge.window_id,
            "Content surface ready"
        );
        true
    }

    /// Keep the web view covering the whole window.
    pub(super) fn sync_surface_bounds(&self) {
        let (Some(window), Some(surface)) = (&self.window, self.shell.surface()) else {
            return;
        };
        let size = window.inner_size().to_logical::<f64>(window.scale_factor());
        if let Err(e) = surface.set_bounds(full_window_bounds(size.width, size.height)) {
            tracing::warn!("Failed to resize web view: {e}");
        }
    }
}
