use tracing::debug;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use super::events::SurfaceEventQueue;
use super::handlers::attach_page_load_handler;
use super::input::attach_pointer_capture;
use super::surface::{engine_error, WebViewSurface};
use super::types::WebViewConfig;

/// Bounds covering a whole window of the given logical size.
pub fn full_window_bounds(width: f64, height: f64) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(0.0, 0.0)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(width, height)),
    }
}

impl WebViewSurface {
    /// Create the content web view as a child of `window`.
    ///
    /// Page-load callbacks and captured page pointer input are pushed onto
    /// `events` in the order they happen.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
        events: SurfaceEventQueue,
    ) -> fennec_common::Result<Self> {
        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_transparent(config.transparent)
            .with_devtools(config.devtools);

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        if let Some(url) = &config.initial_url {
            builder = builder.with_url(url);
        }

        builder = attach_page_load_handler(builder, events.clone());
        builder = attach_pointer_capture(builder, events);

        let webview = builder
            .build_as_child(window)
            .map_err(engine_error)?;
        debug!(url = ?config.initial_url, "content web view created");
        Ok(Self::new(webview))
    }
}
