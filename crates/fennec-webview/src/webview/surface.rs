use fennec_common::SurfaceError;
use wry::WebView;

use crate::surface::ContentSurface;

/// Script that scrolls the page by `(dx, dy)` CSS pixels.
pub fn scroll_script(dx: f64, dy: f64) -> String {
    format!("window.scrollBy({dx}, {dy});")
}

/// Script that clicks whatever element sits at `(x, y)` in the viewport.
pub fn click_script(x: f64, y: f64) -> String {
    format!(
        "(function() {{ var el = document.elementFromPoint({x}, {y}); if (el) {{ el.click(); }} }})();"
    )
}

pub(super) fn engine_error(e: wry::Error) -> SurfaceError {
    SurfaceError::Engine(e.to_string())
}

/// The embedded web view, seen as the shell's content surface.
pub struct WebViewSurface {
    webview: WebView,
}

impl WebViewSurface {
    pub fn new(webview: WebView) -> Self {
        Self { webview }
    }

    /// Deliver a click the gesture interpreter let through.
    pub fn dispatch_click(&self, x: f64, y: f64) -> Result<(), SurfaceError> {
        self.webview
            .evaluate_script(&click_script(x, y))
            .map_err(engine_error)
    }

    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), SurfaceError> {
        self.webview.set_bounds(bounds).map_err(engine_error)
    }
}

impl ContentSurface for WebViewSurface {
    fn load_uri(&mut self, uri: &str) -> Result<(), SurfaceError> {
        self.webview.load_url(uri).map_err(engine_error)
    }

    fn current_uri(&self) -> Result<String, SurfaceError> {
        let uri = self.webview.url().map_err(engine_error)?;
        if uri.is_empty() {
            return Err(SurfaceError::NoUri);
        }
        Ok(uri)
    }

    fn scroll_by(&mut self, dx: f64, dy: f64) -> Result<(), SurfaceError> {
        self.webview
            .evaluate_script(&scroll_script(dx, dy))
            .map_err(engine_error)
    }
}
