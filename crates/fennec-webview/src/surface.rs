//! The content surface seam.

use fennec_common::SurfaceError;

/// The single embedded browsing viewport.
///
/// Implemented by the `wry` adapter in [`crate::webview`] and by test
/// doubles. All calls happen on the shell's event loop.
pub trait ContentSurface {
    /// Start loading `uri` in the surface.
    fn load_uri(&mut self, uri: &str) -> Result<(), SurfaceError>;

    /// The URI the surface currently shows.
    fn current_uri(&self) -> Result<String, SurfaceError>;

    /// Scroll the content by `(dx, dy)` CSS pixels.
    fn scroll_by(&mut self, dx: f64, dy: f64) -> Result<(), SurfaceError>;
}

impl<S: ContentSurface + ?Sized> ContentSurface for Box<S> {
    fn load_uri(&mut self, uri: &str) -> Result<(), SurfaceError> {
        (**self).load_uri(uri)
    }

    fn current_uri(&self) -> Result<String, SurfaceError> {
        (**self).current_uri()
    }

    fn scroll_by(&mut self, dx: f64, dy: f64) -> Result<(), SurfaceError> {
        (**self).scroll_by(dx, dy)
    }
}
