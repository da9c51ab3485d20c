//! `wry` web view as the shell's content surface.
//!
//! Wraps a `wry::WebView` so it implements [`ContentSurface`]. wry's
//! page-load callbacks become [`EngineNotification`]s and page pointer
//! input is captured by an injected script; both land in one
//! [`SurfaceEventQueue`] for the event loop to drain.
//!
//! [`ContentSurface`]: crate::surface::ContentSurface
//! [`EngineNotification`]: crate::notification::EngineNotification

mod builder;
mod events;
mod handlers;
mod input;
mod surface;
mod types;

pub use builder::full_window_bounds;
pub use events::{SurfaceEvent, SurfaceEventQueue};
pub use handlers::notifications_for_page_load;
pub use input::{parse_pointer_message, POINTER_CAPTURE_SCRIPT};
pub use surface::{click_script, scroll_script, WebViewSurface};
pub use types::WebViewConfig;
