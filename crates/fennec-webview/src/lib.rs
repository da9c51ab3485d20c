//! Bridge between the embedded browser surface and the native host.
//!
//! Provides:
//! - The outbound `{"gecko": {...}}` message protocol and its transports
//! - `NavigationBridge`: engine load/location/progress callbacks -> messages,
//!   plus the remembered last URI
//! - `GestureInterpreter`: pointer stream -> scrolling and click suppression
//! - `ExternalOpenRouter`: URIs handed in from outside the process
//! - `BrowserShell`: owns the single content surface and all of the above
//! - A `wry` web view adapter implementing `ContentSurface`

pub mod flags;
pub mod gesture;
pub mod message;
pub mod navigation;
pub mod notification;
pub mod router;
pub mod shell;
pub mod surface;
pub mod transport;
pub mod webview;

#[cfg(test)]
pub(crate) mod test_support;

pub use flags::StateFlags;
pub use gesture::{Disposition, GestureInterpreter, GestureState, PointerEvent, PointerKind};
pub use message::{Envelope, LoadPhase, OutboundMessage, StateScope};
pub use navigation::NavigationBridge;
pub use notification::EngineNotification;
pub use router::{ExternalOpenRouter, OpenOutcome};
pub use shell::BrowserShell;
pub use surface::ContentSurface;
pub use transport::{BroadcastTransport, QueueTransport, Transport};
pub use webview::{WebViewConfig, WebViewSurface};
