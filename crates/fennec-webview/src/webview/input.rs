//! Page pointer input captured in the web view and posted over IPC.
//!
//! The injected script listens in the capturing phase on `window`, so it
//! sees every trusted mouse event before the page does. Down, move (while
//! the left button is held) and up are always consumed, matching the
//! gesture interpreter. Trusted clicks are consumed as well and replayed
//! into the page by the host only when the interpreter passes them. The
//! replay is an untrusted `el.click()`, which the listener lets through.

use serde::Deserialize;
use tracing::{trace, warn};
use wry::WebViewBuilder;

use crate::gesture::{PointerEvent, PointerKind};

use super::events::{SurfaceEvent, SurfaceEventQueue};

/// Injected before any page script runs.
pub const POINTER_CAPTURE_SCRIPT: &str = r#"
(function() {
    if (window.__fennecPointerCapture) {
        return;
    }
    window.__fennecPointerCapture = true;

    function post(kind, e) {
        window.ipc.postMessage(JSON.stringify({
            kind: kind,
            x: e.clientX,
            y: e.clientY
        }));
    }

    function capture(type, kind, accept) {
        window.addEventListener(type, function(e) {
            if (!e.isTrusted || !accept(e)) {
                return;
            }
            e.stopPropagation();
            e.preventDefault();
            post(kind, e);
        }, true);
    }

    function leftButton(e) { return e.button === 0; }
    function dragging(e) { return (e.buttons & 1) !== 0; }

    capture('mousedown', 'down', leftButton);
    capture('mousemove', 'move', dragging);
    capture('mouseup', 'up', leftButton);
    capture('click', 'click', leftButton);
})();
"#;

#[derive(Debug, Deserialize)]
struct PointerMessage {
    kind: PointerKind,
    x: f64,
    y: f64,
}

/// Decode one IPC body posted by [`POINTER_CAPTURE_SCRIPT`].
pub fn parse_pointer_message(body: &str) -> Option<PointerEvent> {
    let msg: PointerMessage = serde_json::from_str(body).ok()?;
    if !msg.x.is_finite() || !msg.y.is_finite() {
        return None;
    }
    Some(PointerEvent::new(msg.kind, msg.x, msg.y))
}

pub(super) fn attach_pointer_capture<'a>(
    builder: WebViewBuilder<'a>,
    queue: SurfaceEventQueue,
) -> WebViewBuilder<'a> {
    builder
        .with_initialization_script(POINTER_CAPTURE_SCRIPT)
        .with_ipc_handler(move |request| {
            let body = request.body();
            match parse_pointer_message(body) {
                Some(event) => {
                    trace!(
                        kind = ?event.kind,
                        x = event.position.x,
                        y = event.position.y,
                        "pointer from page"
                    );
                    queue.push(SurfaceEvent::Pointer(event));
                }
                None => warn!(
                    body_len = body.len(),
                    "IPC message rejected: not a pointer event"
                ),
            }
        })
}
