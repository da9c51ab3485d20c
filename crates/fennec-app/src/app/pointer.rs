//! Page pointer input routed through the gesture interpreter.

use fennec_common::Point;
use fennec_webview::{Disposition, PointerEvent, PointerKind};

use super::core::FennecApp;

/// The page holds back every trusted click; one the interpreter passes has
/// to be replayed at its position.
pub(super) fn click_to_replay(event: PointerEvent, disposition: Disposition) -> Option<Point> {
    let passed_click = event.kind == PointerKind::Click && disposition == Disposition::Pass;
    passed_click.then_some(event.position)
}

impl FennecApp {
    pub(super) fn handle_page_pointer(&mut self, event: PointerEvent) {
        let disposition = self.shell.handle_pointer(event);
        if let Some(pos) = click_to_replay(event, disposition) {
            self.replay_click(pos);
        }
    }

    fn replay_click(&self, pos: Point) {
        let Some(surface) = self.shell.surface() else {
            return;
        };
        if let Err(e) = surface.dispatch_click(pos.x, pos.y) {
            tracing::warn!(x = pos.x, y = pos.y, "click dispatch failed: {e}");
        }
    }
}
