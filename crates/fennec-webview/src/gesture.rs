//! Pointer gesture interpretation for the content surface.
//!
//! A gesture cycle is pointer-down, zero or more pointer-moves, then
//! pointer-up. Moves drag the content (content follows the finger), and a
//! cycle that travelled further than the click threshold swallows the
//! click the platform synthesizes after the pointer-up.
//!
//! Only one logical pointer is tracked. A second pointer-down before the
//! pointer-up simply starts a new cycle.

use fennec_common::Point;
use serde::Deserialize;
use tracing::{debug, trace, warn};

use crate::surface::ContentSurface;

/// Travel (per axis) beyond which a tap becomes a drag.
pub const DEFAULT_CLICK_THRESHOLD: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerKind {
    Down,
    Move,
    Up,
    /// The click the platform dispatches after a down/up pair.
    Click,
}

/// A raw pointer event in content-surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub position: Point,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, x: f64, y: f64) -> Self {
        Self {
            kind,
            position: Point::new(x, y),
        }
    }

    pub fn down(x: f64, y: f64) -> Self {
        Self::new(PointerKind::Down, x, y)
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self::new(PointerKind::Move, x, y)
    }

    pub fn up(x: f64, y: f64) -> Self {
        Self::new(PointerKind::Up, x, y)
    }

    pub fn click(x: f64, y: f64) -> Self {
        Self::new(PointerKind::Click, x, y)
    }
}

/// What the dispatcher should do with an event after interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Stop propagation and cancel the default action.
    Consume,
    /// Let the event reach the page untouched.
    Pass,
}

/// Positional state of the current gesture cycle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureState {
    pub last: Point,
    pub start: Point,
    pub block_click: bool,
}

#[derive(Debug, Clone)]
pub struct GestureInterpreter {
    state: GestureState,
    click_threshold: f64,
}

impl GestureInterpreter {
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_CLICK_THRESHOLD)
    }

    pub fn with_threshold(click_threshold: f64) -> Self {
        Self {
            state: GestureState::default(),
            click_threshold,
        }
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn click_threshold(&self) -> f64 {
        self.click_threshold
    }

    /// Whether the next click will be swallowed.
    pub fn blocks_click(&self) -> bool {
        self.state.block_click
    }

    /// Interpret one pointer event, scrolling `surface` for moves.
    pub fn handle<S: ContentSurface + ?Sized>(
        &mut self,
        event: PointerEvent,
        surface: &mut S,
    ) -> Disposition {
        let pos = event.position;
        match event.kind {
            PointerKind::Down => {
                self.state = GestureState {
                    last: pos,
                    start: pos,
                    block_click: false,
                };
                trace!(x = pos.x, y = pos.y, "gesture start");
                Disposition::Consume
            }
            PointerKind::Move => {
                let (dx, dy) = pos.delta_from(self.state.last);
                if let Err(e) = surface.scroll_by(-dx, -dy) {
                    warn!(dx, dy, error = %e, "scroll failed");
                }
                self.state.last = pos;
                Disposition::Consume
            }
            PointerKind::Up => {
                if pos.exceeds(self.state.start, self.click_threshold) {
                    debug!(
                        start_x = self.state.start.x,
                        start_y = self.state.start.y,
                        x = pos.x,
                        y = pos.y,
                        "drag ended, blocking click"
                    );
                    self.state.block_click = true;
                }
                Disposition::Consume
            }
            // The flag stays set until the next pointer-down: the click is
            // dispatched after the pointer-up and must still see it.
            PointerKind::Click => {
                if self.state.block_click {
                    trace!("click suppressed");
                    Disposition::Consume
                } else {
                    Disposition::Pass
                }
            }
        }
    }
}

impl Default for GestureInterpreter {
    fn default() -> Self {
        Self::new()
    }
}
