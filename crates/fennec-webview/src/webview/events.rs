use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::gesture::PointerEvent;
use crate::notification::EngineNotification;

/// Something the web view reported from one of its callbacks.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    Engine(EngineNotification),
    Pointer(PointerEvent),
}

/// Events pushed from wry's callbacks, drained by the event loop in
/// arrival order. Clones share the same queue.
#[derive(Debug, Clone, Default)]
pub struct SurfaceEventQueue {
    events: Arc<Mutex<Vec<SurfaceEvent>>>,
}

impl SurfaceEventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: SurfaceEvent) {
        self.lock().push(event);
    }

    pub fn extend(&self, events: impl IntoIterator<Item = SurfaceEvent>) {
        self.lock().extend(events);
    }

    /// Take every queued event, oldest first.
    pub fn drain(&self) -> Vec<SurfaceEvent> {
        std::mem::take(&mut *self.lock())
    }

    // A callback that panicked mid-push leaves the queue usable.
    fn lock(&self) -> MutexGuard<'_, Vec<SurfaceEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
