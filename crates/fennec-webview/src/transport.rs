//! One-way delivery of outbound messages to the native host.
//!
//! Delivery is fire-and-forget: `send` returns nothing, there is no
//! acknowledgement and no retry. Both transports preserve send order.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::broadcast;
use tracing::{trace, warn};

use crate::message::Envelope;

pub trait Transport {
    fn send(&self, envelope: &Envelope);
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, envelope: &Envelope) {
        (**self).send(envelope)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, envelope: &Envelope) {
        (**self).send(envelope)
    }
}

fn serialize(envelope: &Envelope) -> Option<String> {
    match envelope.to_json() {
        Ok(json) => Some(json),
        Err(e) => {
            warn!(kind = envelope.gecko.kind(), error = %e, "failed to serialize outbound message");
            None
        }
    }
}

/// Pushes serialized messages onto a shared queue that the host loop drains.
///
/// Clones share the same queue.
#[derive(Debug, Clone, Default)]
pub struct QueueTransport {
    queue: Arc<Mutex<Vec<String>>>,
}

impl QueueTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every message sent so far, oldest first.
    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A sender that panicked mid-push leaves the queue usable.
    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Transport for QueueTransport {
    fn send(&self, envelope: &Envelope) {
        let Some(json) = serialize(envelope) else {
            return;
        };
        trace!(
            kind = envelope.gecko.kind(),
            window_id = envelope.gecko.window_id(),
            "queued outbound message"
        );
        self.lock().push(json);
    }
}

/// Fans serialized messages out to any number of host-side subscribers.
///
/// A send with no live subscriber is dropped.
pub struct BroadcastTransport {
    sender: broadcast::Sender<String>,
}

impl BroadcastTransport {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.sender.subscribe()
    }
}

impl Transport for BroadcastTransport {
    fn send(&self, envelope: &Envelope) {
        let Some(json) = serialize(envelope) else {
            return;
        };
        if self.sender.send(json).is_err() {
            trace!(kind = envelope.gecko.kind(), "no host subscribed, message dropped");
        }
    }
}
