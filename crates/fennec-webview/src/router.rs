//! Routing of URIs handed in from outside the process.
//!
//! An external application can ask the shell to open a link at any time,
//! including before the content surface exists. Those requests are held
//! in a small FIFO and replayed, in order, once the surface is attached.

use std::collections::VecDeque;

use fennec_common::SurfaceError;
use tracing::{info, warn};

use crate::surface::ContentSurface;

/// Pending requests kept while the surface is not ready.
pub const MAX_PENDING_OPENS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// Handed to the surface's load routine.
    Loaded,
    /// Held until the surface becomes ready.
    Queued,
    /// The surface rejected the load; the request is dropped.
    Failed,
}

#[derive(Debug, Clone)]
pub struct ExternalOpenRouter {
    pending: VecDeque<String>,
    capacity: usize,
}

impl ExternalOpenRouter {
    pub fn new() -> Self {
        Self::with_capacity(MAX_PENDING_OPENS)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pending: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn pending(&self) -> impl Iterator<Item = &str> {
        self.pending.iter().map(String::as_str)
    }

    /// Open `uri` in the surface, bypassing in-app navigation UI.
    ///
    /// Requests still queued from earlier are replayed first, so opens
    /// always reach the surface in arrival order.
    pub fn open<S: ContentSurface + ?Sized>(
        &mut self,
        uri: &str,
        surface: Option<&mut S>,
    ) -> OpenOutcome {
        let Some(surface) = surface else {
            self.enqueue(uri);
            return OpenOutcome::Queued;
        };

        // Older requests go first; if they cannot all be replayed yet this
        // one waits behind them.
        if self.has_pending() {
            self.flush(&mut *surface);
            if self.has_pending() {
                self.enqueue(uri);
                return OpenOutcome::Queued;
            }
        }

        match surface.load_uri(uri) {
            Ok(()) => {
                info!(uri = %uri, "opened external uri");
                OpenOutcome::Loaded
            }
            Err(SurfaceError::NotReady) => {
                self.enqueue(uri);
                OpenOutcome::Queued
            }
            Err(e) => {
                warn!(uri = %uri, error = %e, "external open failed");
                OpenOutcome::Failed
            }
        }
    }

    /// Replay queued requests against a now-ready surface. Returns how many
    /// were handed to the surface.
    ///
    /// Stops at the first `NotReady` and keeps the remainder queued.
    pub fn flush<S: ContentSurface + ?Sized>(&mut self, surface: &mut S) -> usize {
        let mut loaded = 0;
        while let Some(uri) = self.pending.pop_front() {
            match surface.load_uri(&uri) {
                Ok(()) => {
                    info!(uri = %uri, "opened queued external uri");
                    loaded += 1;
                }
                Err(SurfaceError::NotReady) => {
                    self.pending.push_front(uri);
                    break;
                }
                Err(e) => warn!(uri = %uri, error = %e, "queued external open failed"),
            }
        }
        loaded
    }

    fn enqueue(&mut self, uri: &str) {
        if self.pending.len() == self.capacity {
            if let Some(dropped) = self.pending.pop_front() {
                warn!(dropped = %dropped, "external open queue full, dropping oldest");
            }
        }
        info!(uri = %uri, "surface not ready, queueing external uri");
        self.pending.push_back(uri.to_string());
    }
}

impl Default for ExternalOpenRouter {
    fn default() -> Self {
        Self::new()
    }
}
