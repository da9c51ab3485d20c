//! Test doubles shared by the unit tests in this crate.

use fennec_common::SurfaceError;
use serde_json::Value;

use crate::surface::ContentSurface;
use crate::transport::QueueTransport;

/// A content surface that records every call made against it.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub uri: Option<String>,
    pub loads: Vec<String>,
    pub scrolls: Vec<(f64, f64)>,
    pub fail_loads: bool,
}

impl RecordingSurface {
    pub fn showing(uri: &str) -> Self {
        Self {
            uri: Some(uri.to_string()),
            ..Default::default()
        }
    }
}

impl ContentSurface for RecordingSurface {
    fn load_uri(&mut self, uri: &str) -> Result<(), SurfaceError> {
        if self.fail_loads {
            return Err(SurfaceError::NotReady);
        }
        self.loads.push(uri.to_string());
        self.uri = Some(uri.to_string());
        Ok(())
    }

    fn current_uri(&self) -> Result<String, SurfaceError> {
        self.uri.clone().ok_or(SurfaceError::NoUri)
    }

    fn scroll_by(&mut self, dx: f64, dy: f64) -> Result<(), SurfaceError> {
        self.scrolls.push((dx, dy));
        Ok(())
    }
}

/// Drain a queue transport and return the inner `gecko` objects.
pub fn sent_messages(transport: &QueueTransport) -> Vec<Value> {
    transport
        .drain()
        .iter()
        .map(|raw| {
            let value: Value = serde_json::from_str(raw).expect("transport emitted invalid JSON");
            value["gecko"].clone()
        })
        .collect()
}
