//! Tests for the navigation bridge.

use fennec_common::{ConfigError, SurfaceError};
use fennec_config::{BridgeConfig, FennecConfig, MemoryPrefs, PrefStore, LAST_URI_PREF};
use serde_json::json;

use super::*;
use crate::test_support::{sent_messages, RecordingSurface};
use crate::transport::QueueTransport;

fn bridge() -> NavigationBridge<QueueTransport, MemoryPrefs> {
    NavigationBridge::new(QueueTransport::new(), MemoryPrefs::new())
}

// -- onStateChange --

#[test]
fn stop_bit_maps_to_stop() {
    let bridge = bridge();
    bridge.on_state_change(StateFlags::STOP | StateFlags::IS_NETWORK, 0);

    let sent = sent_messages(bridge.transport());
    assert_eq!(
        sent,
        vec![json!({"type": "onStateChange", "windowID": 0, "state": "stop", "stateIs": "network"})]
    );
}

#[test]
fn without_stop_bit_maps_to_start() {
    let bridge = bridge();
    for flags in [
        StateFlags::START,
        StateFlags::START | StateFlags::IS_REQUEST,
        StateFlags::TRANSFERRING,
        StateFlags::empty(),
    ] {
        bridge.on_state_change(flags, 0);
    }

    let sent = sent_messages(bridge.transport());
    assert_eq!(sent.len(), 4);
    assert!(sent.iter().all(|m| m["state"] == json!("start")));
}

#[test]
fn state_is_always_network_by_default() {
    let bridge = bridge();
    bridge.on_state_change(StateFlags::START | StateFlags::IS_DOCUMENT, 0);
    bridge.on_state_change(StateFlags::STOP | StateFlags::IS_DOCUMENT, 0);
    bridge.on_state_change(StateFlags::from_bits_retain(u32::MAX), 0x804b_0002);

    let sent = sent_messages(bridge.transport());
    assert!(sent.iter().all(|m| m["stateIs"] == json!("network")));
}

#[test]
fn document_scope_when_opted_in() {
    let bridge = bridge().with_bridge_config(&BridgeConfig {
        window_id: 0,
        report_document_scope: true,
    });
    bridge.on_state_change(StateFlags::STOP | StateFlags::IS_DOCUMENT, 0);
    bridge.on_state_change(StateFlags::STOP | StateFlags::IS_NETWORK, 0);

    let sent = sent_messages(bridge.transport());
    assert_eq!(sent[0]["stateIs"], json!("document"));
    assert_eq!(sent[1]["stateIs"], json!("network"));
}

#[test]
fn configured_window_id_is_reported() {
    let bridge = bridge().with_bridge_config(&BridgeConfig {
        window_id: 7,
        report_document_scope: false,
    });
    bridge.on_progress_change(1, 2);
    assert_eq!(sent_messages(bridge.transport())[0]["windowID"], json!(7));
}

// -- onLocationChange --

#[test]
fn location_change_persists_and_hides_loading_screen() {
    let mut bridge = bridge();
    let surface = RecordingSurface::showing("https://example.com");

    bridge.on_location_change(&surface, "https://example.com");

    assert_eq!(
        bridge.prefs().get_string(LAST_URI_PREF).unwrap(),
        "https://example.com"
    );
    let sent = sent_messages(bridge.transport());
    assert_eq!(
        sent,
        vec![
            json!({"type": "onLocationChange", "windowID": 0, "uri": "https://example.com"}),
            json!({"type": "hideLoadingScreen", "windowID": 0}),
        ]
    );
}

#[test]
fn location_change_uses_surface_uri_over_reported() {
    let mut bridge = bridge();
    let surface = RecordingSurface::showing("https://final.example/landing");

    bridge.on_location_change(&surface, "https://redirect.example/");

    let sent = sent_messages(bridge.transport());
    assert_eq!(sent[0]["uri"], json!("https://final.example/landing"));
}

#[test]
fn location_change_overwrites_previous_value() {
    let mut bridge = NavigationBridge::new(
        QueueTransport::new(),
        MemoryPrefs::with_values([(LAST_URI_PREF, "https://old.example")]),
    );
    bridge.on_location_change(&RecordingSurface::showing("https://new.example"), "");
    assert_eq!(
        bridge.prefs().get_string(LAST_URI_PREF).unwrap(),
        "https://new.example"
    );
}

#[test]
fn location_change_without_uri_emits_nothing() {
    let mut bridge = bridge();
    bridge.on_location_change(&RecordingSurface::default(), "https://example.com");

    assert!(bridge.transport().is_empty());
    assert!(bridge.prefs().get_string(LAST_URI_PREF).is_err());
}

#[test]
fn location_change_before_surface_attached_emits_nothing() {
    let mut bridge = bridge();
    bridge.handle::<RecordingSurface>(
        EngineNotification::LocationChange {
            uri: "https://example.com".into(),
        },
        None,
    );
    assert!(bridge.transport().is_empty());
}

/// A store whose reads report a value some other process wrote.
struct RacedPrefs {
    written: Option<String>,
    foreign: String,
}

impl PrefStore for RacedPrefs {
    fn get_string(&self, _key: &str) -> Result<String, ConfigError> {
        Ok(self.foreign.clone())
    }

    fn set_string(&mut self, _key: &str, value: &str) -> Result<(), ConfigError> {
        self.written = Some(value.to_string());
        Ok(())
    }
}

#[test]
fn foreign_writer_suppresses_hide_loading_screen() {
    let mut bridge = NavigationBridge::new(
        QueueTransport::new(),
        RacedPrefs {
            written: None,
            foreign: "https://someone-else.example".into(),
        },
    );
    bridge.on_location_change(&RecordingSurface::showing("https://mine.example"), "");

    let sent = sent_messages(bridge.transport());
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0]["type"], json!("onLocationChange"));
    assert_eq!(bridge.prefs().written.as_deref(), Some("https://mine.example"));
}

/// A store that cannot be written.
struct ReadOnlyPrefs;

impl PrefStore for ReadOnlyPrefs {
    fn get_string(&self, key: &str) -> Result<String, ConfigError> {
        Err(ConfigError::MissingPref(key.to_string()))
    }

    fn set_string(&mut self, _key: &str, _value: &str) -> Result<(), ConfigError> {
        Err(ConfigError::ParseError("read-only filesystem".into()))
    }
}

#[test]
fn failed_persist_sends_nothing() {
    let mut bridge = NavigationBridge::new(QueueTransport::new(), ReadOnlyPrefs);
    bridge.on_location_change(&RecordingSurface::showing("https://example.com"), "");

    assert!(sent_messages(bridge.transport()).is_empty());
}

#[test]
fn failed_persist_does_not_block_later_callbacks() {
    let mut bridge = NavigationBridge::new(QueueTransport::new(), ReadOnlyPrefs);
    bridge.on_location_change(&RecordingSurface::showing("https://example.com"), "");
    bridge.on_progress_change(100, 100);

    let sent = sent_messages(bridge.transport());
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0]["type"], json!("onProgressChange"));
}

// -- onProgressChange --

#[test]
fn progress_passes_through_verbatim() {
    let bridge = bridge();
    bridge.on_progress_change(50, 100);
    bridge.on_progress_change(-1, -1);
    bridge.on_progress_change(30, -1);

    let sent = sent_messages(bridge.transport());
    assert_eq!(
        sent[0],
        json!({"type": "onProgressChange", "windowID": 0, "current": 50, "total": 100})
    );
    assert_eq!(sent[1]["current"], json!(-1));
    assert_eq!(sent[1]["total"], json!(-1));
    assert_eq!(sent[2]["current"], json!(30));
    assert_eq!(sent[2]["total"], json!(-1));
}

// -- status / security --

#[test]
fn status_and_security_changes_emit_nothing() {
    let mut bridge = bridge();
    let surface = RecordingSurface::showing("about:blank");
    bridge.handle(
        EngineNotification::StatusChange {
            status: 0,
            message: "Waiting for example.com...".into(),
        },
        Some(&surface),
    );
    bridge.handle(EngineNotification::SecurityChange { state: 4 }, Some(&surface));
    assert!(bridge.transport().is_empty());
}

#[test]
fn handle_dispatches_each_kind() {
    let mut bridge = bridge();
    let surface = RecordingSurface::showing("https://example.com");

    bridge.handle(
        EngineNotification::StateChange {
            flags: StateFlags::START,
            status: 0,
        },
        Some(&surface),
    );
    bridge.handle(
        EngineNotification::ProgressChange {
            current: 10,
            total: 20,
        },
        Some(&surface),
    );
    bridge.handle(
        EngineNotification::LocationChange {
            uri: "https://example.com".into(),
        },
        Some(&surface),
    );

    let kinds: Vec<_> = sent_messages(bridge.transport())
        .into_iter()
        .map(|m| m["type"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        kinds,
        vec![
            "onStateChange",
            "onProgressChange",
            "onLocationChange",
            "hideLoadingScreen"
        ]
    );
}

// -- startup --

#[test]
fn startup_defaults_to_about_support() {
    let bridge = bridge();
    let mut surface = RecordingSurface::default();

    let uri = bridge.restore_last_uri(&mut surface);

    assert_eq!(uri, "about:support");
    assert_eq!(surface.loads, vec!["about:support"]);
}

#[test]
fn startup_loads_remembered_uri() {
    let bridge = NavigationBridge::new(
        QueueTransport::new(),
        MemoryPrefs::with_values([(LAST_URI_PREF, "https://example.com/news")]),
    );
    let mut surface = RecordingSurface::default();

    bridge.restore_last_uri(&mut surface);

    assert_eq!(surface.loads, vec!["https://example.com/news"]);
}

#[test]
fn startup_uses_configured_default() {
    let mut config = FennecConfig::default();
    config.startup.default_uri = "about:home".into();
    let bridge = NavigationBridge::from_config(QueueTransport::new(), MemoryPrefs::new(), &config);

    assert_eq!(bridge.last_uri(), "about:home");
}

#[test]
fn startup_load_failure_is_swallowed() {
    let bridge = bridge();
    let mut surface = RecordingSurface {
        fail_loads: true,
        ..Default::default()
    };
    assert_eq!(bridge.restore_last_uri(&mut surface), "about:support");
    assert!(surface.loads.is_empty());
    assert!(bridge.transport().is_empty());
}

#[test]
fn surface_error_kinds_do_not_emit() {
    struct Detached;
    impl ContentSurface for Detached {
        fn load_uri(&mut self, _uri: &str) -> Result<(), SurfaceError> {
            Err(SurfaceError::NotReady)
        }
        fn current_uri(&self) -> Result<String, SurfaceError> {
            Err(SurfaceError::Engine("detached".into()))
        }
        fn scroll_by(&mut self, _dx: f64, _dy: f64) -> Result<(), SurfaceError> {
            Err(SurfaceError::NotReady)
        }
    }

    let mut bridge = bridge();
    bridge.on_location_change(&Detached, "https://example.com");
    assert!(bridge.transport().is_empty());
}
