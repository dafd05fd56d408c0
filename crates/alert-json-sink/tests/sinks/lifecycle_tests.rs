// crates/alert-json-sink/tests/sinks/lifecycle_tests.rs
// ============================================================================
// Module: Sink Lifecycle Tests
// Description: Open/write/close state transitions and error reporting.
// Purpose: Validate that misuse and open failures fail closed.
// Dependencies: alert-json-sink, alert-json-config
// ============================================================================

//! ## Overview
//! Exercises [`alert_json_sink::EventSink`] state handling.

use alert_json_config::Destination;
use alert_json_config::SinkConfig;
use alert_json_sink::EventSink;
use alert_json_sink::JsonAlertSink;
use alert_json_sink::SinkError;
use alert_json_sink::SinkState;

use super::common::FileTarget;
use super::common::bare_alert;
use super::common::file_config;

// ============================================================================
// SECTION: State Transitions
// ============================================================================

/// Tests a new sink starts closed and tracks open/close.
#[test]
fn sink_starts_closed_and_tracks_state() {
    let target = FileTarget::new();
    let mut sink = target.sink(false);
    assert_eq!(sink.state(), SinkState::Closed);

    sink.open().expect("open");
    assert_eq!(sink.state(), SinkState::Open);

    sink.close().expect("close");
    assert_eq!(sink.state(), SinkState::Closed);
    assert_eq!(SinkState::Open.as_str(), "open");
}

/// Tests a closed sink can be opened again, truncating the file.
#[test]
fn sink_reopens_after_close() {
    let target = FileTarget::new();
    let mut sink = target.sink(false);
    sink.open().expect("open");
    sink.write(&bare_alert(1)).expect("write");
    sink.close().expect("close");

    sink.open().expect("reopen");
    sink.write(&bare_alert(2)).expect("write");
    sink.close().expect("close");

    let contents = target.contents();
    assert_eq!(contents.lines().count(), 1);
    assert!(contents.contains("\"event_id\":2"));
}

/// Tests the sink is usable through the trait object.
#[test]
fn sink_is_usable_as_trait_object() {
    let target = FileTarget::new();
    let mut sink: Box<dyn EventSink> = Box::new(target.sink(false));
    sink.open().expect("open");
    sink.write(&bare_alert(5)).expect("write");
    sink.close().expect("close");
    assert_eq!(target.contents().lines().count(), 1);
}

// ============================================================================
// SECTION: Misuse Errors
// ============================================================================

/// Tests writing before open is rejected.
#[test]
fn write_before_open_is_rejected() {
    let target = FileTarget::new();
    let mut sink = target.sink(false);
    let result = sink.write(&bare_alert(1));
    assert!(matches!(result, Err(SinkError::NotOpen)));
    assert!(!target.path.exists());
}

/// Tests double open is rejected and leaves the sink open.
#[test]
fn double_open_is_rejected() {
    let target = FileTarget::new();
    let mut sink = target.sink(false);
    sink.open().expect("open");
    sink.write(&bare_alert(1)).expect("write");

    assert!(matches!(sink.open(), Err(SinkError::AlreadyOpen)));
    assert_eq!(sink.state(), SinkState::Open);

    sink.write(&bare_alert(2)).expect("write after rejected open");
    sink.close().expect("close");
    assert_eq!(target.contents().lines().count(), 2);
}

/// Tests closing a closed sink is rejected.
#[test]
fn double_close_is_rejected() {
    let target = FileTarget::new();
    let mut sink = target.sink(false);
    assert!(matches!(sink.close(), Err(SinkError::NotOpen)));

    sink.open().expect("open");
    sink.close().expect("close");
    assert!(matches!(sink.close(), Err(SinkError::NotOpen)));
}

/// Tests writing after close is rejected.
#[test]
fn write_after_close_is_rejected() {
    let target = FileTarget::new();
    let mut sink = target.sink(false);
    sink.open().expect("open");
    sink.close().expect("close");
    assert!(matches!(sink.write(&bare_alert(1)), Err(SinkError::NotOpen)));
}

// ============================================================================
// SECTION: Open Failures
// ============================================================================

/// Tests a missing parent directory fails open without fallback.
#[test]
fn open_in_missing_directory_fails() {
    let target = FileTarget::new();
    let path = target.path.with_file_name("missing").join("alerts.json");
    let mut sink = JsonAlertSink::new(file_config(&path, false));

    match sink.open() {
        Err(SinkError::OpenFailed(message)) => assert!(message.contains("alerts.json")),
        other => panic!("expected open failure, got {other:?}"),
    }
    assert_eq!(sink.state(), SinkState::Closed);
    assert!(matches!(sink.write(&bare_alert(1)), Err(SinkError::NotOpen)));
}

/// Tests the configuration is kept unchanged on the sink.
#[test]
fn sink_exposes_its_configuration() {
    let config = SinkConfig {
        destination: Destination::Stderr,
        pretty: false,
    };
    let sink = JsonAlertSink::new(config.clone());
    assert_eq!(sink.config(), &config);
}
