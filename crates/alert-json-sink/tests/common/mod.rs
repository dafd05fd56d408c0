// crates/alert-json-sink/tests/common/mod.rs
// ============================================================================
// Module: Common Test Utilities
// Description: Shared helpers for alert-json-sink tests.
// Purpose: Provide sample alerts and file-backed sink builders.
// Dependencies: alert-json-config, alert-json-core, tempfile
// ============================================================================

//! ## Overview
//! Provides shared helper functions for sink lifecycle and output tests.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use alert_json_config::Destination;
use alert_json_config::SinkConfig;
use alert_json_core::AlertRecord;
use alert_json_core::EventTime;
use alert_json_core::SignatureInfo;
use alert_json_sink::JsonAlertSink;
use tempfile::TempDir;

// ============================================================================
// SECTION: Alert Helpers
// ============================================================================

/// Creates a rule-based alert with the given identifier.
pub fn sample_alert(event_id: u32) -> AlertRecord {
    AlertRecord::new(event_id, 1, EventTime::new(1_700_000_000, 125_000))
        .with_message(format!("alert {event_id}"))
        .with_signature(SignatureInfo {
            generator_id: 1,
            signature_id: 2000 + event_id,
            revision: 3,
            classification_id: 4,
            priority: 2,
            message: Some(b"test sig".to_vec()),
            rule_text: Some(b"alert tcp any any -> any any".to_vec()),
        })
}

/// Creates an alert without message or signature.
pub fn bare_alert(event_id: u32) -> AlertRecord {
    AlertRecord::new(event_id, 0, EventTime::from_secs(1_700_000_000))
}

// ============================================================================
// SECTION: Sink Helpers
// ============================================================================

/// Temporary directory holding a file destination.
pub struct FileTarget {
    /// Keeps the directory alive for the test.
    _dir: TempDir,
    /// Destination file path.
    pub path: PathBuf,
}

impl FileTarget {
    /// Creates a fresh target inside a temporary directory.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("alerts.json");
        Self {
            _dir: dir,
            path,
        }
    }

    /// Builds a closed sink writing to this target.
    pub fn sink(&self, pretty: bool) -> JsonAlertSink {
        JsonAlertSink::new(file_config(&self.path, pretty))
    }

    /// Reads the current file contents.
    pub fn contents(&self) -> String {
        fs::read_to_string(&self.path).expect("read alert file")
    }
}

/// Builds a file-backed sink configuration.
pub fn file_config(path: &Path, pretty: bool) -> SinkConfig {
    SinkConfig {
        destination: Destination::File(path.to_path_buf()),
        pretty,
    }
}
