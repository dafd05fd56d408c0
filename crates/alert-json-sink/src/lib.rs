// crates/alert-json-sink/src/lib.rs
// ============================================================================
// Module: Alert JSON Sink Library
// Description: Sink manager that writes encoded alerts to a configured stream.
// Purpose: Own the open/write/close lifecycle of the alert output stream.
// Dependencies: alert-json-config, alert-json-core, thiserror, tracing
// ============================================================================

//! ## Overview
//! [`JsonAlertSink`] binds a [`alert_json_config::SinkConfig`] destination to
//! a writable stream and writes one newline-terminated JSON document per
//! alert, flushing after every record.
//! Invariants:
//! - Standard output and standard error are shared and never closed here.
//! - File destinations are owned exclusively and released on close.
//! - No write is buffered across alerts.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod sink;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use sink::EventSink;
pub use sink::JsonAlertSink;
pub use sink::SinkError;
pub use sink::SinkState;
