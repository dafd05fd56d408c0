// crates/alert-json-sink/src/sink/mod.rs
// ============================================================================
// Module: Alert JSON Sinks
// Description: Sink trait, lifecycle state, and errors for alert output.
// Purpose: Define the open/write/close capability selected from configuration.
// Dependencies: alert-json-core, thiserror
// ============================================================================

//! ## Overview
//! An [`EventSink`] is opened once before alerts arrive, receives one `write`
//! per alert, and is closed at shutdown. Calls are serialized by the caller;
//! implementations are not required to tolerate concurrent writes.
//! Invariants:
//! - `write` returns only after the record has been flushed to the stream.
//! - Failed writes are not retried.

// ============================================================================
// SECTION: Imports
// ============================================================================

use alert_json_core::AlertRecord;
use thiserror::Error;

// ============================================================================
// SECTION: Sink Errors
// ============================================================================

/// Errors emitted by alert sinks.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum SinkError {
    /// `open` was called on an open sink.
    #[error("alert sink is already open")]
    AlreadyOpen,
    /// `write` or `close` was called on a closed sink.
    #[error("alert sink is not open")]
    NotOpen,
    /// The destination could not be opened.
    #[error("alert sink open failed: {0}")]
    OpenFailed(String),
    /// Writing or flushing the stream failed.
    #[error("alert write failed: {0}")]
    WriteFailed(String),
    /// The alert could not be encoded.
    #[error("alert encoding failed: {0}")]
    EncodeFailed(String),
}

// ============================================================================
// SECTION: Sink State
// ============================================================================

/// Lifecycle state of a sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkState {
    /// No stream is bound.
    Closed,
    /// A stream is bound and accepts writes.
    Open,
}

impl SinkState {
    /// Returns a stable label for the state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Open => "open",
        }
    }
}

// ============================================================================
// SECTION: Sink Trait
// ============================================================================

/// Writes encoded alerts to an output stream.
pub trait EventSink: Send {
    /// Binds the configured destination.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::AlreadyOpen`] when already open, or
    /// [`SinkError::OpenFailed`] when the destination cannot be opened.
    fn open(&mut self) -> Result<(), SinkError>;

    /// Encodes and writes one alert followed by a newline, then flushes.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::NotOpen`] when closed, or a write/encode error.
    fn write(&mut self, record: &AlertRecord) -> Result<(), SinkError>;

    /// Releases owned streams and unbinds shared ones.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::NotOpen`] when already closed, or
    /// [`SinkError::WriteFailed`] when the final flush of an owned stream fails.
    fn close(&mut self) -> Result<(), SinkError>;

    /// Returns the current lifecycle state.
    fn state(&self) -> SinkState;
}

// ============================================================================
// SECTION: Implementations
// ============================================================================

pub mod json;
pub mod stream;

pub use json::JsonAlertSink;
