// crates/alert-json-sink/src/sink/json.rs
// ============================================================================
// Module: JSON Alert Sink
// Description: Newline-delimited JSON sink over stdout, stderr, or a file.
// Purpose: Encode each alert and flush it to the configured destination.
// Dependencies: alert-json-config, alert-json-core, tracing
// ============================================================================

//! ## Overview
//! `JsonAlertSink` resolves its [`SinkConfig`] destination on `open`, writes
//! one JSON document plus `\n` per alert, and releases or unbinds the stream
//! on `close`. A closed sink may be opened again; file destinations are
//! truncated on every open.

// ============================================================================
// SECTION: Imports
// ============================================================================

use alert_json_config::SinkConfig;
use alert_json_core::AlertRecord;
use alert_json_core::encode_alert_to;
use tracing::debug;
use tracing::warn;

use crate::sink::EventSink;
use crate::sink::SinkError;
use crate::sink::SinkState;
use crate::sink::stream::StreamBinding;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Initial capacity of the per-record encode buffer.
const RECORD_BUFFER_CAPACITY: usize = 512;

// ============================================================================
// SECTION: JSON Alert Sink
// ============================================================================

/// Sink manager writing NDJSON alerts to the configured destination.
#[derive(Debug)]
pub struct JsonAlertSink {
    /// Resolved configuration; fixed for the sink lifetime.
    config: SinkConfig,
    /// Bound stream while open.
    stream: Option<StreamBinding>,
}

impl JsonAlertSink {
    /// Creates a closed sink for the given configuration.
    #[must_use]
    pub const fn new(config: SinkConfig) -> Self {
        Self {
            config,
            stream: None,
        }
    }

    /// Returns the sink configuration.
    #[must_use]
    pub const fn config(&self) -> &SinkConfig {
        &self.config
    }
}

impl EventSink for JsonAlertSink {
    fn open(&mut self) -> Result<(), SinkError> {
        if self.stream.is_some() {
            return Err(SinkError::AlreadyOpen);
        }
        let destination = &self.config.destination;
        let stream = StreamBinding::bind(destination)
            .map_err(|err| SinkError::OpenFailed(format!("{destination}: {err}")))?;
        debug!(
            destination = %destination,
            shared = stream.is_shared(),
            mode = self.config.format_mode().as_str(),
            "alert sink opened"
        );
        self.stream = Some(stream);
        Ok(())
    }

    fn write(&mut self, record: &AlertRecord) -> Result<(), SinkError> {
        let Some(stream) = self.stream.as_mut() else {
            return Err(SinkError::NotOpen);
        };
        let mut line = Vec::with_capacity(RECORD_BUFFER_CAPACITY);
        encode_alert_to(&mut line, record, self.config.format_mode())
            .map_err(|err| SinkError::EncodeFailed(err.to_string()))?;
        line.push(b'\n');
        stream.write_flushed(&line).map_err(|err| SinkError::WriteFailed(err.to_string()))
    }

    fn close(&mut self) -> Result<(), SinkError> {
        let Some(stream) = self.stream.take() else {
            return Err(SinkError::NotOpen);
        };
        let destination = &self.config.destination;
        match stream.release() {
            Ok(()) => {
                debug!(destination = %destination, "alert sink closed");
                Ok(())
            }
            Err(err) => {
                warn!(destination = %destination, error = %err, "alert sink close failed to flush");
                Err(SinkError::WriteFailed(err.to_string()))
            }
        }
    }

    fn state(&self) -> SinkState {
        if self.stream.is_some() { SinkState::Open } else { SinkState::Closed }
    }
}
