// crates/alert-json-cli/src/replay.rs
// ============================================================================
// Module: Alert Replay
// Description: Drives a sink through open, per-alert writes, and close.
// Purpose: Feed NDJSON alert input through an event sink.
// Dependencies: alert-json-sink, thiserror, tracing
// ============================================================================

//! ## Overview
//! [`replay_alerts`] opens the sink, writes every non-blank input line as one
//! alert, and always closes the sink before returning. The first malformed
//! line or failed write stops the replay; alerts already written stay written.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::BufRead;

use alert_json_sink::EventSink;
use alert_json_sink::SinkError;
use thiserror::Error;
use tracing::debug;

use crate::input::parse_alert_line;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Errors emitted while replaying alerts.
#[derive(Debug, Error)]
pub enum ReplayError {
    /// Reading the input failed.
    #[error("failed to read alert input: {0}")]
    Read(String),
    /// An input line is not a valid alert.
    #[error("invalid alert on line {line}: {message}")]
    Parse {
        /// One-based input line number.
        line: usize,
        /// Parser message.
        message: String,
    },
    /// The sink rejected an operation.
    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Counters reported after a replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Alerts written to the sink.
    pub written: usize,
    /// Blank input lines skipped.
    pub skipped: usize,
}

// ============================================================================
// SECTION: Replay
// ============================================================================

/// Replays NDJSON alerts from `input` through `sink`.
///
/// # Errors
///
/// Returns [`ReplayError`] when the sink cannot be opened, an input line is
/// malformed, a write fails, or closing the sink fails.
pub fn replay_alerts<R, S>(input: R, sink: &mut S) -> Result<ReplaySummary, ReplayError>
where
    R: BufRead,
    S: EventSink + ?Sized,
{
    sink.open()?;
    let outcome = write_alerts(input, sink);
    let closed = sink.close();
    let summary = outcome?;
    closed?;
    Ok(summary)
}

/// Writes each input alert to an open sink.
fn write_alerts<R, S>(input: R, sink: &mut S) -> Result<ReplaySummary, ReplayError>
where
    R: BufRead,
    S: EventSink + ?Sized,
{
    let mut summary = ReplaySummary::default();
    for (index, line) in input.lines().enumerate() {
        let line = line.map_err(|err| ReplayError::Read(err.to_string()))?;
        if line.trim().is_empty() {
            summary.skipped += 1;
            continue;
        }
        let record = parse_alert_line(&line).map_err(|err| ReplayError::Parse {
            line: index + 1,
            message: err.to_string(),
        })?;
        sink.write(&record)?;
        debug!(event_id = record.event_id, "alert written");
        summary.written += 1;
    }
    Ok(summary)
}
