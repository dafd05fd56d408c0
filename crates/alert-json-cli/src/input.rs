// crates/alert-json-cli/src/input.rs
// ============================================================================
// Module: Alert Input Records
// Description: Serde model of alert records read by the replay command.
// Purpose: Decode upstream alert records from NDJSON input lines.
// Dependencies: alert-json-core, serde
// ============================================================================

//! ## Overview
//! Input lines reuse the output key names so replayed files read like the
//! sink output. Signature metadata is nested under `signature`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use alert_json_core::AlertRecord;
use alert_json_core::EventTime;
use alert_json_core::SignatureInfo;
use serde::Deserialize;

// ============================================================================
// SECTION: Input Types
// ============================================================================

/// Rule metadata of an input alert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignatureInput {
    /// Generator identifier.
    pub gid: u32,
    /// Signature identifier.
    pub sid: u32,
    /// Rule revision.
    #[serde(default)]
    pub rev: u32,
    /// Classification category code.
    #[serde(default)]
    pub classification: u32,
    /// Severity rank.
    #[serde(default)]
    pub priority: u32,
    /// Rule-level description.
    #[serde(default)]
    pub message: Option<String>,
    /// Literal rule text.
    #[serde(default)]
    pub text_rule: Option<String>,
}

/// One alert input line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlertInput {
    /// Session-local event identifier.
    pub event_id: u32,
    /// Correlation reference.
    #[serde(default)]
    pub event_reference: u32,
    /// Detection time in whole seconds.
    pub ref_time: u64,
    /// Sub-second component in microseconds.
    #[serde(default)]
    pub ref_time_usec: u32,
    /// Alert-instance message.
    #[serde(default)]
    pub alt_msg: Option<String>,
    /// Rule metadata for rule-based detections.
    #[serde(default)]
    pub signature: Option<SignatureInput>,
}

impl From<SignatureInput> for SignatureInfo {
    fn from(input: SignatureInput) -> Self {
        Self {
            generator_id: input.gid,
            signature_id: input.sid,
            revision: input.rev,
            classification_id: input.classification,
            priority: input.priority,
            message: input.message.map(String::into_bytes),
            rule_text: input.text_rule.map(String::into_bytes),
        }
    }
}

impl From<AlertInput> for AlertRecord {
    fn from(input: AlertInput) -> Self {
        Self {
            event_id: input.event_id,
            event_reference: input.event_reference,
            ref_time: EventTime::new(input.ref_time, input.ref_time_usec),
            message: input.alt_msg.map(String::into_bytes),
            signature: input.signature.map(SignatureInfo::from),
        }
    }
}

/// Parses one NDJSON input line into an alert record.
///
/// # Errors
///
/// Returns the JSON error when the line is not a valid alert input.
pub fn parse_alert_line(line: &str) -> Result<AlertRecord, serde_json::Error> {
    serde_json::from_str::<AlertInput>(line).map(AlertRecord::from)
}
