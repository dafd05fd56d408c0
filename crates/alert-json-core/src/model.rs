// crates/alert-json-core/src/model.rs
// ============================================================================
// Module: Alert Record Model
// Description: Alert records and rule signature metadata produced upstream.
// Purpose: Carry detection events into the encoder without interpretation.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Records are built by the detection pipeline and only read here. Text
//! fields hold raw bytes because upstream text is not guaranteed to be UTF-8;
//! the encoder repairs invalid sequences when it writes them.
//! Invariants:
//! - A [`SignatureInfo`] is either attached whole or not at all.
//! - Numeric fields are never interpreted, only transported.

// ============================================================================
// SECTION: Event Time
// ============================================================================

/// Detection timestamp captured when the alert was raised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventTime {
    /// Whole seconds since the Unix epoch.
    pub seconds: u64,
    /// Sub-second component in microseconds.
    pub micros: u32,
}

impl EventTime {
    /// Creates a timestamp with no sub-second component.
    #[must_use]
    pub const fn from_secs(seconds: u64) -> Self {
        Self {
            seconds,
            micros: 0,
        }
    }

    /// Creates a timestamp from seconds and microseconds.
    #[must_use]
    pub const fn new(seconds: u64, micros: u32) -> Self {
        Self {
            seconds,
            micros,
        }
    }
}

// ============================================================================
// SECTION: Signature Info
// ============================================================================

/// Metadata of the rule that fired, present only for rule-based detections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignatureInfo {
    /// Generator identifier.
    pub generator_id: u32,
    /// Signature identifier.
    pub signature_id: u32,
    /// Rule revision.
    pub revision: u32,
    /// Classification category code.
    pub classification_id: u32,
    /// Severity rank as assigned upstream.
    pub priority: u32,
    /// Rule-level description text.
    pub message: Option<Vec<u8>>,
    /// Literal rule definition text.
    pub rule_text: Option<Vec<u8>>,
}

// ============================================================================
// SECTION: Alert Record
// ============================================================================

/// One detection event as handed over by the alert pipeline.
///
/// # Invariants
/// - `event_id` is unique within a session only.
/// - `event_reference` groups related firings and may repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertRecord {
    /// Session-local event identifier.
    pub event_id: u32,
    /// Correlation reference shared by related events.
    pub event_reference: u32,
    /// Time the detection fired.
    pub ref_time: EventTime,
    /// Alert-instance text; `None` when upstream supplied no message.
    pub message: Option<Vec<u8>>,
    /// Rule metadata for rule-based detections.
    pub signature: Option<SignatureInfo>,
}

impl AlertRecord {
    /// Creates a record without message or signature metadata.
    #[must_use]
    pub const fn new(event_id: u32, event_reference: u32, ref_time: EventTime) -> Self {
        Self {
            event_id,
            event_reference,
            ref_time,
            message: None,
            signature: None,
        }
    }

    /// Attaches the alert-instance message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<Vec<u8>>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attaches rule signature metadata.
    #[must_use]
    pub fn with_signature(mut self, signature: SignatureInfo) -> Self {
        self.signature = Some(signature);
        self
    }
}
