// crates/alert-json-core/src/lib.rs
// ============================================================================
// Module: Alert JSON Core Library
// Description: Alert record model and JSON event encoder.
// Purpose: Map one detection alert to one deterministic JSON document.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! `alert-json-core` defines the read-only [`AlertRecord`] handed over by the
//! detection pipeline and the pure encoder that turns it into a JSON object.
//! Invariants:
//! - Field order is fixed: base fields first, then signature fields when present.
//! - Absent text fields encode as `""`, never as `null` and never omitted.
//! - Compact and pretty output differ only in whitespace.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod encoder;
pub mod model;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use encoder::EncodeError;
pub use encoder::FormatMode;
pub use encoder::PRETTY_INDENT;
pub use encoder::encode_alert;
pub use encoder::encode_alert_to;
pub use model::AlertRecord;
pub use model::EventTime;
pub use model::SignatureInfo;
