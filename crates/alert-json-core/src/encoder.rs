// crates/alert-json-core/src/encoder.rs
// ============================================================================
// Module: Alert JSON Encoder
// Description: Ordered key/value packing of alert records into JSON objects.
// Purpose: Produce one deterministic JSON document per alert.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The encoder flattens an [`AlertRecord`] into an ordered list of
//! `(key, value)` pairs and streams them through a single object writer. The
//! formatter is the only thing [`FormatMode`] changes, so compact and pretty
//! output always carry the same keys, values and order.
//!
//! Key order:
//! `event_id, event_reference, ref_time, alt_msg` followed, for rule-based
//! alerts, by `gid, sid, rev, classification, priority, message, text_rule`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::borrow::Cow;
use std::io::Write;

use serde::Serialize;
use serde::Serializer;
use serde::ser::SerializeMap;
use serde_json::Serializer as JsonSerializer;
use serde_json::ser::CompactFormatter;
use serde_json::ser::Formatter;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;

use crate::model::AlertRecord;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Indentation unit used by [`FormatMode::Pretty`].
pub const PRETTY_INDENT: &[u8] = b"    ";

/// Number of keys in a fully populated alert object.
const MAX_ALERT_FIELDS: usize = 11;

// ============================================================================
// SECTION: Format Mode
// ============================================================================

/// Whitespace layout of encoded alerts.
///
/// # Invariants
/// - The mode never affects field presence, order, or value types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FormatMode {
    /// Single line, no inserted whitespace. Canonical machine format.
    Compact,
    /// Multi-line output indented with [`PRETTY_INDENT`].
    #[default]
    Pretty,
}

impl FormatMode {
    /// Maps the `pretty` option flag to a format mode.
    #[must_use]
    pub const fn from_pretty(pretty: bool) -> Self {
        if pretty { Self::Pretty } else { Self::Compact }
    }

    /// Returns true for indented output.
    #[must_use]
    pub const fn is_pretty(self) -> bool {
        matches!(self, Self::Pretty)
    }

    /// Returns a stable label for the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Pretty => "pretty",
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors emitted while encoding an alert.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The JSON writer rejected the document.
    #[error("alert encoding failed: {0}")]
    Serialize(String),
}

// ============================================================================
// SECTION: Field Packing
// ============================================================================

/// Value half of an encoded key/value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FieldValue<'a> {
    /// Unsigned JSON number.
    Unsigned(u64),
    /// JSON string, already repaired to valid UTF-8.
    Text(Cow<'a, str>),
}

impl Serialize for FieldValue<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unsigned(value) => serializer.serialize_u64(*value),
            Self::Text(value) => serializer.serialize_str(value),
        }
    }
}

/// One encoded key/value pair.
pub(crate) type Field<'a> = (&'static str, FieldValue<'a>);

/// Encodes optional upstream text, mapping absence to `""` and invalid UTF-8 to U+FFFD.
fn text(value: Option<&[u8]>) -> FieldValue<'_> {
    FieldValue::Text(value.map_or(Cow::Borrowed(""), String::from_utf8_lossy))
}

/// Flattens a record into its ordered key/value pairs.
pub(crate) fn alert_fields(record: &AlertRecord) -> Vec<Field<'_>> {
    let mut fields = Vec::with_capacity(MAX_ALERT_FIELDS);
    fields.push(("event_id", FieldValue::Unsigned(u64::from(record.event_id))));
    fields.push(("event_reference", FieldValue::Unsigned(u64::from(record.event_reference))));
    fields.push(("ref_time", FieldValue::Unsigned(record.ref_time.seconds)));
    fields.push(("alt_msg", text(record.message.as_deref())));

    if let Some(signature) = &record.signature {
        fields.push(("gid", FieldValue::Unsigned(u64::from(signature.generator_id))));
        fields.push(("sid", FieldValue::Unsigned(u64::from(signature.signature_id))));
        fields.push(("rev", FieldValue::Unsigned(u64::from(signature.revision))));
        fields.push((
            "classification",
            FieldValue::Unsigned(u64::from(signature.classification_id)),
        ));
        fields.push(("priority", FieldValue::Unsigned(u64::from(signature.priority))));
        fields.push(("message", text(signature.message.as_deref())));
        fields.push(("text_rule", text(signature.rule_text.as_deref())));
    }

    fields
}

/// Writes the pairs as one JSON object using the given formatter.
fn write_object<W: Write, F: Formatter>(
    writer: W,
    formatter: F,
    fields: &[Field<'_>],
) -> Result<(), EncodeError> {
    let mut serializer = JsonSerializer::with_formatter(writer, formatter);
    let mut object =
        (&mut serializer).serialize_map(Some(fields.len())).map_err(serialize_error)?;
    for (key, value) in fields {
        object.serialize_entry(key, value).map_err(serialize_error)?;
    }
    object.end().map_err(serialize_error)
}

/// Converts a serializer failure into an [`EncodeError`].
fn serialize_error(err: serde_json::Error) -> EncodeError {
    EncodeError::Serialize(err.to_string())
}

// ============================================================================
// SECTION: Public API
// ============================================================================

/// Writes one alert as a JSON object, without a trailing newline.
///
/// # Errors
///
/// Returns [`EncodeError`] when the underlying writer fails.
pub fn encode_alert_to<W: Write>(
    writer: W,
    record: &AlertRecord,
    mode: FormatMode,
) -> Result<(), EncodeError> {
    let fields = alert_fields(record);
    match mode {
        FormatMode::Compact => write_object(writer, CompactFormatter, &fields),
        FormatMode::Pretty => {
            write_object(writer, PrettyFormatter::with_indent(PRETTY_INDENT), &fields)
        }
    }
}

/// Encodes one alert into a JSON string.
///
/// # Errors
///
/// Returns [`EncodeError`] when serialization fails.
pub fn encode_alert(record: &AlertRecord, mode: FormatMode) -> Result<String, EncodeError> {
    let mut buffer = Vec::with_capacity(256);
    encode_alert_to(&mut buffer, record, mode)?;
    String::from_utf8(buffer).map_err(|err| EncodeError::Serialize(err.to_string()))
}
