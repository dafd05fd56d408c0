// crates/alert-json-core/tests/common/mod.rs
// ============================================================================
// Module: Common Test Utilities
// Description: Shared fixtures and order-preserving JSON parsing for encoder tests.
// Purpose: Provide reusable alert builders and key-order assertions.
// Dependencies: alert-json-core, serde, serde_json
// ============================================================================

//! ## Overview
//! Provides sample records and an [`OrderedObject`] parser that keeps JSON
//! object keys in document order, which `serde_json::Value` does not.

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

use std::fmt;

use alert_json_core::AlertRecord;
use alert_json_core::EventTime;
use alert_json_core::SignatureInfo;
use serde::Deserialize;
use serde::Deserializer;
use serde::de::MapAccess;
use serde::de::Visitor;
use serde_json::Value;

// ============================================================================
// SECTION: Record Helpers
// ============================================================================

/// Keys of an alert without signature metadata.
pub const BASE_KEYS: [&str; 4] = ["event_id", "event_reference", "ref_time", "alt_msg"];

/// Keys of an alert with signature metadata.
pub const SIGNATURE_KEYS: [&str; 11] = [
    "event_id",
    "event_reference",
    "ref_time",
    "alt_msg",
    "gid",
    "sid",
    "rev",
    "classification",
    "priority",
    "message",
    "text_rule",
];

/// Creates the bare alert used by the documented compact scenario.
pub fn sample_record() -> AlertRecord {
    AlertRecord::new(7, 0, EventTime::from_secs(1_700_000_000))
}

/// Creates the signature used by the documented signature scenario.
pub fn sample_signature() -> SignatureInfo {
    SignatureInfo {
        generator_id: 1,
        signature_id: 2,
        revision: 3,
        classification_id: 4,
        priority: 2,
        message: Some(b"test sig".to_vec()),
        rule_text: Some(b"alert tcp any any".to_vec()),
    }
}

// ============================================================================
// SECTION: Ordered JSON
// ============================================================================

/// JSON object entries in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedObject(pub Vec<(String, Value)>);

impl OrderedObject {
    /// Parses a single JSON object, keeping key order.
    pub fn parse(text: &str) -> Self {
        serde_json::from_str(text).expect("encoded alert should be a JSON object")
    }

    /// Returns the keys in document order.
    pub fn keys(&self) -> Vec<&str> {
        self.0.iter().map(|(key, _)| key.as_str()).collect()
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.iter().find(|(candidate, _)| candidate == key).map(|(_, value)| value)
    }
}

impl<'de> Deserialize<'de> for OrderedObject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        /// Visitor collecting map entries in order.
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = OrderedObject;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<OrderedObject, A::Error> {
                let mut entries = Vec::new();
                while let Some(entry) = map.next_entry::<String, Value>()? {
                    entries.push(entry);
                }
                Ok(OrderedObject(entries))
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}
