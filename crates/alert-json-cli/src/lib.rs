// crates/alert-json-cli/src/lib.rs
// ============================================================================
// Module: Alert JSON CLI Library
// Description: Alert input decoding and replay support for the CLI host.
// Purpose: Expose testable CLI building blocks.
// Dependencies: alert-json-config, alert-json-core, alert-json-sink, serde_json
// ============================================================================

//! ## Overview
//! The `alert-json` binary stands in for the detection pipeline: it reads
//! alert records as NDJSON, hands each one to a sink, and reports the result.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod input;
pub mod replay;
pub mod report;
