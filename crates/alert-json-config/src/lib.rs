// crates/alert-json-config/src/lib.rs
// ============================================================================
// Module: Alert JSON Config Library
// Description: Sink configuration model, option table, and file loading.
// Purpose: Resolve startup options into an immutable sink configuration.
// Dependencies: alert-json-core, serde, thiserror, toml
// ============================================================================

//! ## Overview
//! `alert-json-config` turns the host's key-value options (`path`, `pretty`)
//! into a validated [`SinkConfig`]. Options may be set one key at a time, as
//! a host configuration source would, or loaded from a TOML file.
//!
//! Resolution is fail-closed: an empty destination or a malformed file is a
//! [`ConfigError`] and no partial configuration is produced.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod params;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use params::*;
