// crates/alert-json-cli/src/report.rs
// ============================================================================
// Module: CLI Reports
// Description: Text renderings for the params and config commands.
// Purpose: Keep command output deterministic and testable.
// Dependencies: alert-json-config
// ============================================================================

//! ## Overview
//! Plain-text reports printed by the `params` and `config check` commands.

// ============================================================================
// SECTION: Imports
// ============================================================================

use alert_json_config::MODULE_HELP;
use alert_json_config::MODULE_NAME;
use alert_json_config::PARAMETERS;
use alert_json_config::SinkConfig;

// ============================================================================
// SECTION: Reports
// ============================================================================

/// Renders the module description and parameter table, one line each.
#[must_use]
pub fn parameter_lines() -> Vec<String> {
    let mut lines = Vec::with_capacity(PARAMETERS.len() + 1);
    lines.push(format!("{MODULE_NAME}: {MODULE_HELP}"));
    for spec in PARAMETERS {
        lines.push(format!(
            "  {MODULE_NAME}.{} ({}, default {}): {}",
            spec.name,
            spec.kind.as_str(),
            spec.default,
            spec.help
        ));
    }
    lines
}

/// Renders a resolved sink configuration.
#[must_use]
pub fn config_lines(config: &SinkConfig) -> Vec<String> {
    vec![
        "config ok".to_string(),
        format!("  {MODULE_NAME}.path = {}", config.destination),
        format!("  {MODULE_NAME}.pretty = {}", config.pretty),
        format!("  format = {}", config.format_mode().as_str()),
    ]
}
