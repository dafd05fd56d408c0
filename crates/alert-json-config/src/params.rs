// crates/alert-json-config/src/params.rs
// ============================================================================
// Module: Alert JSON Parameters
// Description: Static table of the options accepted by the alert JSON logger.
// Purpose: Single source of names, types, defaults, and help text.
// Dependencies: std
// ============================================================================

//! ## Overview
//! The parameter table drives option type checking in
//! [`crate::AlertJsonOptions::set`] and the `params` listing of the CLI.

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Module name used as the TOML table and option prefix.
pub const MODULE_NAME: &str = "alert_json";
/// One-line module description.
pub const MODULE_HELP: &str = "output alert events as newline-delimited json";
/// Destination name bound to the process standard output.
pub const STDOUT_NAME: &str = "stdout";
/// Destination name bound to the process standard error.
pub const STDERR_NAME: &str = "stderr";
/// Default destination.
pub const DEFAULT_PATH: &str = STDOUT_NAME;
/// Default formatting flag.
pub const DEFAULT_PRETTY: bool = true;

// ============================================================================
// SECTION: Parameter Types
// ============================================================================

/// Value type accepted by a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    /// Free-form string.
    String,
    /// Boolean flag.
    Bool,
}

impl ParameterKind {
    /// Returns a stable label for the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Bool => "bool",
        }
    }
}

/// Description of one configurable option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterSpec {
    /// Option key.
    pub name: &'static str,
    /// Accepted value type.
    pub kind: ParameterKind,
    /// Default value rendered as text.
    pub default: &'static str,
    /// Help text.
    pub help: &'static str,
}

/// Options accepted by the alert JSON logger.
pub const PARAMETERS: &[ParameterSpec] = &[
    ParameterSpec {
        name: "path",
        kind: ParameterKind::String,
        default: DEFAULT_PATH,
        help: "path of file or socket to write to (or stderr/stdout)",
    },
    ParameterSpec {
        name: "pretty",
        kind: ParameterKind::Bool,
        default: "true",
        help: "output json with indentation",
    },
];

/// Looks up a parameter by key.
#[must_use]
pub fn parameter(name: &str) -> Option<&'static ParameterSpec> {
    PARAMETERS.iter().find(|spec| spec.name == name)
}
