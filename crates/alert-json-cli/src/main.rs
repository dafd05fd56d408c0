// crates/alert-json-cli/src/main.rs
// ============================================================================
// Module: Alert JSON CLI Entry Point
// Description: Command dispatcher for alert replay and configuration checks.
// Purpose: Host the alert JSON sink outside a detection pipeline.
// Dependencies: clap, alert-json-config, alert-json-sink, thiserror, tracing
// ============================================================================

//! ## Overview
//! The `alert-json` CLI replays NDJSON alert records through the JSON alert
//! sink, lists the sink parameters, and validates configuration files.
//! Diagnostics go to stderr through `tracing`; stdout is reserved for alert
//! output and reports.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use alert_json_cli::replay::replay_alerts;
use alert_json_cli::report::config_lines;
use alert_json_cli::report::parameter_lines;
use alert_json_config::AlertJsonOptions;
use alert_json_config::OptionValue;
use alert_json_config::SinkConfig;
use alert_json_sink::JsonAlertSink;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable holding the diagnostic log filter.
const LOG_ENV_VAR: &str = "ALERT_JSON_LOG";
/// Diagnostic log filter used when [`LOG_ENV_VAR`] is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "warn";
/// Input argument selecting standard input.
const STDIN_INPUT: &str = "-";

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "alert-json", disable_help_subcommand = true)]
struct Cli {
    /// Command to run.
    #[command(subcommand)]
    command: Commands,
}

/// Supported commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay NDJSON alert records through the JSON alert sink.
    Replay(ReplayCommand),
    /// List the alert JSON parameters.
    Params,
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Arguments for `replay`.
#[derive(Args, Debug)]
struct ReplayCommand {
    /// Config file path.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Destination override: stdout, stderr, or a file path.
    #[arg(long, value_name = "PATH")]
    path: Option<String>,
    /// Write single-line JSON instead of indented JSON.
    #[arg(long)]
    compact: bool,
    /// NDJSON alert input file; `-` reads standard input.
    #[arg(long, value_name = "FILE", default_value = STDIN_INPUT)]
    input: String,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Load and validate a config file.
    Check {
        /// Config file path.
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI failure carrying a user-facing message.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Message printed to stderr.
    message: String,
}

impl CliError {
    /// Builds an error from any displayable message.
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result alias for CLI operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Parses arguments and dispatches the selected command.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Replay(command) => command_replay(command),
        Commands::Params => command_params(),
        Commands::Config {
            command: ConfigCommand::Check {
                config,
            },
        } => command_config_check(config.as_deref()),
    }
}

/// Installs the stderr diagnostic subscriber.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

// ============================================================================
// SECTION: Commands
// ============================================================================

/// Executes `replay`.
fn command_replay(command: ReplayCommand) -> CliResult<ExitCode> {
    let mut options = AlertJsonOptions::load(command.config.as_deref())
        .map_err(|err| CliError::new(err.to_string()))?;
    if let Some(path) = command.path {
        options
            .set("path", OptionValue::String(path))
            .map_err(|err| CliError::new(err.to_string()))?;
    }
    if command.compact {
        options
            .set("pretty", OptionValue::Bool(false))
            .map_err(|err| CliError::new(err.to_string()))?;
    }
    let config = options.resolve().map_err(|err| CliError::new(err.to_string()))?;
    let destination = config.destination.clone();
    let mut sink = JsonAlertSink::new(config);

    let outcome = if command.input == STDIN_INPUT {
        replay_alerts(std::io::stdin().lock(), &mut sink)
    } else {
        let file = open_input(Path::new(&command.input))?;
        replay_alerts(BufReader::new(file), &mut sink)
    };
    let summary = outcome.map_err(|err| CliError::new(err.to_string()))?;

    info!(
        written = summary.written,
        skipped = summary.skipped,
        destination = %destination,
        "alert replay complete"
    );
    Ok(ExitCode::SUCCESS)
}

/// Executes `params`.
fn command_params() -> CliResult<ExitCode> {
    for line in parameter_lines() {
        write_stdout_line(&line).map_err(|err| CliError::new(err.to_string()))?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Executes `config check`.
fn command_config_check(path: Option<&Path>) -> CliResult<ExitCode> {
    let config: SinkConfig = AlertJsonOptions::load(path)
        .and_then(|options| options.resolve())
        .map_err(|err| CliError::new(err.to_string()))?;
    for line in config_lines(&config) {
        write_stdout_line(&line).map_err(|err| CliError::new(err.to_string()))?;
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Opens an NDJSON input file.
fn open_input(path: &Path) -> CliResult<File> {
    File::open(path)
        .map_err(|err| CliError::new(format!("failed to open input {}: {err}", path.display())))
}

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    writeln!(&mut std::io::stdout(), "{message}")
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    writeln!(&mut std::io::stderr(), "{message}")
}

/// Reports an error and returns the failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
