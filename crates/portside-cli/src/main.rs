//! # Portside CLI
//!
//! Composition root and process boundary for the Portside starter.
//!
//! ## Startup sequence
//!
//! 1. Read the process arguments through the `ArgumentSource` port and
//!    parse them (clap handles `--help` / `--version` early-exit).
//! 2. Load configuration (file + env + defaults).
//! 3. Initialise the tracing subscriber (logging).
//! 4. Build the [`OutputManager`].
//! 5. Run the use case bound in [`composition`].
//! 6. Translate the outcome into one line of output and an exit code.
//!
//! `run_with` takes the argument source and the bound use case as
//! parameters, so tests drive the whole sequence with test doubles.
//!
//! ## Exit codes
//!
//! | Code | Meaning |
//! |------|---------|
//! |  0   | Success |
//! |  1   | Failure |

use std::process::ExitCode;

use clap::{Parser, error::ErrorKind as ClapErrorKind};
use portside_adapters::EnvArgs;
use portside_core::application::{
    GreetUseCase,
    ports::{ArgumentSource, LineWriter},
};
use tracing::{debug, instrument};

use crate::{
    cli::{Cli, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod composition;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Load .env before anything else — including tracing init.
    // Silently ignored if .env doesn't exist.
    let _ = dotenvy::dotenv();

    run()
}

/// Run one greeting against the real process and report how it went.
fn run() -> ExitCode {
    run_with(&EnvArgs::new(), &composition::console_greeter())
}

/// Run one greeting with the given argument source and bound use case.
fn run_with<W: LineWriter>(source: &impl ArgumentSource, greeter: &GreetUseCase<W>) -> ExitCode {
    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match parse_args(source) {
        Ok(cli) => cli,
        Err(code) => return code,
    };

    // ── 2. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(cli.global.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            let output = OutputManager::new(&cli.global, &AppConfig::default());
            return handle_error(CliError::from(e), &output);
        }
    };

    // ── 3. Initialise tracing ─────────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);
    if let Err(e) = init_logging(&cli.global, &config) {
        return handle_error(CliError::from(e), &output);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    // ── 4. Dispatch + 5. Error handling ───────────────────────────────────
    conclude(commands::greet::execute(&cli.name, greeter), &output)
}

/// Parse the command line read from `source`.
///
/// `--help` and `--version` are printed here and end the run with 0; any
/// other parse failure, including arguments that are not valid UTF-8, is
/// rendered as a single `Error:` line and ends it with 1.
fn parse_args(source: &impl ArgumentSource) -> Result<Cli, ExitCode> {
    let plain_output = || OutputManager::new(&GlobalArgs::default(), &AppConfig::default());

    let args = source
        .read_args()
        .map_err(|e| handle_error(CliError::from(e), &plain_output()))?;

    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(cli),
        Err(e) if matches!(e.kind(), ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion) => {
            let _ = e.print();
            Err(ExitCode::SUCCESS)
        }
        Err(e) => Err(handle_error(CliError::from_clap(&e), &plain_output())),
    }
}

/// Turn the run's outcome into an exit code, rendering failures.
#[instrument(skip_all)]
fn conclude(outcome: CliResult<()>, output: &OutputManager) -> ExitCode {
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => handle_error(e, output),
    }
}

/// Translate a `CliError` into a user message and an exit code.
///
/// This is the single place where structured errors become human-readable
/// output and OS exit codes.
fn handle_error(err: CliError, output: &OutputManager) -> ExitCode {
    // 1. Emit a structured log event (INFO, hidden by default).
    err.log();

    // 2. Print the one diagnostic line.  If stderr itself is gone there is
    //    nowhere left to report to; the exit code still carries the failure.
    let _ = output.error(&err);

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
