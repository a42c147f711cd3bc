//! Tracing subscriber initialisation.
//!
//! Only the CLI crate is allowed to call [`init_logging`]; `portside-core`
//! and `portside-adapters` only *emit* spans and events.
//!
//! # Verbosity mapping
//!
//! | Flag(s)  | Filter level              |
//! |----------|---------------------------|
//! | (none)   | `logging.level`, or WARN  |
//! | `-v`     | INFO                      |
//! | `-vv`    | DEBUG                     |
//! | `-vvv`   | TRACE                     |
//! | `--quiet`| ERROR                     |
//!
//! `RUST_LOG` overrides all of the above if set.  Logs go to stderr, so
//! stdout carries nothing but the primary output.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;
use crate::config::AppConfig;

/// Initialise the global tracing subscriber.
///
/// Call before any tracing macros fire. Once a global subscriber is
/// installed, further calls leave it in place.
pub fn init_logging(args: &GlobalArgs, config: &AppConfig) -> anyhow::Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let level = derive_level(args, config);

    // RUST_LOG wins; otherwise every workspace crate gets the same level.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "portside={level},portside_core={level},portside_adapters={level}",
        ))
    });

    let use_ansi = !args.no_color && !config.output.no_color && std::io::stderr().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

/// Translate the verbosity counter, quiet flag and configured level.
fn derive_level<'a>(args: &GlobalArgs, config: &'a AppConfig) -> &'a str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => config.logging.level.as_deref().unwrap_or("warn"),
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
