//! Diagnostic output.
//!
//! The primary output (the greeting) goes through the core's `LineWriter`
//! port.  This manager only renders the single failure line on stderr.

use std::io;

use console::Term;

use crate::cli::GlobalArgs;
use crate::config::AppConfig;
use crate::error::CliError;

/// Renders failures for humans.
pub struct OutputManager {
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// Colour is only used when stderr is a terminal and neither the flag
    /// nor the config turned it off.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let term = Term::stderr();
        Self {
            no_color: args.no_color || config.output.no_color || !term.is_term(),
            term,
        }
    }

    /// Write `Error: <message>` as exactly one line.
    pub fn error(&self, err: &CliError) -> io::Result<()> {
        self.term.write_line(&self.render(err))
    }

    fn render(&self, err: &CliError) -> String {
        if self.no_color {
            err.format_plain()
        } else {
            err.format_colored()
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
