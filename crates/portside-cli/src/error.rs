//! Error handling for the Portside CLI.
//!
//! Provides structured errors with:
//! - One-line, user-facing messages (`Error: ...`)
//! - A category per error for logging
//! - Exit code mapping (always 1 on failure)

use owo_colors::OwoColorize;
use portside_core::error::{ErrorKind, ErrorValue};
use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Everything that can end a run unsuccessfully.
#[derive(Debug, Error)]
pub enum CliError {
    /// A failure reported by the core or one of its adapters.
    #[error("{0}")]
    Core(#[from] ErrorValue),

    /// The command line could not be parsed.
    #[error("{message}")]
    InvalidArguments { message: String },

    /// A configuration file or variable could not be read.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl CliError {
    /// Build an argument error from clap's rendered message.
    ///
    /// Keeps only the first line, without clap's own `error: ` prefix.
    pub fn from_clap(err: &clap::Error) -> Self {
        let rendered = err.to_string();
        let first = rendered.lines().next().unwrap_or_default();
        Self::InvalidArguments {
            message: first.trim_start_matches("error: ").to_owned(),
        }
    }

    /// Get the error category for logging.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Core(err) => match err.kind() {
                ErrorKind::Validation | ErrorKind::Parse => ErrorCategory::UserError,
                ErrorKind::NotFound => ErrorCategory::NotFound,
                ErrorKind::Io | ErrorKind::Internal => ErrorCategory::Internal,
            },
            Self::InvalidArguments { .. } => ErrorCategory::UserError,
            Self::Config { .. } => ErrorCategory::Configuration,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// The boundary only distinguishes success (0) from failure (1).
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// `Error: <message>` with a red, bold prefix.
    pub fn format_colored(&self) -> String {
        format!("{} {}", "Error:".red().bold(), self)
    }

    /// Plain-text version of [`Self::format_colored`] — no ANSI codes.
    pub fn format_plain(&self) -> String {
        format!("Error: {self}")
    }

    /// Log the error using tracing.
    ///
    /// Logged at INFO and below so that, at the default level, the rendered
    /// `Error:` line stays the only diagnostic on stderr.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::info!("User error: {}", self),
            ErrorCategory::NotFound => tracing::info!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::info!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::info!("Internal error: {}", self),
        }

        if let Some(source) = std::error::Error::source(self) {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        let message = err
            .chain()
            .map(|cause| single_line(&cause.to_string()))
            .collect::<Vec<_>>()
            .join(": ");
        Self::Config {
            message,
            source: Some(err.into()),
        }
    }
}

/// Flatten a multi-line diagnostic into one line, dropping source snippets
/// such as the ones TOML parse errors carry.
fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !is_snippet_line(line))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `1 | [output`, `|` and `|    ^` style lines.
fn is_snippet_line(line: &str) -> bool {
    line.trim_start_matches(|c: char| c.is_ascii_digit())
        .trim_start()
        .starts_with('|')
}
