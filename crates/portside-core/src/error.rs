//! Error values for Portside Core.
//!
//! Every fallible operation in the core reports failure as an [`ErrorValue`]:
//! a closed [`ErrorKind`] plus a bounded, human-readable message. There is no
//! source chain and no backtrace; the value is cheap to clone and compare.

use std::fmt;

use thiserror::Error;

use crate::text::BoundedText;

/// Maximum number of characters kept in an error message.
pub const MAX_MESSAGE_LEN: usize = 256;

/// Closed classification of every failure the core can report.
///
/// Consumers must match exhaustively; no variant is added at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input fails a domain rule.
    Validation,
    /// Malformed structured input.
    Parse,
    /// A lookup found nothing.
    NotFound,
    /// An adapter's underlying operation failed.
    Io,
    /// Invariant violation or unexpected state.
    Internal,
}

impl ErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Validation,
        Self::Parse,
        Self::NotFound,
        Self::Io,
        Self::Internal,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "ValidationError",
            Self::Parse => "ParseError",
            Self::NotFound => "NotFoundError",
            Self::Io => "IOError",
            Self::Internal => "InternalError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable failure description.
///
/// Two values are equal iff both kind and message match exactly. Messages
/// longer than [`MAX_MESSAGE_LEN`] characters are cut at that length when the
/// value is built; they are diagnostics, not data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("{message}")]
pub struct ErrorValue {
    kind: ErrorKind,
    message: BoundedText<MAX_MESSAGE_LEN>,
}

impl ErrorValue {
    pub fn new(kind: ErrorKind, message: impl AsRef<str>) -> Self {
        Self {
            kind,
            message: BoundedText::truncated(message.as_ref()),
        }
    }

    pub fn validation(message: impl AsRef<str>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    pub fn parse(message: impl AsRef<str>) -> Self {
        Self::new(ErrorKind::Parse, message)
    }

    pub fn not_found(message: impl AsRef<str>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn io(message: impl AsRef<str>) -> Self {
        Self::new(ErrorKind::Io, message)
    }

    pub fn internal(message: impl AsRef<str>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Prefix the message with `context`, keeping the kind.
    ///
    /// The result reads `"{context}: {message}"` and is cut to
    /// [`MAX_MESSAGE_LEN`] characters.
    pub fn with_context(self, context: impl AsRef<str>) -> Self {
        Self::new(
            self.kind,
            format!("{}: {}", context.as_ref(), self.message),
        )
    }
}

/// Adapters report raw I/O faults as [`ErrorKind::Io`].
impl From<std::io::Error> for ErrorValue {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_message() {
        let err = ErrorValue::validation("Name cannot be empty");
        assert_eq!(err.to_string(), "Name cannot be empty");
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn equality_needs_kind_and_message() {
        assert_eq!(ErrorValue::io("disk full"), ErrorValue::io("disk full"));
        assert_ne!(ErrorValue::io("disk full"), ErrorValue::internal("disk full"));
        assert_ne!(ErrorValue::io("disk full"), ErrorValue::io("disk gone"));
    }

    #[test]
    fn long_messages_are_cut_to_capacity() {
        let long = "x".repeat(MAX_MESSAGE_LEN + 40);
        let err = ErrorValue::internal(&long);
        assert_eq!(err.message().chars().count(), MAX_MESSAGE_LEN);
    }

    #[test]
    fn context_prefixes_and_keeps_kind() {
        let err = ErrorValue::io("disk full").with_context("writing greeting");
        assert_eq!(err.kind(), ErrorKind::Io);
        assert_eq!(err.message(), "writing greeting: disk full");
    }

    #[test]
    fn kind_names_follow_taxonomy() {
        let names: Vec<_> = ErrorKind::ALL.iter().map(ErrorKind::as_str).collect();
        assert_eq!(
            names,
            [
                "ValidationError",
                "ParseError",
                "NotFoundError",
                "IOError",
                "InternalError"
            ]
        );
    }

    #[test]
    fn io_errors_convert_to_io_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = ErrorValue::from(io);
        assert_eq!(err.kind(), ErrorKind::Io);
        assert_eq!(err.message(), "pipe closed");
    }
}
