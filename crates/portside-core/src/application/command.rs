//! Input DTOs.
//!
//! A command bounds raw input at intake. Its bound is deliberately wider
//! than the domain's, so the domain rule can tighten without touching the
//! intake capacity: text that fits here may still fail domain validation.

use crate::error::ErrorValue;
use crate::outcome::{Outcome, Railway};
use crate::text::BoundedText;

/// Largest raw input accepted at intake, in characters.
pub const MAX_COMMAND_LEN: usize = 256;

/// Raw request to greet someone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetCommand {
    name: BoundedText<MAX_COMMAND_LEN>,
}

impl GreetCommand {
    pub const MAX_LEN: usize = MAX_COMMAND_LEN;

    /// Accept raw input, rejecting anything over [`MAX_COMMAND_LEN`].
    ///
    /// Over-long input is refused with a validation error, never truncated.
    pub fn new(raw: impl Into<String>) -> Outcome<Self> {
        BoundedText::new(raw).bimap(
            |name| Self { name },
            |_| ErrorValue::validation(format!("Input cannot exceed {MAX_COMMAND_LEN} characters")),
        )
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Length of the raw input in characters.
    pub fn len(&self) -> usize {
        self.name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn keeps_raw_text() {
        let cmd = GreetCommand::new("Alice").unwrap();
        assert_eq!(cmd.name(), "Alice");
        assert_eq!(cmd.len(), 5);
    }

    #[test]
    fn empty_input_is_accepted_at_intake() {
        assert!(GreetCommand::new("").unwrap().is_empty());
    }

    #[test]
    fn rejects_input_over_intake_bound() {
        let err = GreetCommand::new("x".repeat(MAX_COMMAND_LEN + 1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.message(), "Input cannot exceed 256 characters");
    }

    #[test]
    fn accepts_input_at_intake_bound() {
        let cmd = GreetCommand::new("x".repeat(MAX_COMMAND_LEN)).unwrap();
        assert_eq!(cmd.len(), MAX_COMMAND_LEN);
    }
}
