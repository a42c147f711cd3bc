//! Greet use case - validate a name, render the greeting, write it out.
//!
//! The workflow is one railway:
//! 1. Validate the command into a [`PersonName`] (short-circuits on failure)
//! 2. Derive the [`Greeting`] (cannot fail)
//! 3. Hand the text to the bound [`LineWriter`] and return its outcome as is

use tracing::{debug, instrument};

use crate::{
    application::{GreetCommand, ports::LineWriter},
    domain::{Greeting, PersonName},
    outcome::{Outcome, Railway},
};

/// Greeting use case, bound to one writer at construction.
///
/// Distinct writers give distinct types (`GreetUseCase<StreamWriter<_>>`,
/// `GreetUseCase<MemoryWriter>`, ...); each instance owns its writer and
/// shares nothing with other instances.
#[derive(Debug, Clone)]
pub struct GreetUseCase<W> {
    writer: W,
}

impl<W: LineWriter> GreetUseCase<W> {
    /// Bind the use case to `writer`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use portside_core::prelude::*;
    ///
    /// fn discard(_: &str) -> Outcome<()> {
    ///     Ok(())
    /// }
    ///
    /// let greeter = GreetUseCase::new(discard);
    /// assert!(greeter.greet("Alice").is_ok());
    /// ```
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Greet the person named in `command`.
    ///
    /// Validation failures come back before the writer is touched; writer
    /// failures are returned unchanged.
    #[instrument(skip_all, fields(input_len = command.len()))]
    pub fn execute(&self, command: &GreetCommand) -> Outcome<()> {
        PersonName::parse(command.name())
            .tap(|name| debug!(name_len = name.len(), "Name validated"))
            .map(|name| Greeting::for_name(&name))
            .and_then(|greeting| self.writer.write_line(greeting.as_str()))
            .tap(|_| debug!("Greeting written"))
            .tap_error(|e| debug!(kind = %e.kind(), error = %e, "Greeting failed"))
    }

    /// Intake `raw` as a [`GreetCommand`] and execute it.
    pub fn greet(&self, raw: &str) -> Outcome<()> {
        GreetCommand::new(raw).and_then(|command| self.execute(&command))
    }

    /// The bound writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Unbind the writer, consuming the use case.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::error::{ErrorKind, ErrorValue};

    #[derive(Default)]
    struct Recorder {
        lines: RefCell<Vec<String>>,
    }

    impl LineWriter for Recorder {
        fn write_line(&self, text: &str) -> Outcome<()> {
            self.lines.borrow_mut().push(text.to_owned());
            Ok(())
        }
    }

    #[test]
    fn writes_greeting_for_valid_name() {
        let greeter = GreetUseCase::new(Recorder::default());
        assert_eq!(greeter.greet("Alice"), Ok(()));
        assert_eq!(*greeter.writer().lines.borrow(), ["Hello, Alice!"]);
    }

    #[test]
    fn empty_name_never_reaches_writer() {
        let greeter = GreetUseCase::new(Recorder::default());
        assert_eq!(
            greeter.greet(""),
            Err(ErrorValue::validation("Name cannot be empty"))
        );
        assert!(greeter.writer().lines.borrow().is_empty());
    }

    #[test]
    fn name_between_domain_and_intake_bounds_fails_in_domain() {
        let raw = "n".repeat(150);
        let command = GreetCommand::new(raw).unwrap();

        let greeter = GreetUseCase::new(Recorder::default());
        let err = greeter.execute(&command).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.message(), "Name cannot exceed 100 characters");
        assert!(greeter.writer().lines.borrow().is_empty());
    }

    #[test]
    fn writer_failure_is_returned_unchanged() {
        let greeter = GreetUseCase::new(|_: &str| -> Outcome<()> { Err(ErrorValue::io("disk full")) });
        assert_eq!(greeter.greet("Bob"), Err(ErrorValue::io("disk full")));
    }
}
