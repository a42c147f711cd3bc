//! Use case behaviour against stubbed ports.

use mockall::{mock, predicate::eq};
use portside_core::prelude::*;

mock! {
    pub Writer {}

    impl LineWriter for Writer {
        fn write_line(&self, text: &str) -> Outcome<()>;
    }
}

#[test]
fn valid_name_is_written_once() {
    let mut writer = MockWriter::new();
    writer
        .expect_write_line()
        .with(eq("Hello, Alice!"))
        .times(1)
        .returning(|_| Ok(()));

    let greeter = GreetUseCase::new(writer);
    assert_eq!(greeter.greet("Alice"), Ok(()));
}

#[test]
fn empty_name_short_circuits_before_writer() {
    let mut writer = MockWriter::new();
    writer.expect_write_line().never();

    let greeter = GreetUseCase::new(writer);
    let err = greeter.greet("").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.message(), "Name cannot be empty");
}

#[test]
fn intake_accepts_what_the_domain_rejects() {
    // Between the domain bound (100) and the intake bound (256).
    let raw = "q".repeat(150);
    let command = GreetCommand::new(raw.as_str()).expect("fits the intake bound");
    assert_eq!(command.len(), 150);

    let mut writer = MockWriter::new();
    writer.expect_write_line().never();

    let err = GreetUseCase::new(writer).execute(&command).unwrap_err();
    assert_eq!(err, ErrorValue::validation("Name cannot exceed 100 characters"));
}

#[test]
fn over_intake_bound_is_rejected_at_intake() {
    let mut writer = MockWriter::new();
    writer.expect_write_line().never();

    let err = GreetUseCase::new(writer).greet(&"q".repeat(300)).unwrap_err();
    assert_eq!(err, ErrorValue::validation("Input cannot exceed 256 characters"));
}

#[test]
fn writer_failure_surfaces_after_successful_validation() {
    let mut writer = MockWriter::new();
    writer
        .expect_write_line()
        .with(eq("Hello, Bob!"))
        .times(1)
        .returning(|_| fail(ErrorKind::Io, "disk full"));

    let outcome = GreetUseCase::new(writer).greet("Bob");
    assert_eq!(outcome, Err(ErrorValue::io("disk full")));
}

#[test]
fn instances_with_different_writers_are_independent() {
    fn accept(_: &str) -> Outcome<()> {
        Ok(())
    }
    fn refuse(_: &str) -> Outcome<()> {
        fail(ErrorKind::Io, "closed")
    }

    let console = GreetUseCase::new(accept);
    let broken = GreetUseCase::new(refuse);

    assert!(console.greet("Ann").is_ok());
    assert_eq!(broken.greet("Ann"), Err(ErrorValue::io("closed")));
    assert!(console.greet("Ann").is_ok());
}
