//! Composition root.
//!
//! The one place where concrete adapters are bound to use case templates.
//! Each alias below names a fully resolved operation; swapping an adapter
//! means adding another alias and constructor here, never touching the use
//! case itself.

use std::io::Stdout;

use portside_adapters::StreamWriter;
use portside_core::application::GreetUseCase;

/// Greeting use case writing to the process's stdout.
pub type ConsoleGreeter = GreetUseCase<StreamWriter<Stdout>>;

/// Bind the greeting use case to standard output.
pub fn console_greeter() -> ConsoleGreeter {
    GreetUseCase::new(StreamWriter::stdout())
}
