//! `portside <NAME>`: greet someone through the bound writer.

use portside_core::{
    application::{GreetCommand, GreetUseCase, ports::LineWriter},
    outcome::Railway,
};
use tracing::{info, instrument};

use crate::error::{CliError, CliResult};

/// Intake `name`, run the greeting use case and lift its outcome into the
/// CLI's error type.
#[instrument(skip_all)]
pub fn execute<W: LineWriter>(name: &str, greeter: &GreetUseCase<W>) -> CliResult<()> {
    GreetCommand::new(name)
        .and_then_into(CliError::from, |command| {
            greeter.execute(&command).map_err(CliError::from)
        })
        .tap(|_| info!("Greeting delivered"))
}
