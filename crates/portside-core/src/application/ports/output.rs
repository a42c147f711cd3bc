//! Driven (output) ports - implemented by infrastructure.

use crate::outcome::Outcome;

/// Port for writing one line of text.
///
/// Implemented by:
/// - `portside_adapters::StreamWriter` (stdout, stderr, any `io::Write`)
/// - `portside_adapters::MemoryWriter` (testing)
/// - `portside_adapters::FailingWriter` (testing)
/// - any `Fn(&str) -> Outcome<()>`
///
/// Implementations must report underlying write failures as
/// [`ErrorKind::Io`](crate::error::ErrorKind::Io) and never panic.
pub trait LineWriter {
    fn write_line(&self, text: &str) -> Outcome<()>;
}

impl<F> LineWriter for F
where
    F: Fn(&str) -> Outcome<()>,
{
    fn write_line(&self, text: &str) -> Outcome<()> {
        self(text)
    }
}
