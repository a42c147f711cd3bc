//! Line writer over any `std::io::Write` sink.

use std::io::{self, Write};
use std::sync::Mutex;

use portside_core::{application::ports::LineWriter, error::ErrorValue, outcome::Outcome};
use tracing::trace;

/// Production writer: one `writeln!` plus flush per line.
///
/// Write and flush failures become `ErrorKind::Io`; a poisoned lock becomes
/// `ErrorKind::Internal`.
#[derive(Debug)]
pub struct StreamWriter<W> {
    sink: Mutex<W>,
}

impl StreamWriter<io::Stdout> {
    /// Writer bound to the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl StreamWriter<io::Stderr> {
    /// Writer bound to the process's standard error.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> StreamWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }

    /// Give back the sink, e.g. to inspect a `Vec<u8>` buffer.
    pub fn into_inner(self) -> Outcome<W> {
        self.sink
            .into_inner()
            .map_err(|_| ErrorValue::internal("writer lock poisoned"))
    }
}

impl<W: Write> LineWriter for StreamWriter<W> {
    fn write_line(&self, text: &str) -> Outcome<()> {
        let mut sink = self
            .sink
            .lock()
            .map_err(|_| ErrorValue::internal("writer lock poisoned"))?;

        writeln!(sink, "{text}")
            .and_then(|()| sink.flush())
            .map_err(|e| ErrorValue::io(format!("Failed to write line: {e}")))?;

        trace!(bytes = text.len() + 1, "Line written");
        Ok(())
    }
}
