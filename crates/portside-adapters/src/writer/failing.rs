//! Writer that always fails, for exercising the failure track.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use portside_core::{application::ports::LineWriter, error::ErrorValue, outcome::Outcome};

/// Fails every write with a fixed error and counts the attempts.
#[derive(Debug, Clone)]
pub struct FailingWriter {
    error: ErrorValue,
    attempts: Arc<AtomicUsize>,
}

impl FailingWriter {
    pub fn new(error: ErrorValue) -> Self {
        Self {
            error,
            attempts: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// How many writes were attempted.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl LineWriter for FailingWriter {
    fn write_line(&self, _text: &str) -> Outcome<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(self.error.clone())
    }
}
