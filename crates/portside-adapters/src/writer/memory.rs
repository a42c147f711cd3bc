//! In-memory line writer for testing.

use std::sync::{Arc, RwLock};

use portside_core::{application::ports::LineWriter, error::ErrorValue, outcome::Outcome};

/// Records every line it is given.
///
/// Clones share the same buffer, so a test can keep one handle while the
/// use case owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    lines: Arc<RwLock<Vec<String>>>,
}

impl MemoryWriter {
    /// Create a new empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines written so far (testing helper).
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .read()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }
}

impl LineWriter for MemoryWriter {
    fn write_line(&self, text: &str) -> Outcome<()> {
        let mut lines = self
            .lines
            .write()
            .map_err(|_| ErrorValue::internal("memory writer lock poisoned"))?;
        lines.push(text.to_owned());
        Ok(())
    }
}
