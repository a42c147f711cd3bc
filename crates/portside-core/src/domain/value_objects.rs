//! Domain value objects.
//!
//! Pure value types: equality-by-value, no identity, no formatting
//! behaviour. Formatting lives downstream in [`super::greeting`].

use crate::error::ErrorKind;
use crate::outcome::{Outcome, Railway, ok};
use crate::text::BoundedText;

/// Longest name the domain accepts, in characters.
pub const MAX_NAME_LEN: usize = 100;

/// A validated person name: non-empty, single-line, at most [`MAX_NAME_LEN`]
/// characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(BoundedText<MAX_NAME_LEN>);

impl PersonName {
    pub const MAX_LEN: usize = MAX_NAME_LEN;

    /// Validate `raw` into a name.
    ///
    /// Fails with [`ErrorKind::Validation`] when `raw` is empty, longer
    /// than [`MAX_NAME_LEN`] characters, or contains a control character
    /// (newlines included). The text is otherwise kept as given.
    pub fn parse(raw: &str) -> Outcome<Self> {
        ok(raw)
            .ensure(|raw| !raw.is_empty(), ErrorKind::Validation, "Name cannot be empty")
            .ensure(
                |raw| raw.chars().count() <= MAX_NAME_LEN,
                ErrorKind::Validation,
                format!("Name cannot exceed {MAX_NAME_LEN} characters"),
            )
            .ensure(
                |raw| !raw.chars().any(char::is_control),
                ErrorKind::Validation,
                "Name cannot contain control characters",
            )
            .and_then(BoundedText::new)
            .map(Self)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
