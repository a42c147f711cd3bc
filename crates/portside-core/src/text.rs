//! Capacity-checked text.

use std::fmt;

use crate::error::{ErrorKind, ErrorValue};
use crate::outcome::{Outcome, fail};

/// Owned text holding at most `N` characters.
///
/// The capacity is checked when the value is built and never grows after
/// that. Length is counted in `char`s, not bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoundedText<const N: usize>(String);

impl<const N: usize> BoundedText<N> {
    pub const CAPACITY: usize = N;

    /// Accept `text` if it fits, otherwise fail with [`ErrorKind::Validation`].
    pub fn new(text: impl Into<String>) -> Outcome<Self> {
        let text = text.into();
        let len = text.chars().count();
        if len > N {
            return fail(
                ErrorKind::Validation,
                format!("text of {len} characters exceeds capacity of {N}"),
            );
        }
        Ok(Self(text))
    }

    /// Keep at most the first `N` characters of `text`.
    ///
    /// Only for text the crate builds itself (diagnostics). External input
    /// goes through [`BoundedText::new`].
    pub fn truncated(text: &str) -> Self {
        match text.char_indices().nth(N) {
            Some((end, _)) => Self(text[..end].to_owned()),
            None => Self(text.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const N: usize> AsRef<str> for BoundedText<N> {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<const N: usize> fmt::Display for BoundedText<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<const N: usize> TryFrom<&str> for BoundedText<N> {
    type Error = ErrorValue;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Self::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_text_at_capacity() {
        let text = BoundedText::<5>::new("hello").unwrap();
        assert_eq!(text.as_str(), "hello");
        assert_eq!(text.len(), 5);
    }

    #[test]
    fn rejects_text_over_capacity() {
        let err = BoundedText::<4>::new("hello").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.message(), "text of 5 characters exceeds capacity of 4");
    }

    #[test]
    fn capacity_counts_characters_not_bytes() {
        // 3 chars, 6 bytes
        let text = BoundedText::<3>::new("äöü").unwrap();
        assert_eq!(text.len(), 3);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let text = BoundedText::<2>::truncated("äöü");
        assert_eq!(text.as_str(), "äö");
        assert_eq!(BoundedText::<10>::truncated("short").as_str(), "short");
    }

    #[test]
    fn empty_is_allowed() {
        let text = BoundedText::<3>::try_from("").unwrap();
        assert!(text.is_empty());
    }
}
