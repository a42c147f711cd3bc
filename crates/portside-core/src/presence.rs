//! Optional values where absence is not an error.
//!
//! `Option` already is the one-or-zero container; [`Presence`] only adds the
//! checked accessor and the bridge onto the failure track.

use crate::error::{ErrorKind, ErrorValue};
use crate::outcome::Outcome;

pub const fn some<T>(value: T) -> Option<T> {
    Some(value)
}

pub const fn none<T>() -> Option<T> {
    None
}

pub trait Presence<T>: Sized {
    /// The contained value.
    ///
    /// # Panics
    ///
    /// Panics on `None`; callers must check first.
    fn value(self) -> T;

    /// Lift absence into a failure of the given kind.
    fn ok_or_fail(self, kind: ErrorKind, message: impl AsRef<str>) -> Outcome<T>;
}

impl<T> Presence<T> for Option<T> {
    #[track_caller]
    fn value(self) -> T {
        match self {
            Some(value) => value,
            None => panic!("value() called on an absent option"),
        }
    }

    fn ok_or_fail(self, kind: ErrorKind, message: impl AsRef<str>) -> Outcome<T> {
        self.ok_or_else(|| ErrorValue::new(kind, message))
    }
}
