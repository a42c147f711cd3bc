//! Railway-oriented composition over `Result`.
//!
//! [`Outcome`] is plain `std::result::Result` with [`ErrorValue`] as the
//! default error type, so `?`, `map`, `and_then` and `is_ok` work as usual.
//! The [`Railway`] extension trait adds the combinators the core composes
//! with: cross-type bind, both-track mapping, gates, context, recovery and
//! side-effect taps.
//!
//! ```text
//!  ok ──map──▶ ok ──and_then──▶ ok ──ensure──▶ ok ──────────▶ Ok(..)
//!                       ╲               ╲
//!  fail ───────────────── fail ────────── fail ─recover─▶ ok/fail
//! ```
//!
//! Failure is absorbing: only `recover`, `fallback`, `tap_error` and
//! `with_context` look at the failure track.
//!
//! ```rust
//! use portside_core::prelude::*;
//!
//! let doubled: Outcome<u32> = ok(21)
//!     .ensure(|n| *n > 0, ErrorKind::Validation, "must be positive")
//!     .map(|n| n * 2);
//! assert_eq!(doubled, Ok(42));
//! ```

use std::fmt;

use crate::error::{ErrorKind, ErrorValue};

/// Result of a fallible core operation.
pub type Outcome<T, E = ErrorValue> = Result<T, E>;

/// Put `value` on the success track.
pub const fn ok<T, E>(value: T) -> Outcome<T, E> {
    Ok(value)
}

/// Put a new [`ErrorValue`] on the failure track.
pub fn fail<T>(kind: ErrorKind, message: impl AsRef<str>) -> Outcome<T> {
    Err(ErrorValue::new(kind, message))
}

/// Put an existing error on the failure track.
pub const fn fail_with<T, E>(error: E) -> Outcome<T, E> {
    Err(error)
}

/// Errors that can carry extra diagnostic context.
pub trait Annotate {
    fn annotate(self, context: &str) -> Self;
}

impl Annotate for ErrorValue {
    fn annotate(self, context: &str) -> Self {
        self.with_context(context)
    }
}

/// Combinators for composing outcomes along two tracks.
pub trait Railway<T, E>: Sized {
    /// `true` on the failure track.
    fn is_error(&self) -> bool;

    /// The success value.
    ///
    /// # Panics
    ///
    /// Panics if called on a failure. That is a programming error, not a
    /// runtime condition.
    fn value(self) -> T
    where
        E: fmt::Debug;

    /// The failure value.
    ///
    /// # Panics
    ///
    /// Panics if called on a success.
    fn error_info(self) -> E
    where
        T: fmt::Debug;

    /// Bind a step whose error type differs from this one.
    ///
    /// On success the result is exactly `step(value)`. On failure `convert`
    /// maps the error into the step's error type and `step` is not run.
    fn and_then_into<U, F>(
        self,
        convert: impl FnOnce(E) -> F,
        step: impl FnOnce(T) -> Result<U, F>,
    ) -> Result<U, F>;

    /// Map both tracks at once.
    fn bimap<U, F>(self, on_ok: impl FnOnce(T) -> U, on_err: impl FnOnce(E) -> F) -> Result<U, F>;

    /// Turn a success into a failure when `predicate` rejects the value.
    fn ensure(
        self,
        predicate: impl FnOnce(&T) -> bool,
        kind: ErrorKind,
        message: impl AsRef<str>,
    ) -> Self
    where
        E: From<ErrorValue>;

    /// Prefix diagnostic context onto a failure; successes pass untouched.
    fn with_context(self, context: impl AsRef<str>) -> Self
    where
        E: Annotate;

    /// Replace any failure with `default`, discarding the error.
    fn fallback(self, default: T) -> Self;

    /// Try an alternative computation from the error.
    fn recover(self, f: impl FnOnce(E) -> Self) -> Self;

    /// Observe the success value without changing the outcome.
    fn tap(self, f: impl FnOnce(&T)) -> Self;

    /// Observe the error without changing the outcome.
    fn tap_error(self, f: impl FnOnce(&E)) -> Self;
}

impl<T, E> Railway<T, E> for Result<T, E> {
    fn is_error(&self) -> bool {
        self.is_err()
    }

    #[track_caller]
    fn value(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Ok(value) => value,
            Err(error) => panic!("value() called on a failed outcome: {error:?}"),
        }
    }

    #[track_caller]
    fn error_info(self) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Ok(value) => panic!("error_info() called on a successful outcome: {value:?}"),
            Err(error) => error,
        }
    }

    fn and_then_into<U, F>(
        self,
        convert: impl FnOnce(E) -> F,
        step: impl FnOnce(T) -> Result<U, F>,
    ) -> Result<U, F> {
        match self {
            Ok(value) => step(value),
            Err(error) => Err(convert(error)),
        }
    }

    fn bimap<U, F>(self, on_ok: impl FnOnce(T) -> U, on_err: impl FnOnce(E) -> F) -> Result<U, F> {
        match self {
            Ok(value) => Ok(on_ok(value)),
            Err(error) => Err(on_err(error)),
        }
    }

    fn ensure(
        self,
        predicate: impl FnOnce(&T) -> bool,
        kind: ErrorKind,
        message: impl AsRef<str>,
    ) -> Self
    where
        E: From<ErrorValue>,
    {
        match self {
            Ok(value) => {
                if predicate(&value) {
                    Ok(value)
                } else {
                    Err(ErrorValue::new(kind, message).into())
                }
            }
            Err(error) => Err(error),
        }
    }

    fn with_context(self, context: impl AsRef<str>) -> Self
    where
        E: Annotate,
    {
        self.map_err(|error| error.annotate(context.as_ref()))
    }

    fn fallback(self, default: T) -> Self {
        Ok(self.unwrap_or(default))
    }

    fn recover(self, f: impl FnOnce(E) -> Self) -> Self {
        self.or_else(f)
    }

    fn tap(self, f: impl FnOnce(&T)) -> Self {
        self.inspect(f)
    }

    fn tap_error(self, f: impl FnOnce(&E)) -> Self {
        self.inspect_err(f)
    }
}
