//! Driving (input) ports - read by the composition root.

use crate::outcome::Outcome;

/// Port for the raw process arguments, program name first.
///
/// Implemented by:
/// - `portside_adapters::EnvArgs` (the real process)
/// - `portside_adapters::FixedArgs` (testing)
/// - any `Fn() -> Outcome<Vec<String>>`
pub trait ArgumentSource {
    /// Fails with a validation error when the arguments cannot be read as
    /// text; they are never rewritten.
    fn read_args(&self) -> Outcome<Vec<String>>;
}

impl<F> ArgumentSource for F
where
    F: Fn() -> Outcome<Vec<String>>,
{
    fn read_args(&self) -> Outcome<Vec<String>> {
        self()
    }
}
