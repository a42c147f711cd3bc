//! Argument source adapters.

use std::ffi::OsString;

use portside_core::{application::ports::ArgumentSource, error::ErrorValue, outcome::Outcome};

/// Reads the real process arguments.
///
/// Any argument that is not valid UTF-8 fails the read with a validation
/// error; nothing is converted lossily.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvArgs;

impl EnvArgs {
    pub fn new() -> Self {
        Self
    }
}

impl ArgumentSource for EnvArgs {
    fn read_args(&self) -> Outcome<Vec<String>> {
        utf8_args(std::env::args_os())
    }
}

fn utf8_args(args: impl IntoIterator<Item = OsString>) -> Outcome<Vec<String>> {
    args.into_iter()
        .map(|arg| {
            arg.into_string()
                .map_err(|_| ErrorValue::validation("Arguments must be valid UTF-8"))
        })
        .collect()
}

/// A fixed argument list (testing).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedArgs(Vec<String>);

impl FixedArgs {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(args.into_iter().map(Into::into).collect())
    }
}

impl ArgumentSource for FixedArgs {
    fn read_args(&self) -> Outcome<Vec<String>> {
        Ok(self.0.clone())
    }
}
