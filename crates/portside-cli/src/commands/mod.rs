//! Command handlers: translate parsed arguments into use case calls.

pub mod greet;
