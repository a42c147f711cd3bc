//! Infrastructure adapters for Portside.
//!
//! This crate implements the ports defined in `portside-core::application::ports`.
//! It contains all process I/O. Every adapter converts its own faults into
//! `ErrorValue`s before handing control back to the core.

pub mod args;
pub mod writer;

// Re-export commonly used adapters
pub use args::{EnvArgs, FixedArgs};
pub use writer::{FailingWriter, MemoryWriter, StreamWriter};
