//! Capability ports (traits) for what the core needs from outside.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `portside-adapters` implement
//! these; plain functions and closures with the right signature implement
//! them too, so a port can be bound to a bare `fn`.
//!
//! Ports are consumed through generics only. The use case type names its
//! adapters, so every binding is resolved at compile time.
//!
//! ## Port Types
//!
//! - **Output**: called by the core, implemented by infrastructure
//!   - `LineWriter`: emit one line of text
//!
//! - **Input**: read by the composition root before the core runs
//!   - `ArgumentSource`: raw process arguments

pub mod input;
pub mod output;

pub use input::ArgumentSource;
pub use output::LineWriter;
