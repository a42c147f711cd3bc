//! Domain layer: validated value objects and what is derived from them.
//!
//! Nothing here performs I/O. Every constructor that can reject input
//! returns an [`Outcome`](crate::outcome::Outcome); once built, a value
//! object always satisfies its invariants.

pub mod greeting;
pub mod value_objects;

pub use greeting::Greeting;
pub use value_objects::{MAX_NAME_LEN, PersonName};
