//! Portside Core - Hexagonal Architecture Implementation
//!
//! This crate provides the error algebra, the domain and the application
//! layer of the Portside starter, following hexagonal (ports and adapters)
//! architecture with every port bound at compile time.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           portside-cli (CLI)            │
//! │  (Composition root: binds adapters)     │
//! └──────────────────┬──────────────────────┘
//!                    │ instantiates
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │      (GreetUseCase<W: LineWriter>)      │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ generic over
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (LineWriter, ArgumentSource)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   portside-adapters (Infrastructure)    │
//! │ (StreamWriter, MemoryWriter, EnvArgs)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │        (PersonName, Greeting)           │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Every layer reports failure through [`outcome::Outcome`] and the
//! [`outcome::Railway`] combinators; nothing in the core panics on a
//! business-rule failure.
//!
//! ## Usage
//!
//! ```rust
//! use portside_core::prelude::*;
//!
//! fn print_line(text: &str) -> Outcome<()> {
//!     println!("{text}");
//!     Ok(())
//! }
//!
//! let greeter = GreetUseCase::new(print_line);
//! let outcome = GreetCommand::new("Alice").and_then(|cmd| greeter.execute(&cmd));
//! assert!(outcome.is_ok());
//! ```

// Error values (kind + bounded message)
pub mod error;

// Result and Option algebra
pub mod outcome;
pub mod presence;

// Capacity-checked text
pub mod text;

// Domain layer (pure logic)
pub mod domain;

// Application layer (orchestration)
pub mod application;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GreetCommand, GreetUseCase,
        ports::{ArgumentSource, LineWriter},
    };
    pub use crate::domain::{Greeting, PersonName};
    pub use crate::error::{ErrorKind, ErrorValue};
    pub use crate::outcome::{Annotate, Outcome, Railway, fail, fail_with, ok};
    pub use crate::presence::{Presence, none, some};
    pub use crate::text::BoundedText;
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
