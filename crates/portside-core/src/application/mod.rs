//! Application layer for Portside.
//!
//! This layer contains:
//! - **Commands**: bounded raw-input carriers handed in by the boundary
//! - **Ports**: capability contracts (traits) the core needs from outside
//! - **Services**: use case templates, generic over their ports
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. All rules live in `crate::domain`.

pub mod command;
pub mod ports;
pub mod services;

pub use command::{GreetCommand, MAX_COMMAND_LEN};
pub use ports::{ArgumentSource, LineWriter};
pub use services::GreetUseCase;
