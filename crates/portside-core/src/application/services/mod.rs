//! Application services - use case templates.
//!
//! Each service is generic over the ports it needs and is only constructible
//! with every port bound.

pub mod greet_service;

pub use greet_service::GreetUseCase;
