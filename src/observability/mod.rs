//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via `tracing`; every subsystem logs with field
//!   syntax, never formatted strings
//! - Subscriber installation is opt-in: a host with its own subscriber
//!   keeps it, and this crate only emits events

pub mod logging;

pub use logging::init_logging;
