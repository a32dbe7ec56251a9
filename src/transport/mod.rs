//! Transport selection subsystem.
//!
//! # Data Flow
//! ```text
//! client_address (config string)
//!     → selector.rs (pure decision, first match wins)
//!     → TransportKind (HTTP URL, Unix socket path, or named pipe path)
//!     → client::factory (construction, where failures surface)
//! ```
//!
//! # Design Decisions
//! - Selection is pure: no I/O, no existence checks, no error path
//! - OS identity is an explicit parameter so tests never touch globals
//! - Construction failures belong to the factory, not the selector

pub mod selector;

pub use selector::{select, TransportKind, DEFAULT_HTTP_URL};
