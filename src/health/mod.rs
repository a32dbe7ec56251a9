//! Node health probing subsystem.
//!
//! # Data Flow
//! ```text
//! probe request (from the host's health endpoint)
//!     → indicator.rs: net_listening liveness gate
//!         gate false or error → Down document, no further RPCs
//!         gate true → five concurrent detail calls, joined
//!     → document.rs: Up with five details, or Down with one error entry
//! ```
//!
//! # Design Decisions
//! - No error escapes a probe; every failure lands in `details.error`
//! - Stateless across probes: no caches, no back-off, repeated probes
//!   repeat all work
//! - The caller observes a probe atomically: a complete Up document or a
//!   Down document, never a partial detail map

pub mod document;
pub mod indicator;

pub use document::{DetailValue, HealthDocument, HealthStatus};
pub use indicator::HealthIndicator;
