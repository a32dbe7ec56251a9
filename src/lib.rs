//! Ethereum JSON-RPC client wiring and node health probing.
//!
//! # Architecture Overview
//!
//! ```text
//! host configuration (EthConfig)
//!     → transport::selector   address string + OS identity → TransportKind
//!     → client::factory       TransportKind + mode → one client facade
//!     → health::indicator     liveness gate + five-way RPC fan-out
//!     → HealthDocument        Up with details, or Down with an error
//! ```
//!
//! The host builds the components once at startup via [`bootstrap::wire`],
//! keeps the client for the process lifetime, and exposes
//! [`health::HealthIndicator::probe`] as its health endpoint.

// Core subsystems
pub mod client;
pub mod config;
pub mod health;
pub mod numeric;
pub mod transport;

// Cross-cutting concerns
pub mod bootstrap;
pub mod observability;

pub use bootstrap::{host_os, wire, Wiring};
pub use client::{
    AdminClient, AdminRpc, ClientError, ClientMode, EthClient, FailureKind, ProbeRpc, RpcFailure,
    StandardClient,
};
pub use config::EthConfig;
pub use health::{DetailValue, HealthDocument, HealthIndicator, HealthStatus};
pub use transport::{select, TransportKind, DEFAULT_HTTP_URL};
