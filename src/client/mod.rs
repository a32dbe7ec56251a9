//! RPC client subsystem.
//!
//! # Data Flow
//! ```text
//! TransportKind (from the selector)
//!     → factory.rs (eager IPC connect, lazy HTTP)
//!     → StandardClient or AdminClient (exactly one per mode)
//!     → health::HealthIndicator (consumes the ProbeRpc surface)
//! ```
//!
//! # Design Decisions
//! - Facades are enum variants, not subtypes: callers resolve the client
//!   by capability and exactly one variant exists per configuration
//! - One transport per client, fixed at construction
//! - Probe failures carry a stable descriptor token plus the method name

pub mod admin;
pub mod error;
pub mod factory;
pub mod rpc;
pub mod standard;

pub use admin::AdminClient;
pub use error::{ClientError, ClientResult, FailureKind, RpcFailure};
pub use factory::{build, ClientMode};
pub use rpc::{AdminRpc, ProbeRpc};
pub use standard::StandardClient;

use async_trait::async_trait;

/// The client facade produced by the factory: exactly one variant per
/// configuration, registered by the host under a single identity.
#[derive(Clone, Debug)]
pub enum EthClient {
    Standard(StandardClient),
    Admin(AdminClient),
}

impl EthClient {
    /// Mode this client was built for.
    pub fn mode(&self) -> ClientMode {
        match self {
            EthClient::Standard(_) => ClientMode::Standard,
            EthClient::Admin(_) => ClientMode::Admin,
        }
    }

    /// The read-only facade, if this client was built in standard mode.
    pub fn as_standard(&self) -> Option<&StandardClient> {
        match self {
            EthClient::Standard(client) => Some(client),
            EthClient::Admin(_) => None,
        }
    }

    /// The administrative facade, if this client was built in admin mode.
    pub fn as_admin(&self) -> Option<&AdminClient> {
        match self {
            EthClient::Standard(_) => None,
            EthClient::Admin(client) => Some(client),
        }
    }
}

#[async_trait]
impl ProbeRpc for EthClient {
    async fn net_listening(&self) -> Result<bool, RpcFailure> {
        match self {
            EthClient::Standard(client) => client.net_listening().await,
            EthClient::Admin(client) => client.net_listening().await,
        }
    }

    async fn net_version(&self) -> Result<String, RpcFailure> {
        match self {
            EthClient::Standard(client) => client.net_version().await,
            EthClient::Admin(client) => client.net_version().await,
        }
    }

    async fn web3_client_version(&self) -> Result<String, RpcFailure> {
        match self {
            EthClient::Standard(client) => client.web3_client_version().await,
            EthClient::Admin(client) => client.web3_client_version().await,
        }
    }

    async fn eth_block_number(&self) -> Result<String, RpcFailure> {
        match self {
            EthClient::Standard(client) => client.eth_block_number().await,
            EthClient::Admin(client) => client.eth_block_number().await,
        }
    }

    async fn eth_protocol_version(&self) -> Result<String, RpcFailure> {
        match self {
            EthClient::Standard(client) => client.eth_protocol_version().await,
            EthClient::Admin(client) => client.eth_protocol_version().await,
        }
    }

    async fn net_peer_count(&self) -> Result<String, RpcFailure> {
        match self {
            EthClient::Standard(client) => client.net_peer_count().await,
            EthClient::Admin(client) => client.net_peer_count().await,
        }
    }
}
