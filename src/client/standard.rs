//! Read-only client facade.

use alloy::providers::{DynProvider, Provider};
use alloy::rpc::json_rpc::{RpcRecv, RpcSend};
use async_trait::async_trait;

use crate::client::error::RpcFailure;
use crate::client::rpc::ProbeRpc;

/// Read-only JSON-RPC client facade over an erased provider.
///
/// Cheap to clone; the transport is fixed at construction and shared by
/// all clones. Safe under concurrent use.
#[derive(Clone)]
pub struct StandardClient {
    provider: DynProvider,
}

impl StandardClient {
    pub(crate) fn new(provider: DynProvider) -> Self {
        Self { provider }
    }

    /// Dispatch a parameterless request.
    pub(crate) async fn request<R: RpcRecv>(&self, method: &'static str) -> Result<R, RpcFailure> {
        self.request_with(method, ()).await
    }

    /// Dispatch a request with positional parameters.
    pub(crate) async fn request_with<P: RpcSend, R: RpcRecv>(
        &self,
        method: &'static str,
        params: P,
    ) -> Result<R, RpcFailure> {
        self.provider
            .raw_request(method.into(), params)
            .await
            .map_err(|err| RpcFailure::from_transport(method, err))
    }
}

impl std::fmt::Debug for StandardClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardClient").finish_non_exhaustive()
    }
}

#[async_trait]
impl ProbeRpc for StandardClient {
    async fn net_listening(&self) -> Result<bool, RpcFailure> {
        self.request("net_listening").await
    }

    async fn net_version(&self) -> Result<String, RpcFailure> {
        self.request("net_version").await
    }

    async fn web3_client_version(&self) -> Result<String, RpcFailure> {
        self.request("web3_clientVersion").await
    }

    async fn eth_block_number(&self) -> Result<String, RpcFailure> {
        self.request("eth_blockNumber").await
    }

    async fn eth_protocol_version(&self) -> Result<String, RpcFailure> {
        self.request("eth_protocolVersion").await
    }

    async fn net_peer_count(&self) -> Result<String, RpcFailure> {
        self.request("net_peerCount").await
    }
}
