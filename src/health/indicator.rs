//! Node health probing.
//!
//! # Responsibilities
//! - Gate on `net_listening` before doing any further work
//! - Fan out the five detail calls concurrently and join them
//! - Materialise every failure into the document; never panic or error
//!
//! # Design Decisions
//! - All five detail calls are awaited; the reported failure is the first
//!   by dispatch order, deterministic regardless of completion order
//! - Hex quantities are decoded here, so a decode failure is attributable
//!   to the method that produced the value
//! - Cancellation is by dropping the probe future; in-flight RPCs are
//!   dropped with it

use std::collections::BTreeMap;
use std::sync::Arc;

use alloy::primitives::U256;

use crate::client::{ProbeRpc, RpcFailure};
use crate::health::document::{DetailValue, HealthDocument};
use crate::numeric;

/// Probes a node and collates the result into a [`HealthDocument`].
///
/// Stateless and reentrant: concurrent probes dispatch independently over
/// the shared client, and nothing is cached between them.
pub struct HealthIndicator<C> {
    client: Arc<C>,
}

impl<C> Clone for HealthIndicator<C> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
        }
    }
}

impl<C: ProbeRpc> HealthIndicator<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Run one probe.
    ///
    /// The liveness gate blocks first: its boolean decides whether the
    /// rest of the work is worth doing. Only after it reports `true` are
    /// the five detail calls dispatched, concurrently.
    pub async fn probe(&self) -> HealthDocument {
        match self.client.net_listening().await {
            Ok(true) => {}
            Ok(false) => {
                tracing::warn!("node reports it is not listening for network connections");
                return HealthDocument::down(
                    "not-listening: node is not accepting network connections",
                );
            }
            Err(failure) => {
                tracing::warn!(error = %failure, "liveness gate failed");
                return HealthDocument::down(failure.to_string());
            }
        }

        let (net_version, client_version, block_number, protocol_version, peer_count) = tokio::join!(
            self.client.net_version(),
            self.client.web3_client_version(),
            self.client.eth_block_number(),
            self.client.eth_protocol_version(),
            self.client.net_peer_count(),
        );

        match collate(
            net_version,
            client_version,
            block_number,
            protocol_version,
            peer_count,
        ) {
            Ok(details) => {
                tracing::debug!("node probe succeeded");
                HealthDocument::up(details)
            }
            Err(failure) => {
                tracing::warn!(method = failure.method, error = %failure, "node probe failed");
                HealthDocument::down(failure.to_string())
            }
        }
    }
}

/// Assemble the detail map, or surface the first failure by dispatch
/// order. All five results are already awaited when this runs.
fn collate(
    net_version: Result<String, RpcFailure>,
    client_version: Result<String, RpcFailure>,
    block_number: Result<String, RpcFailure>,
    protocol_version: Result<String, RpcFailure>,
    peer_count: Result<String, RpcFailure>,
) -> Result<BTreeMap<String, DetailValue>, RpcFailure> {
    let net_version = net_version?;
    let client_version = client_version?;
    let block_number = decode("eth_blockNumber", block_number?)?;
    let protocol_version = protocol_version?;
    let peer_count = decode("net_peerCount", peer_count?)?;

    let mut details = BTreeMap::new();
    details.insert("netVersion".to_string(), DetailValue::Text(net_version));
    details.insert(
        "clientVersion".to_string(),
        DetailValue::Text(client_version),
    );
    details.insert(
        "blockNumber".to_string(),
        DetailValue::Quantity(block_number),
    );
    details.insert(
        "protocolVersion".to_string(),
        DetailValue::Text(protocol_version),
    );
    details.insert("netPeerCount".to_string(), DetailValue::Quantity(peer_count));
    Ok(details)
}

fn decode(method: &'static str, raw: String) -> Result<U256, RpcFailure> {
    numeric::decode_quantity(&raw).map_err(|err| RpcFailure::from_decode(method, err))
}
