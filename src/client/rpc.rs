//! RPC capability traits.
//!
//! # Design Decisions
//! - The probe surface is a trait so the aggregator can be exercised
//!   against a scripted node in tests
//! - Quantity-valued methods return wire form (`0x`-hex); decoding is the
//!   caller's concern and decode failures stay attributable to a method
//! - The admin surface is a separate trait, not a subtype: callers
//!   resolve by capability

use async_trait::async_trait;

use crate::client::error::RpcFailure;

/// The read-only surface the health probe consumes.
#[async_trait]
pub trait ProbeRpc: Send + Sync {
    /// Whether the node is accepting network connections (`net_listening`).
    async fn net_listening(&self) -> Result<bool, RpcFailure>;

    /// Network id (`net_version`).
    async fn net_version(&self) -> Result<String, RpcFailure>;

    /// Client software version (`web3_clientVersion`).
    async fn web3_client_version(&self) -> Result<String, RpcFailure>;

    /// Latest block number as a hex quantity (`eth_blockNumber`).
    async fn eth_block_number(&self) -> Result<String, RpcFailure>;

    /// Ethereum protocol version (`eth_protocolVersion`).
    async fn eth_protocol_version(&self) -> Result<String, RpcFailure>;

    /// Connected peer count as a hex quantity (`net_peerCount`).
    async fn net_peer_count(&self) -> Result<String, RpcFailure>;
}

/// Administrative superset: personal-namespace account management over
/// the same transport.
#[async_trait]
pub trait AdminRpc: ProbeRpc {
    /// Addresses of accounts managed by the node (`personal_listAccounts`).
    async fn personal_list_accounts(&self) -> Result<Vec<String>, RpcFailure>;

    /// Create a new account protected by `passphrase`
    /// (`personal_newAccount`); returns its address.
    async fn personal_new_account(&self, passphrase: &str) -> Result<String, RpcFailure>;

    /// Unlock `account` for `duration_secs` seconds
    /// (`personal_unlockAccount`).
    async fn personal_unlock_account(
        &self,
        account: &str,
        passphrase: &str,
        duration_secs: u64,
    ) -> Result<bool, RpcFailure>;
}
