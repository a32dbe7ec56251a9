//! Administrative client facade.

use alloy::providers::DynProvider;
use async_trait::async_trait;

use crate::client::error::RpcFailure;
use crate::client::rpc::{AdminRpc, ProbeRpc};
use crate::client::standard::StandardClient;

/// Administrative facade: the full read-only surface plus the
/// personal-namespace account methods, over a single shared transport.
#[derive(Clone, Debug)]
pub struct AdminClient {
    inner: StandardClient,
}

impl AdminClient {
    pub(crate) fn new(provider: DynProvider) -> Self {
        Self {
            inner: StandardClient::new(provider),
        }
    }
}

#[async_trait]
impl ProbeRpc for AdminClient {
    async fn net_listening(&self) -> Result<bool, RpcFailure> {
        self.inner.net_listening().await
    }

    async fn net_version(&self) -> Result<String, RpcFailure> {
        self.inner.net_version().await
    }

    async fn web3_client_version(&self) -> Result<String, RpcFailure> {
        self.inner.web3_client_version().await
    }

    async fn eth_block_number(&self) -> Result<String, RpcFailure> {
        self.inner.eth_block_number().await
    }

    async fn eth_protocol_version(&self) -> Result<String, RpcFailure> {
        self.inner.eth_protocol_version().await
    }

    async fn net_peer_count(&self) -> Result<String, RpcFailure> {
        self.inner.net_peer_count().await
    }
}

#[async_trait]
impl AdminRpc for AdminClient {
    async fn personal_list_accounts(&self) -> Result<Vec<String>, RpcFailure> {
        self.inner.request("personal_listAccounts").await
    }

    async fn personal_new_account(&self, passphrase: &str) -> Result<String, RpcFailure> {
        self.inner
            .request_with("personal_newAccount", (passphrase.to_string(),))
            .await
    }

    async fn personal_unlock_account(
        &self,
        account: &str,
        passphrase: &str,
        duration_secs: u64,
    ) -> Result<bool, RpcFailure> {
        self.inner
            .request_with(
                "personal_unlockAccount",
                (account.to_string(), passphrase.to_string(), duration_secs),
            )
            .await
    }
}
