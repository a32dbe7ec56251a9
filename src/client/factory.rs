//! Client construction.
//!
//! # Responsibilities
//! - Build the transport chosen by the selector
//! - Produce exactly one client facade per mode
//!
//! # Design Decisions
//! - HTTP transports are lazy: no connection attempt at startup, so an
//!   unreachable node surfaces through the probe, not here
//! - IPC transports connect eagerly; failure here is fatal at startup
//! - The advisory HTTP timeout is applied to the underlying reqwest client

use std::time::Duration;

use alloy::providers::{IpcConnect, Provider, ProviderBuilder};
use alloy::rpc::client::RpcClient;
use alloy::transports::http::Http;
use url::Url;

use crate::client::admin::AdminClient;
use crate::client::error::{ClientError, ClientResult};
use crate::client::standard::StandardClient;
use crate::client::EthClient;
use crate::transport::TransportKind;

/// Which facade the factory produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientMode {
    /// Read-only / general RPC surface.
    Standard,
    /// Extended administrative surface, a strict superset.
    Admin,
}

impl ClientMode {
    /// Map the `admin_client` configuration flag to a mode.
    pub fn from_admin_flag(admin: bool) -> Self {
        if admin {
            ClientMode::Admin
        } else {
            ClientMode::Standard
        }
    }
}

/// Build exactly one client facade over the given transport.
///
/// `http_timeout` is advisory and only consulted for HTTP transports.
///
/// # Errors
///
/// Malformed HTTP URLs, HTTP client build failures, and IPC connect
/// failures all surface here, before any probe runs.
pub async fn build(
    transport: TransportKind,
    mode: ClientMode,
    http_timeout: Option<Duration>,
) -> ClientResult<EthClient> {
    let label = transport.label();
    let provider = match &transport {
        TransportKind::Http { url } => {
            let parsed: Url = url.parse().map_err(|source| ClientError::InvalidAddress {
                address: url.clone(),
                source,
            })?;

            let mut builder = reqwest::Client::builder();
            if let Some(timeout) = http_timeout {
                builder = builder.timeout(timeout);
            }
            let http = Http::with_client(builder.build()?, parsed.clone());

            let is_local = matches!(
                parsed.host_str(),
                Some("localhost" | "127.0.0.1" | "[::1]")
            );
            ProviderBuilder::new()
                .connect_client(RpcClient::new(http, is_local))
                .erased()
        }
        TransportKind::UnixSocket { path } | TransportKind::WindowsPipe { path } => {
            let ipc = IpcConnect::new(path.clone());
            ProviderBuilder::new()
                .connect_ipc(ipc)
                .await
                .map_err(|source| ClientError::IpcConnect {
                    path: path.clone(),
                    source,
                })?
                .erased()
        }
    };

    tracing::info!(transport = label, mode = ?mode, "RPC client initialized");

    Ok(match mode {
        ClientMode::Admin => EthClient::Admin(AdminClient::new(provider)),
        ClientMode::Standard => EthClient::Standard(StandardClient::new(provider)),
    })
}
