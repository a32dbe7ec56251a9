//! Client construction and probe error types.

use alloy::transports::{RpcError as AlloyRpcError, TransportError, TransportErrorKind};
use thiserror::Error;

use crate::numeric::QuantityError;

/// Errors that surface while building a client. Fatal to host startup.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Client address could not be parsed as an HTTP(S) URL.
    #[error("invalid client address '{address}': {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: url::ParseError,
    },

    /// The underlying HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// The IPC transport could not be connected.
    #[error("failed to connect IPC transport at '{path}': {source}")]
    IpcConnect {
        path: String,
        #[source]
        source: TransportError,
    },
}

/// Result alias for client construction.
pub type ClientResult<T> = Result<T, ClientError>;

/// Category of a failed probe call. Each category maps to a stable
/// descriptor token that monitoring rules can match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Transport-level connect/DNS/TLS failure.
    ConnectFailed,
    /// Protocol error, HTTP-level error, or undecodable response.
    RpcFault,
    /// Backend connection severed while the call was in flight.
    Cancelled,
}

impl FailureKind {
    /// Stable descriptor token.
    pub fn token(self) -> &'static str {
        match self {
            FailureKind::ConnectFailed => "connect-failed",
            FailureKind::RpcFault => "rpc-fault",
            FailureKind::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

/// A failed RPC dispatch, attributable to the method that failed.
///
/// Renders as `<token>: <method>: <message>`; the token prefix is stable,
/// the message is transport-produced and opaque.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{kind}: {method}: {message}")]
pub struct RpcFailure {
    pub method: &'static str,
    pub kind: FailureKind,
    pub message: String,
}

impl RpcFailure {
    pub fn new(method: &'static str, kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            method,
            kind,
            message: message.into(),
        }
    }

    /// Classify a transport-layer error from an RPC dispatch.
    pub fn from_transport(method: &'static str, err: TransportError) -> Self {
        let kind = match &err {
            AlloyRpcError::Transport(transport) => match transport {
                TransportErrorKind::BackendGone => FailureKind::Cancelled,
                TransportErrorKind::HttpError(_) => FailureKind::RpcFault,
                _ => FailureKind::ConnectFailed,
            },
            _ => FailureKind::RpcFault,
        };
        Self::new(method, kind, err.to_string())
    }

    /// A response that decoded as a string but not as a hex quantity.
    pub fn from_decode(method: &'static str, err: QuantityError) -> Self {
        Self::new(method, FailureKind::RpcFault, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_starts_with_token() {
        let failure = RpcFailure::new("eth_blockNumber", FailureKind::RpcFault, "boom");
        assert_eq!(failure.to_string(), "rpc-fault: eth_blockNumber: boom");

        let failure = RpcFailure::new(
            "net_listening",
            FailureKind::ConnectFailed,
            "connection refused",
        );
        assert!(failure.to_string().starts_with("connect-failed: "));
    }

    #[test]
    fn decode_failures_are_rpc_faults() {
        let failure = RpcFailure::from_decode(
            "net_peerCount",
            QuantityError::InvalidDigits("0xzz".to_string()),
        );
        assert_eq!(failure.kind, FailureKind::RpcFault);
        assert!(failure.to_string().contains("net_peerCount"));
    }
}
