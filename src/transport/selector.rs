//! Client-address to transport mapping.

/// Default HTTP endpoint used when no client address is configured.
pub const DEFAULT_HTTP_URL: &str = "http://localhost:8545";

/// Transport over which JSON-RPC frames reach the node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportKind {
    /// HTTP(S) endpoint.
    Http { url: String },
    /// Unix domain socket path.
    UnixSocket { path: String },
    /// Windows named pipe path.
    WindowsPipe { path: String },
}

impl TransportKind {
    /// Short label for log fields.
    pub fn label(&self) -> &'static str {
        match self {
            TransportKind::Http { .. } => "http",
            TransportKind::UnixSocket { .. } => "unix-socket",
            TransportKind::WindowsPipe { .. } => "windows-pipe",
        }
    }
}

/// Select the transport for a client address. Checked in order, first
/// match wins:
///
/// 1. empty address → HTTP against [`DEFAULT_HTTP_URL`]
/// 2. `http://` or `https://` prefix (case-sensitive) → HTTP against the
///    address verbatim
/// 3. anything else is a filesystem path: a named pipe when `os_name`
///    lower-cased contains `windows`, a Unix socket otherwise
///
/// Constructing a `WindowsPipe` on a non-Windows host is legal but will
/// fail at connect time.
pub fn select(address: &str, os_name: &str) -> TransportKind {
    if address.is_empty() {
        return TransportKind::Http {
            url: DEFAULT_HTTP_URL.to_string(),
        };
    }

    if address.starts_with("http://") || address.starts_with("https://") {
        return TransportKind::Http {
            url: address.to_string(),
        };
    }

    if os_name.to_lowercase().contains("windows") {
        TransportKind::WindowsPipe {
            path: address.to_string(),
        }
    } else {
        TransportKind::UnixSocket {
            path: address.to_string(),
        }
    }
}
