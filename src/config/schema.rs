//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Node client configuration, bound once by the host at startup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct EthConfig {
    /// Client address. Empty selects the default HTTP endpoint; an
    /// `http://`/`https://` value is used verbatim; anything else is a
    /// filesystem path to a local IPC socket or named pipe.
    pub client_address: String,

    /// Build the administrative client facade instead of the read-only
    /// one. Exactly one of the two is ever produced.
    pub admin_client: bool,

    /// Advisory request timeout for HTTP transports, in seconds. Ignored
    /// for IPC transports.
    pub http_timeout_secs: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_select_standard_client_on_default_endpoint() {
        let config = EthConfig::default();
        assert_eq!(config.client_address, "");
        assert!(!config.admin_client);
        assert_eq!(config.http_timeout_secs, None);
    }

    #[test]
    fn deserializes_from_toml() {
        let config: EthConfig = toml::from_str(
            r#"
            client_address = "https://localhost:12345"
            admin_client = true
            http_timeout_secs = 30
            "#,
        )
        .unwrap();

        assert_eq!(config.client_address, "https://localhost:12345");
        assert!(config.admin_client);
        assert_eq!(config.http_timeout_secs, Some(30));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: EthConfig = toml::from_str(r#"client_address = "/tmp/geth.ipc""#).unwrap();
        assert_eq!(config.client_address, "/tmp/geth.ipc");
        assert!(!config.admin_client);
        assert_eq!(config.http_timeout_secs, None);
    }
}
