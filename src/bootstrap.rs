//! Component wiring.
//!
//! # Responsibilities
//! - Instantiate components in dependency order:
//!   selector → factory → aggregator
//! - Surface configuration and construction failures to the host
//!
//! # Design Decisions
//! - Fail fast: any construction error is fatal to startup; nothing
//!   inside a probe ever is
//! - OS identity is injected so tests never mutate process globals;
//!   [`host_os`] supplies the platform value

use std::sync::Arc;
use std::time::Duration;

use crate::client::{factory, ClientError, ClientMode, EthClient};
use crate::config::EthConfig;
use crate::health::HealthIndicator;
use crate::transport::selector;

/// The wired component set a host registers at startup.
///
/// The client lives for the process; the host registers it under a single
/// identity and exposes [`HealthIndicator::probe`] as its health endpoint.
pub struct Wiring {
    pub client: Arc<EthClient>,
    pub health: HealthIndicator<EthClient>,
}

/// Host OS identity as reported by the platform.
pub fn host_os() -> &'static str {
    std::env::consts::OS
}

/// Wire selector → factory → aggregator from a bound configuration.
///
/// # Errors
///
/// Propagates construction failures ([`ClientError`]): malformed HTTP
/// URLs, HTTP client build failures, IPC connect failures.
pub async fn wire(config: &EthConfig, os_name: &str) -> Result<Wiring, ClientError> {
    let transport = selector::select(&config.client_address, os_name);
    let mode = ClientMode::from_admin_flag(config.admin_client);
    let http_timeout = config.http_timeout_secs.map(Duration::from_secs);

    tracing::info!(
        transport = transport.label(),
        mode = ?mode,
        "wiring RPC client"
    );

    let client = Arc::new(factory::build(transport, mode, http_timeout).await?);
    let health = HealthIndicator::new(client.clone());

    Ok(Wiring { client, health })
}
