//! Structured logging.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install a fmt subscriber with env-filter support.
///
/// For hosts that have no subscriber of their own. Call at most once,
/// before wiring; level comes from `RUST_LOG` with an `ethprobe=info`
/// fallback.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ethprobe=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
