//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges and URL well-formedness
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Pure function: `EthConfig → Result<(), Vec<ValidationError>>`
//! - Path addresses are not checked for existence; that is the
//!   transport's concern at connect time

use thiserror::Error;

use crate::config::schema::EthConfig;

/// A single semantic violation in a configuration record.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// An `http://`/`https://` address that does not parse as a URL.
    #[error("client_address '{address}' is not a valid URL: {reason}")]
    MalformedUrl { address: String, reason: String },

    /// A configured HTTP timeout of zero seconds.
    #[error("http_timeout_secs must be greater than zero")]
    ZeroTimeout,
}

/// Run all semantic checks on a deserialized configuration.
pub fn validate_config(config: &EthConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let address = &config.client_address;
    if address.starts_with("http://") || address.starts_with("https://") {
        if let Err(err) = address.parse::<url::Url>() {
            errors.push(ValidationError::MalformedUrl {
                address: address.clone(),
                reason: err.to_string(),
            });
        }
    }

    if config.http_timeout_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
