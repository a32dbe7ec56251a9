//! Health document model.

use std::collections::BTreeMap;

use alloy::primitives::U256;
use serde::{Serialize, Serializer};

/// Terminal status of a single probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Up,
    Down,
}

/// A single entry in the detail map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailValue {
    Text(String),
    Quantity(U256),
}

impl Serialize for DetailValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DetailValue::Text(text) => serializer.serialize_str(text),
            // Decimal form keeps arbitrary precision without relying on
            // arbitrary-precision JSON numbers.
            DetailValue::Quantity(quantity) => serializer.serialize_str(&quantity.to_string()),
        }
    }
}

impl From<String> for DetailValue {
    fn from(text: String) -> Self {
        DetailValue::Text(text)
    }
}

impl From<&str> for DetailValue {
    fn from(text: &str) -> Self {
        DetailValue::Text(text.to_string())
    }
}

impl From<U256> for DetailValue {
    fn from(quantity: U256) -> Self {
        DetailValue::Quantity(quantity)
    }
}

/// Aggregated result of one probe.
///
/// Up documents carry the five detail keys (`netVersion`, `clientVersion`,
/// `blockNumber`, `protocolVersion`, `netPeerCount`); Down documents carry
/// only `error`, a `<token>: <detail>` descriptor. Short-lived: produced
/// per probe and never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthDocument {
    pub status: HealthStatus,
    pub details: BTreeMap<String, DetailValue>,
}

impl HealthDocument {
    pub fn up(details: BTreeMap<String, DetailValue>) -> Self {
        Self {
            status: HealthStatus::Up,
            details,
        }
    }

    pub fn down(descriptor: impl Into<String>) -> Self {
        let mut details = BTreeMap::new();
        details.insert("error".to_string(), DetailValue::Text(descriptor.into()));
        Self {
            status: HealthStatus::Down,
            details,
        }
    }

    pub fn is_up(&self) -> bool {
        self.status == HealthStatus::Up
    }

    /// The error descriptor of a Down document.
    pub fn error(&self) -> Option<&str> {
        match self.details.get("error") {
            Some(DetailValue::Text(descriptor)) => Some(descriptor),
            _ => None,
        }
    }
}
