//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! host binds EthConfig directly, or:
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → EthConfig (validated, immutable)
//!     → bootstrap::wire
//! ```
//!
//! # Design Decisions
//! - Config is immutable once bound; it is consulted exactly once, at
//!   wiring time
//! - All fields have defaults so the empty config is valid
//! - Validation separates syntactic (serde) from semantic checks and
//!   returns all violations, not just the first

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::EthConfig;
pub use validation::{validate_config, ValidationError};
