//! Configuration module for Sous
//!
//! Loads `delivery.edn` (or a `.toml` file), validates it field by field,
//! and resolves it with CLI overrides into an immutable [`Context`].

mod context;
mod edn;
mod loader;
mod types;

pub use context::{resolve, Context};
pub use edn::parse_edn;
pub use loader::{load_config, validate};
pub use types::{defaults, CliOverrides, DeliveryConfig};
