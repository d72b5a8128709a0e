//! Configuration library for the RBAC admin dashboard.
//!
//! Values are layered: CLI overrides, then environment (`RBAC_*`, with an
//! optional `.env` file), then a TOML file, then built-in defaults. Loading
//! returns the composed [`Config`] together with non-fatal
//! [`ConfigWarnings`]; guard rails reject settings the dashboard cannot run
//! with.
#![allow(missing_docs)]

pub mod loader;
pub mod models;
pub mod sources;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoadError, ConfigLoader, ConfigOverrides};
pub use models::{ApiConfig, Config, ConfigMetadata, LoggingConfig, StoreConfig};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
