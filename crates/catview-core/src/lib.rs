//! Core types and state for the catview catalog aggregator.
//!
//! Holds the record types returned by the four backend services, the
//! in-memory [`Catalog`] with its search filter and id→name resolvers, and
//! env-based application configuration.

pub mod app_config;
pub mod catalog;
pub mod config;
pub mod lookups;
pub mod products;

pub use app_config::AppConfig;
pub use catalog::{Catalog, CatalogSummary};
pub use config::{load_app_config, load_app_config_from_env};
pub use lookups::{Brand, Category, Unit};
pub use products::Product;

use thiserror::Error;

/// Errors raised while loading application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
