//! HTTP fetch layer for the catview catalog aggregator.
//!
//! [`CatalogClient`] wraps `reqwest` with one typed fetch per backend
//! collection; [`load_all`] runs all four fetches concurrently and applies
//! whatever succeeded to a [`catview_core::Catalog`], leaving failed
//! collections untouched.

pub mod client;
pub mod error;
pub mod load;

pub use client::CatalogClient;
pub use error::ClientError;
pub use load::{load_all, LoadReport};
