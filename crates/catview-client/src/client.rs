//! HTTP client for the four catalog backend services.

use std::time::Duration;

use catview_core::{AppConfig, Brand, Category, Product, Unit};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// HTTP client for the category, brand, unit, and product services.
///
/// One typed fetch per collection. Each fetch is a bare GET with no query
/// parameters, no body, and no auth; the endpoint is expected to return a
/// JSON array of that collection's records. Non-2xx statuses and malformed
/// bodies surface as typed errors. Endpoint URLs come from [`AppConfig`] so
/// tests can point at a mock server.
pub struct CatalogClient {
    client: Client,
    categories_url: String,
    brands_url: String,
    units_url: String,
    products_url: String,
}

impl CatalogClient {
    /// Creates a `CatalogClient` with the configured timeout, `User-Agent`,
    /// and endpoint URLs.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(config: &AppConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            categories_url: config.categories_url.clone(),
            brands_url: config.brands_url.clone(),
            units_url: config.units_url.clone(),
            products_url: config.products_url.clone(),
        })
    }

    /// Fetches the category collection.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network or TLS failure.
    /// - [`ClientError::UnexpectedStatus`] on a non-2xx response.
    /// - [`ClientError::Deserialize`] if the body is not a JSON array of
    ///   categories.
    pub async fn fetch_categories(&self) -> Result<Vec<Category>, ClientError> {
        self.fetch_collection(&self.categories_url, "categories")
            .await
    }

    /// Fetches the brand collection.
    ///
    /// # Errors
    ///
    /// As [`Self::fetch_categories`].
    pub async fn fetch_brands(&self) -> Result<Vec<Brand>, ClientError> {
        self.fetch_collection(&self.brands_url, "brands").await
    }

    /// Fetches the unit collection.
    ///
    /// # Errors
    ///
    /// As [`Self::fetch_categories`].
    pub async fn fetch_units(&self) -> Result<Vec<Unit>, ClientError> {
        self.fetch_collection(&self.units_url, "units").await
    }

    /// Fetches the product collection.
    ///
    /// # Errors
    ///
    /// As [`Self::fetch_categories`].
    pub async fn fetch_products(&self) -> Result<Vec<Product>, ClientError> {
        self.fetch_collection(&self.products_url, "products").await
    }

    /// Sends a GET request, asserts a 2xx status, and parses the body as a
    /// JSON array of `T`.
    async fn fetch_collection<T: DeserializeOwned>(
        &self,
        url: &str,
        collection: &'static str,
    ) -> Result<Vec<T>, ClientError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                url: url.to_owned(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
            context: collection.to_owned(),
            source: e,
        })
    }
}
