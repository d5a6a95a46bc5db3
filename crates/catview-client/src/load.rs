//! Catalog refresh orchestration.

use catview_core::Catalog;
use chrono::{DateTime, Utc};

use crate::client::CatalogClient;

/// Outcome of one [`load_all`] pass.
#[derive(Debug, Clone)]
pub struct LoadReport {
    failed: Vec<&'static str>,
    pub fetched_at: DateTime<Utc>,
}

impl LoadReport {
    /// Returns `true` if every collection refreshed.
    #[must_use]
    pub fn all_ok(&self) -> bool {
        self.failed.is_empty()
    }

    /// Names of the collections that failed to refresh, in fetch order.
    #[must_use]
    pub fn failed_collections(&self) -> &[&'static str] {
        &self.failed
    }
}

/// Refreshes every collection from its backend service.
///
/// The four fetches run concurrently on one task and are joined individually;
/// a failing endpoint never blocks or aborts the others. Per collection, a
/// successful fetch replaces the previous contents wholesale, while a failure
/// is logged at warn level and the previous contents (empty on first load)
/// are kept. Nothing propagates to the caller; inspect the returned
/// [`LoadReport`] for what refreshed.
///
/// Repeated calls are safe: each collection is last-write-wins.
pub async fn load_all(client: &CatalogClient, catalog: &mut Catalog) -> LoadReport {
    let (categories, brands, units, products) = tokio::join!(
        client.fetch_categories(),
        client.fetch_brands(),
        client.fetch_units(),
        client.fetch_products(),
    );

    let mut failed = Vec::new();

    match categories {
        Ok(rows) => {
            tracing::debug!(collection = "categories", count = rows.len(), "refreshed");
            catalog.replace_categories(rows);
        }
        Err(e) => {
            tracing::warn!(collection = "categories", error = %e, "fetch failed");
            failed.push("categories");
        }
    }

    match brands {
        Ok(rows) => {
            tracing::debug!(collection = "brands", count = rows.len(), "refreshed");
            catalog.replace_brands(rows);
        }
        Err(e) => {
            tracing::warn!(collection = "brands", error = %e, "fetch failed");
            failed.push("brands");
        }
    }

    match units {
        Ok(rows) => {
            tracing::debug!(collection = "units", count = rows.len(), "refreshed");
            catalog.replace_units(rows);
        }
        Err(e) => {
            tracing::warn!(collection = "units", error = %e, "fetch failed");
            failed.push("units");
        }
    }

    match products {
        Ok(rows) => {
            tracing::debug!(collection = "products", count = rows.len(), "refreshed");
            catalog.replace_products(rows);
        }
        Err(e) => {
            tracing::warn!(collection = "products", error = %e, "fetch failed");
            failed.push("products");
        }
    }

    LoadReport {
        failed,
        fetched_at: Utc::now(),
    }
}
