//! In-memory catalog state aggregated from the four backend services.

use crate::lookups::{Brand, Category, Unit};
use crate::products::Product;

const NO_CATEGORY: &str = "no category";
const NO_BRAND: &str = "no brand";
const NO_UNIT: &str = "no unit";

/// Aggregated view over the product, category, brand, and unit collections.
///
/// The entire mutation surface is the four wholesale `replace_*` operations
/// and [`Catalog::set_search_term`]; everything else is a read accessor or a
/// derived value recomputed on demand. Collections are never partially
/// mutated, so a failed refresh simply leaves the previous contents in place.
#[derive(Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
    brands: Vec<Brand>,
    units: Vec<Unit>,
    search_term: String,
}

/// Per-collection record counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogSummary {
    pub products: usize,
    pub categories: usize,
    pub brands: usize,
    pub units: usize,
}

impl Catalog {
    /// Creates an empty catalog with an empty search term.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the product collection wholesale.
    pub fn replace_products(&mut self, rows: Vec<Product>) {
        self.products = rows;
    }

    /// Replaces the category collection wholesale.
    pub fn replace_categories(&mut self, rows: Vec<Category>) {
        self.categories = rows;
    }

    /// Replaces the brand collection wholesale.
    pub fn replace_brands(&mut self, rows: Vec<Brand>) {
        self.brands = rows;
    }

    /// Replaces the unit collection wholesale.
    pub fn replace_units(&mut self, rows: Vec<Unit>) {
        self.units = rows;
    }

    /// Sets the live search term driving [`Catalog::filtered_products`].
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    #[must_use]
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Products whose name contains the search term, case-insensitively.
    ///
    /// An empty term returns the full collection in its original order. The
    /// underlying collection is never mutated; the result borrows from it.
    #[must_use]
    pub fn filtered_products(&self) -> Vec<&Product> {
        if self.search_term.is_empty() {
            return self.products.iter().collect();
        }
        let needle = self.search_term.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.product_name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Resolves a category id to its display name.
    ///
    /// Takes the first entry with a matching id in collection order; returns
    /// `"no category"` when none matches.
    #[must_use]
    pub fn category_name(&self, id: i64) -> &str {
        self.categories
            .iter()
            .find(|c| c.category_id == id)
            .map_or(NO_CATEGORY, |c| c.category_name.as_str())
    }

    /// Resolves a brand id to its display name, or `"no brand"`.
    #[must_use]
    pub fn brand_name(&self, id: i64) -> &str {
        self.brands
            .iter()
            .find(|b| b.brand_id == id)
            .map_or(NO_BRAND, |b| b.brand_name.as_str())
    }

    /// Resolves a unit id to its display name, or `"no unit"`.
    #[must_use]
    pub fn unit_name(&self, id: i64) -> &str {
        self.units
            .iter()
            .find(|u| u.unit_id == id)
            .map_or(NO_UNIT, |u| u.unit_name.as_str())
    }

    /// Record counts for each collection.
    #[must_use]
    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary {
            products: self.products.len(),
            categories: self.categories.len(),
            brands: self.brands.len(),
            units: self.units.len(),
        }
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
