use serde::{Deserialize, Serialize};

/// A product row as returned by the products service.
///
/// Products reference their category, brand, and unit by id only. The
/// referenced id is not guaranteed to exist in the corresponding collection;
/// display-time resolution falls back to a sentinel name when it does not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: i64,
    pub product_name: String,
    pub price: f64,
    pub stock: i64,
    pub category_id: i64,
    pub brand_id: i64,
    pub unit_id: i64,
    /// Raw status flag from the wire; `"Y"` marks an active product.
    pub status: String,
}

impl Product {
    /// Returns `true` if the product is flagged active (`status == "Y"`).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == "Y"
    }
}
