//! Reference collections resolved against at display time.
//!
//! Each type is an id + display-name pair served by its own backend. Ids are
//! expected unique within a collection but nothing enforces that; lookups in
//! [`crate::Catalog`] take the first match in collection order.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub category_id: i64,
    pub category_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub brand_id: i64,
    pub brand_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub unit_id: i64,
    pub unit_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_shapes() {
        let categories: Vec<Category> =
            serde_json::from_str(r#"[{"category_id": 1, "category_name": "Beverages"}]"#)
                .expect("categories should deserialize");
        assert_eq!(categories[0].category_name, "Beverages");

        let brands: Vec<Brand> =
            serde_json::from_str(r#"[{"brand_id": 7, "brand_name": "Acme"}]"#)
                .expect("brands should deserialize");
        assert_eq!(brands[0].brand_id, 7);

        let units: Vec<Unit> = serde_json::from_str(r#"[{"unit_id": 3, "unit_name": "Box"}]"#)
            .expect("units should deserialize");
        assert_eq!(units[0].unit_name, "Box");
    }
}
