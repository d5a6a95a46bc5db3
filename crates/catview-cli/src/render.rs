//! Plain-text rendering of catalog state.

use catview_core::Catalog;

/// Renders the filtered product list, one product per line with resolved
/// category, brand, and unit names.
pub fn product_list(catalog: &Catalog) -> String {
    let products = catalog.filtered_products();
    if products.is_empty() {
        return "no products found\n".to_string();
    }

    let mut out = String::new();
    for product in products {
        out.push_str(&format!(
            "{} | ${:.2} | stock {} | {} | {} | {} | {}\n",
            product.product_name,
            product.price,
            product.stock,
            catalog.category_name(product.category_id),
            catalog.brand_name(product.brand_id),
            catalog.unit_name(product.unit_id),
            if product.is_active() {
                "active"
            } else {
                "inactive"
            },
        ));
    }
    out
}

/// Renders per-collection record counts.
pub fn summary(catalog: &Catalog) -> String {
    let counts = catalog.summary();
    format!(
        "products: {}\ncategories: {}\nbrands: {}\nunits: {}\n",
        counts.products, counts.categories, counts.brands, counts.units
    )
}
