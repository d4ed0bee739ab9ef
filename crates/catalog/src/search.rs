//! Case-insensitive product search for the item-creation flow.
//!
//! This narrows the product-selection list only; it never feeds into
//! prioritization.

use crate::catalog::Catalog;
use crate::record::Product;

/// Filter products by a free-text query.
///
/// The query is trimmed; an empty or whitespace-only query returns the full
/// product list. Otherwise a product matches when the needle occurs
/// case-insensitively in its own name or in its resolved category's name.
/// Products with a dangling category reference can still match on their own
/// name.
///
/// Results keep the store's name-ascending selection order.
pub fn search_products<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Product> {
    let needle = query.trim().to_lowercase();
    let mut products = catalog.products_by_name();
    if needle.is_empty() {
        return products;
    }

    products.retain(|product| {
        if product.name.to_lowercase().contains(&needle) {
            return true;
        }
        catalog
            .category(product.category_id)
            .is_some_and(|category| category.name.to_lowercase().contains(&needle))
    });
    products
}
