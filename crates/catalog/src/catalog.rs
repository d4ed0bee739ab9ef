//! Indexed, immutable catalog snapshot.

use std::collections::HashMap;

use shelflife_core::{CategoryId, ProductId};

use crate::record::{Category, Product};

/// Point-in-time view of the catalog with reference resolution.
///
/// Category input order is preserved: downstream ordering is required to be
/// stable relative to it, so the snapshot keeps the store's order rather
/// than re-sorting.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
    category_index: HashMap<CategoryId, usize>,
    products: HashMap<ProductId, Product>,
    orphaned_products: Vec<ProductId>,
}

impl Catalog {
    /// Build an indexed catalog from raw records.
    ///
    /// Products whose `category_id` does not resolve are kept addressable by
    /// id (their name still matters for search) but are recorded as orphaned
    /// so callers can alert on data quality.
    pub fn new(categories: Vec<Category>, products: Vec<Product>) -> Self {
        let category_index: HashMap<CategoryId, usize> = categories
            .iter()
            .enumerate()
            .map(|(idx, c)| (c.id, idx))
            .collect();

        let mut orphaned_products = Vec::new();
        let mut product_map = HashMap::with_capacity(products.len());
        for product in products {
            if !category_index.contains_key(&product.category_id) {
                orphaned_products.push(product.id);
            }
            product_map.insert(product.id, product);
        }

        Self {
            categories,
            category_index,
            products: product_map,
            orphaned_products,
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.category_index.get(&id).map(|&idx| &self.categories[idx])
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    /// Resolve a product and its category in one step.
    ///
    /// Returns `None` if either hop fails; items pointing at such products
    /// are excluded from grouping, never assigned to a default bucket.
    pub fn resolve(&self, product_id: ProductId) -> Option<(&Product, &Category)> {
        let product = self.products.get(&product_id)?;
        let category = self.category(product.category_id)?;
        Some((product, category))
    }

    /// Like [`Catalog::resolve`], but yields the category's position in the
    /// snapshot order (used for stable grouping downstream).
    pub fn resolve_to_index(&self, product_id: ProductId) -> Option<(&Product, usize)> {
        let product = self.products.get(&product_id)?;
        let idx = *self.category_index.get(&product.category_id)?;
        Some((product, idx))
    }

    /// All products, ordered by name ascending (the store's selection-list
    /// order), with id as a deterministic tie-break.
    pub fn products_by_name(&self) -> Vec<&Product> {
        let mut products: Vec<&Product> = self.products.values().collect();
        products.sort_by(|a, b| {
            (a.name.as_str(), a.id.as_uuid()).cmp(&(b.name.as_str(), b.id.as_uuid()))
        });
        products
    }

    /// Products belonging to one category, ordered by name ascending.
    pub fn products_in_category(&self, category_id: CategoryId) -> Vec<&Product> {
        let mut products: Vec<&Product> = self
            .products
            .values()
            .filter(|p| p.category_id == category_id)
            .collect();
        products.sort_by(|a, b| {
            (a.name.as_str(), a.id.as_uuid()).cmp(&(b.name.as_str(), b.id.as_uuid()))
        });
        products
    }

    /// Products whose `category_id` did not resolve at snapshot build time.
    pub fn orphaned_products(&self) -> &[ProductId] {
        &self.orphaned_products
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str) -> Category {
        Category {
            id: CategoryId::new(),
            name: name.to_string(),
        }
    }

    fn product(name: &str, category_id: CategoryId) -> Product {
        Product {
            id: ProductId::new(),
            name: name.to_string(),
            category_id,
            image_url: None,
        }
    }

    #[test]
    fn resolve_follows_both_hops() {
        let dairy = category("Dairy");
        let milk = product("Milk", dairy.id);
        let milk_id = milk.id;
        let catalog = Catalog::new(vec![dairy.clone()], vec![milk]);

        let (resolved_product, resolved_category) = catalog.resolve(milk_id).unwrap();
        assert_eq!(resolved_product.name, "Milk");
        assert_eq!(resolved_category.id, dairy.id);
    }

    #[test]
    fn resolve_fails_for_unknown_product() {
        let catalog = Catalog::new(vec![category("Dairy")], vec![]);
        assert!(catalog.resolve(ProductId::new()).is_none());
    }

    #[test]
    fn dangling_category_reference_marks_product_orphaned() {
        let dairy = category("Dairy");
        let stray = product("Mystery", CategoryId::new());
        let stray_id = stray.id;
        let catalog = Catalog::new(vec![dairy], vec![stray]);

        assert_eq!(catalog.orphaned_products(), &[stray_id]);
        // Still addressable by id, but not resolvable into a category.
        assert!(catalog.product(stray_id).is_some());
        assert!(catalog.resolve(stray_id).is_none());
    }

    #[test]
    fn products_in_category_sorts_by_name() {
        let dairy = category("Dairy");
        let bakery = category("Bakery");
        let catalog = Catalog::new(
            vec![dairy.clone(), bakery.clone()],
            vec![
                product("Yogurt", dairy.id),
                product("Butter", dairy.id),
                product("Bread", bakery.id),
            ],
        );

        let names: Vec<&str> = catalog
            .products_in_category(dairy.id)
            .into_iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, ["Butter", "Yogurt"]);
    }

    #[test]
    fn categories_keep_input_order() {
        let first = category("Meat");
        let second = category("Bakery");
        let catalog = Catalog::new(vec![first.clone(), second.clone()], vec![]);
        let ids: Vec<CategoryId> = catalog.categories().iter().map(|c| c.id).collect();
        assert_eq!(ids, [first.id, second.id]);
    }
}
