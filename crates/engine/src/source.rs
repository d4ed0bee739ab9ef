//! Collaborator seams for snapshot loading.
//!
//! The engine never performs IO; the surrounding application implements
//! these traits over its store and hands the engine a consistent snapshot.
//! Mutations (create/edit/delete of items) stay entirely outside: after a
//! mutation the caller re-fetches and re-invokes the engine.

use shelflife_catalog::{Category, Product};
use shelflife_core::{Clock, DomainResult, ShopId};
use shelflife_inventory::InventoryItemRecord;

use crate::snapshot::ShopSnapshot;

/// Supplier of the shop-agnostic catalog.
pub trait CatalogSource {
    fn fetch_categories(&self) -> DomainResult<Vec<Category>>;
    fn fetch_products(&self) -> DomainResult<Vec<Product>>;
}

/// Supplier of one shop's inventory rows.
pub trait InventorySource {
    fn fetch_items(&self, shop_id: ShopId) -> DomainResult<Vec<InventoryItemRecord>>;
}

/// Fetch a consistent snapshot for one shop.
///
/// `today` is read once from the clock here, so everything in the snapshot
/// is judged against the same date for the whole pass.
pub fn load_snapshot<C, I, K>(
    catalog: &C,
    inventory: &I,
    clock: &K,
    shop_id: ShopId,
) -> DomainResult<ShopSnapshot>
where
    C: CatalogSource,
    I: InventorySource,
    K: Clock,
{
    let categories = catalog.fetch_categories()?;
    let products = catalog.fetch_products()?;
    let items = inventory.fetch_items(shop_id)?;
    Ok(ShopSnapshot::new(
        shop_id,
        categories,
        products,
        items,
        clock.today(),
    ))
}

/// In-memory store implementing both source traits.
///
/// Used by tests and demos; a real deployment implements the traits over its
/// backing store instead.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    pub items: Vec<InventoryItemRecord>,
}

impl CatalogSource for InMemoryStore {
    fn fetch_categories(&self) -> DomainResult<Vec<Category>> {
        Ok(self.categories.clone())
    }

    fn fetch_products(&self) -> DomainResult<Vec<Product>> {
        Ok(self.products.clone())
    }
}

impl InventorySource for InMemoryStore {
    fn fetch_items(&self, shop_id: ShopId) -> DomainResult<Vec<InventoryItemRecord>> {
        Ok(self
            .items
            .iter()
            .filter(|item| item.shop_id == shop_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shelflife_core::{CategoryId, FixedClock, InventoryItemId, ProductId};

    #[test]
    fn load_snapshot_scopes_items_to_the_shop() {
        let shop = ShopId::new();
        let other_shop = ShopId::new();
        let category_id = CategoryId::new();
        let product_id = ProductId::new();
        let store = InMemoryStore {
            categories: vec![Category {
                id: category_id,
                name: "Dairy".to_string(),
            }],
            products: vec![Product {
                id: product_id,
                name: "Milk".to_string(),
                category_id,
                image_url: None,
            }],
            items: vec![
                InventoryItemRecord {
                    id: InventoryItemId::new(),
                    shop_id: shop,
                    product_id,
                    expiry_date: "2026-01-20".to_string(),
                },
                InventoryItemRecord {
                    id: InventoryItemId::new(),
                    shop_id: other_shop,
                    product_id,
                    expiry_date: "2026-01-21".to_string(),
                },
            ],
        };
        let clock = FixedClock(NaiveDate::from_ymd_opt(2026, 1, 17).unwrap());

        let snapshot = load_snapshot(&store, &store, &clock, shop).unwrap();
        assert_eq!(snapshot.items().len(), 1);
        assert_eq!(snapshot.items()[0].shop_id, shop);
        assert_eq!(snapshot.today(), clock.0);
    }
}
