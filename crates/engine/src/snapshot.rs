//! Immutable, point-in-time input to the engine.

use chrono::NaiveDate;

use shelflife_catalog::{Catalog, Category, Product};
use shelflife_core::ShopId;
use shelflife_inventory::InventoryItemRecord;

/// One shop's catalog and inventory, captured together with the `today` the
/// whole pass will be judged against.
///
/// The engine never mutates a snapshot, so sharing one across concurrent
/// read-only callers is safe.
#[derive(Debug, Clone)]
pub struct ShopSnapshot {
    shop_id: ShopId,
    catalog: Catalog,
    items: Vec<InventoryItemRecord>,
    today: NaiveDate,
}

impl ShopSnapshot {
    pub fn new(
        shop_id: ShopId,
        categories: Vec<Category>,
        products: Vec<Product>,
        items: Vec<InventoryItemRecord>,
        today: NaiveDate,
    ) -> Self {
        Self {
            shop_id,
            catalog: Catalog::new(categories, products),
            items,
            today,
        }
    }

    pub fn shop_id(&self) -> ShopId {
        self.shop_id
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn items(&self) -> &[InventoryItemRecord] {
        &self.items
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }
}
