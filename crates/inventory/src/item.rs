//! Inventory item records.

use serde::{Deserialize, Serialize};

use shelflife_core::{DomainResult, ExpiryDate, InventoryItemId, ProductId, ShopId};

/// Raw inventory row as supplied by the external store.
///
/// `expiry_date` is carried as the store's raw string: parse failures must
/// surface as data-quality warnings rather than aborting snapshot ingestion,
/// so the parse happens per item, downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItemRecord {
    pub id: InventoryItemId,
    pub shop_id: ShopId,
    pub product_id: ProductId,
    pub expiry_date: String,
}

impl InventoryItemRecord {
    /// Validate the record into a typed item.
    pub fn parse(&self) -> DomainResult<InventoryItem> {
        Ok(InventoryItem {
            id: self.id,
            shop_id: self.shop_id,
            product_id: self.product_id,
            expiry_date: ExpiryDate::parse(&self.expiry_date)?,
        })
    }
}

/// A validated inventory item.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: InventoryItemId,
    pub shop_id: ShopId,
    pub product_id: ProductId,
    pub expiry_date: ExpiryDate,
}
