//! Data-quality reporting for records the engine had to exclude.
//!
//! Exclusions are never fatal and never silent: the engine produces a
//! best-effort result over the resolvable records and hands the rest back
//! here so the caller can log or alert.

use serde::{Deserialize, Serialize};
use serde_json::{Value as JsonValue, json};

use shelflife_core::{InventoryItemId, ProductId};

/// An item excluded because its expiry date could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidDateItem {
    pub item_id: InventoryItemId,
    /// The raw value as the store supplied it, for the caller's alerting.
    pub raw_expiry_date: String,
}

/// Everything excluded from one prioritization pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataQualityReport {
    /// Items with unparseable expiry dates.
    pub invalid_dates: Vec<InvalidDateItem>,
    /// Items whose `product_id` did not resolve through to a category.
    pub orphaned_items: Vec<InventoryItemId>,
    /// Products whose `category_id` did not resolve.
    pub orphaned_products: Vec<ProductId>,
}

impl DataQualityReport {
    pub fn is_clean(&self) -> bool {
        self.invalid_dates.is_empty()
            && self.orphaned_items.is_empty()
            && self.orphaned_products.is_empty()
    }

    /// Compact count summary, suitable as a structured log payload.
    pub fn summary(&self) -> JsonValue {
        json!({
            "invalid_dates": self.invalid_dates.len(),
            "orphaned_items": self.orphaned_items.len(),
            "orphaned_products": self.orphaned_products.len(),
        })
    }
}
