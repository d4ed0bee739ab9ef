//! Derived, display-ready structures returned by the engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shelflife_core::{CategoryId, ExpiryDate, InventoryItemId, ProductId, ShopId};
use shelflife_inventory::ExpiryStatus;

use crate::report::DataQualityReport;

/// Aggregate urgency of a category.
///
/// Expired/today collapse into `Critical` at this level. Declaration order is
/// the display priority: `Ord` sorts critical categories first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryStatus {
    Critical,
    Warning,
    Ok,
}

impl From<ExpiryStatus> for CategoryStatus {
    fn from(status: ExpiryStatus) -> Self {
        match status {
            ExpiryStatus::Expired | ExpiryStatus::Today | ExpiryStatus::Critical => {
                CategoryStatus::Critical
            }
            ExpiryStatus::Warning => CategoryStatus::Warning,
            ExpiryStatus::Ok => CategoryStatus::Ok,
        }
    }
}

/// Per-category aggregate, derived fresh on every prioritization pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryView {
    pub category_id: CategoryId,
    pub name: String,
    pub aggregate_status: CategoryStatus,
    pub item_count: usize,
    /// Minimum expiry among the category's resolved items. `None` only for an
    /// empty category, which never reaches the prioritized output.
    pub earliest_expiry: Option<ExpiryDate>,
    /// UI-advisory: whether the category should start open. Frozen into this
    /// structure at snapshot time; callers must not re-derive it on unrelated
    /// state changes.
    pub expanded: bool,
}

/// One classified inventory item, joined with its resolved product so the
/// display layer needs no second lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemView {
    pub item_id: InventoryItemId,
    pub product_id: ProductId,
    pub product_name: String,
    pub image_url: Option<String>,
    pub expiry_date: ExpiryDate,
    pub status: ExpiryStatus,
}

/// A category with its items in display order (expiry ascending).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySection {
    pub view: CategoryView,
    pub items: Vec<ItemView>,
}

/// The engine's output for one shop snapshot: categories in display order
/// plus everything that had to be excluded along the way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrioritizedInventory {
    pub shop_id: ShopId,
    pub today: NaiveDate,
    pub categories: Vec<CategorySection>,
    pub report: DataQualityReport,
}
