//! Raw catalog records as supplied by the external store.

use serde::{Deserialize, Serialize};

use shelflife_core::{CategoryId, ProductId};

/// A catalog category (externally owned, read-only here).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// A catalog product (externally owned, read-only here).
///
/// `category_id` is required by the schema but is still cross-checked at
/// snapshot build time; a dangling reference marks the product as orphaned
/// rather than failing the whole catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category_id: CategoryId,
    pub image_url: Option<String>,
}
