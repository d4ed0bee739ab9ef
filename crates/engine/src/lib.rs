//! `shelflife-engine` — expiry prioritization over immutable snapshots.
//!
//! The engine takes a point-in-time snapshot of a shop's catalog and
//! inventory, classifies every item's urgency, aggregates per category, and
//! returns a display-ready ordering plus a data-quality report. It performs
//! no IO; the surrounding application fetches snapshots through the
//! collaborator traits in [`source`] and re-invokes the engine on every
//! reload.

pub mod aggregate;
pub mod prioritize;
pub mod report;
pub mod snapshot;
pub mod source;
pub mod view;

pub use aggregate::{aggregate_category, resolve_and_classify};
pub use prioritize::prioritize;
pub use report::{DataQualityReport, InvalidDateItem};
pub use snapshot::ShopSnapshot;
pub use source::{CatalogSource, InMemoryStore, InventorySource, load_snapshot};
pub use view::{CategorySection, CategoryStatus, CategoryView, ItemView, PrioritizedInventory};
