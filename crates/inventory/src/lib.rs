//! Inventory domain module.
//!
//! This crate contains the per-item business rules: the raw inventory record
//! as the store supplies it, and the expiry classifier that maps a single
//! expiry date to an urgency status. Pure, deterministic domain logic (no IO,
//! no HTTP, no storage).

pub mod item;
pub mod status;

pub use item::{InventoryItem, InventoryItemRecord};
pub use status::{CRITICAL_WINDOW_DAYS, ExpiryStatus, WARNING_WINDOW_DAYS};
