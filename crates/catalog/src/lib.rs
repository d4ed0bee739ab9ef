//! Product/category catalog module.
//!
//! This crate models the shop-agnostic catalog as an immutable snapshot of
//! externally-owned records (the store is the writer; this code only reads),
//! plus the case-insensitive product search used during item creation.

pub mod catalog;
pub mod record;
pub mod search;

pub use catalog::Catalog;
pub use record::{Category, Product};
pub use search::search_products;
