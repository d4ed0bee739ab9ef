//! `shelflife-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! strongly-typed identifiers, the domain error model, the calendar-date value
//! object, and the clock seam that supplies "today".

pub mod clock;
pub mod date;
pub mod error;
pub mod id;

pub use clock::{Clock, FixedClock, SystemClock};
pub use date::ExpiryDate;
pub use error::{DomainError, DomainResult};
pub use id::{CategoryId, InventoryItemId, ProductId, ShopId};
