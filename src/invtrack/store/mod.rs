//! # Storage Layer
//!
//! The [`DataStore`] trait is the persistence seam for the inventory. A backend
//! only knows how to load and save the *whole* SKU → record mapping; everything
//! else (lookups, duplicate checks, partial updates) happens in memory inside
//! [`crate::inventory::Inventory`].
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, a single JSON document
//!   - Top-level keys are SKUs, values are product records
//!   - Rewritten in full on every save
//!   - A missing file loads as an empty mapping
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can be told to fail every save, to exercise the failure path
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "P1": {
//!     "name": "Widget",
//!     "price": 10.0,
//!     "quantity": 5,
//!     "category": "Tools",
//!     "description": "",
//!     "supplier": ""
//!   }
//! }
//! ```
//!
//! There is no locking: two processes writing the same file race, and the last
//! writer wins.

use crate::error::Result;
use crate::model::ProductMap;

pub mod fs;
pub mod memory;

/// Abstract interface for product storage.
pub trait DataStore {
    /// Read the full mapping. A store with no data yet returns an empty map.
    fn load(&self) -> Result<ProductMap>;

    /// Replace the stored mapping with `products`.
    fn save(&mut self, products: &ProductMap) -> Result<()>;

    /// Human readable location, used in diagnostics.
    fn location(&self) -> String;
}
