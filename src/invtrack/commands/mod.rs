//! # Command Layer
//!
//! One module per user-facing command. Each `run` function takes the
//! inventory plus plain Rust arguments and returns a [`CmdResult`].
//!
//! Expected outcomes that the user should simply be told about (unknown SKU,
//! duplicate SKU, a save that did not go through) become [`CmdMessage`]s with
//! an error level. `Err` is reserved for input that fails product validation.

use crate::config::InvConfig;
use crate::model::{Product, ProductRecord};

pub mod add;
pub mod config;
pub mod delete;
pub mod edit;
pub mod list;
pub mod stock;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A stored record together with its SKU.
#[derive(Debug, Clone, PartialEq)]
pub struct SkuRecord {
    pub sku: String,
    pub record: ProductRecord,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub products: Vec<Product>,
    pub record: Option<SkuRecord>,
    pub config: Option<InvConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }

    pub fn with_record(mut self, sku: &str, record: ProductRecord) -> Self {
        self.record = Some(SkuRecord {
            sku: sku.to_string(),
            record,
        });
        self
    }

    pub fn with_config(mut self, config: InvConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// True when any message is at error level.
    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}

/// Fields for a product to be added.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub sku: String,
    pub price: f64,
    pub quantity: i64,
    pub category: Option<String>,
    pub description: Option<String>,
    pub supplier: Option<String>,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, sku: impl Into<String>, price: f64, quantity: i64) -> Self {
        Self {
            name: name.into(),
            sku: sku.into(),
            price,
            quantity,
            category: None,
            description: None,
            supplier: None,
        }
    }
}

/// New values for the editable fields of an existing product.
#[derive(Debug, Clone)]
pub struct ProductEdit {
    pub sku: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub description: String,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::audit::MemoryAuditLog;
    use crate::inventory::Inventory;
    use crate::model::Product;
    use crate::store::memory::InMemoryStore;

    pub type TestInventory = Inventory<InMemoryStore, MemoryAuditLog>;

    pub fn inventory() -> TestInventory {
        Inventory::open(InMemoryStore::new(), MemoryAuditLog::new())
    }

    pub fn inventory_with(skus: &[&str]) -> TestInventory {
        let mut inv = inventory();
        for (i, sku) in skus.iter().enumerate() {
            let product = Product::new(format!("Product {}", i + 1), *sku, 10.0, 5)
                .unwrap()
                .with_category("Stock")
                .with_supplier("Acme");
            assert!(inv.add_product(&product));
        }
        inv
    }
}
