//! # Inventory Store
//!
//! [`Inventory`] owns the SKU → record mapping and is the only thing that
//! mutates it. The mapping is loaded once when the inventory is opened and
//! written back in full after every successful mutation.
//!
//! ## Failure reporting
//!
//! - Missing SKUs are reported as `false` / `None`, never as errors.
//! - A failed load leaves the inventory empty and records a
//!   [`load_warning`](Inventory::load_warning).
//! - A failed save makes the mutation return `false`. The in-memory change is
//!   kept, so after a `false` the backing file and the inventory disagree until
//!   the next successful save.
//! - Audit sink failures are logged and swallowed.

use crate::audit::AuditSink;
use crate::error::ValidationError;
use crate::model::{Product, ProductMap, ProductRecord};
use crate::store::DataStore;
use tracing::{debug, error, info, warn};

pub struct Inventory<S: DataStore, A: AuditSink> {
    store: S,
    audit: A,
    products: ProductMap,
    load_warning: Option<String>,
}

impl<S: DataStore, A: AuditSink> Inventory<S, A> {
    pub fn open(store: S, audit: A) -> Self {
        let (products, load_warning) = match store.load() {
            Ok(products) => {
                debug!(
                    location = %store.location(),
                    count = products.len(),
                    "loaded inventory"
                );
                (products, None)
            }
            Err(e) => {
                warn!(location = %store.location(), error = %e, "unreadable inventory, starting empty");
                let warning = format!(
                    "Could not read inventory at {} ({}); starting with an empty inventory",
                    store.location(),
                    e
                );
                (ProductMap::new(), Some(warning))
            }
        };

        Self {
            store,
            audit,
            products,
            load_warning,
        }
    }

    /// Set when the backing data could not be read and the inventory started empty.
    pub fn load_warning(&self) -> Option<&str> {
        self.load_warning.as_deref()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn audit(&self) -> &A {
        &self.audit
    }

    /// Insert a product under a new SKU. Returns `false` if the SKU is taken
    /// (nothing changes) or if the save fails.
    pub fn add_product(&mut self, product: &Product) -> bool {
        if self.products.contains_key(product.sku()) {
            debug!(sku = product.sku(), "duplicate sku, not added");
            return false;
        }
        self.products
            .insert(product.sku().to_string(), product.to_record());
        self.persist()
    }

    pub fn get_product(&self, sku: &str) -> Option<&ProductRecord> {
        self.products.get(sku)
    }

    /// Every stored product, in the order they were added. Stored records that
    /// no longer satisfy the product invariants are skipped.
    pub fn get_all_products(&self) -> Vec<Product> {
        self.products
            .iter()
            .filter_map(|(sku, record)| match Product::from_record(sku, record) {
                Ok(product) => Some(product),
                Err(e) => {
                    warn!(sku, error = %e, "skipping invalid stored product");
                    None
                }
            })
            .collect()
    }

    /// Stored records that [`get_all_products`](Self::get_all_products) skips,
    /// with the reason each one fails validation.
    pub fn invalid_records(&self) -> Vec<(String, ValidationError)> {
        self.products
            .iter()
            .filter_map(|(sku, record)| {
                Product::from_record(sku, record)
                    .err()
                    .map(|e| (sku.to_string(), e))
            })
            .collect()
    }

    /// Overwrite the stored quantity. The value is not range-checked here.
    pub fn update_stock(&mut self, sku: &str, quantity: i64) -> bool {
        match self.products.get_mut(sku) {
            Some(record) => record.quantity = quantity,
            None => return false,
        }
        self.persist()
    }

    /// Remove `sku` and write one audit line for it. The audit line is written
    /// as soon as the record leaves the mapping, before the save is attempted.
    pub fn delete_product(&mut self, sku: &str) -> bool {
        let Some(removed) = self.products.remove(sku) else {
            return false;
        };

        let message = format!("Product deleted - SKU: {}, Name: {}", sku, removed.name);
        info!(sku, name = %removed.name, "product deleted");
        if let Err(e) = self.audit.record(&message) {
            warn!(sku, error = %e, "failed to write audit entry");
        }

        self.persist()
    }

    /// Replace name, category, price and description. Quantity and supplier
    /// are left alone.
    pub fn update_product_details(
        &mut self,
        sku: &str,
        name: &str,
        category: &str,
        price: f64,
        description: &str,
    ) -> bool {
        let Some(record) = self.products.get_mut(sku) else {
            return false;
        };
        record.name = name.to_string();
        record.category = category.to_string();
        record.price = price;
        record.description = description.to_string();
        self.persist()
    }

    fn persist(&mut self) -> bool {
        match self.store.save(&self.products) {
            Ok(()) => true,
            Err(e) => {
                error!(location = %self.store.location(), error = %e, "failed to save inventory");
                false
            }
        }
    }
}
