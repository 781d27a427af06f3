use crate::error::ValidationError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CATEGORY: &str = "General";

/// A validated product.
///
/// Products are built on demand from user input or from stored records and are
/// never changed afterwards: edits go through the inventory and produce new
/// values. Construction enforces `price >= 0`, `quantity >= 0` and a non-blank
/// SKU.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    name: String,
    sku: String,
    price: f64,
    quantity: i64,
    category: String,
    description: String,
    supplier: String,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        sku: impl Into<String>,
        price: f64,
        quantity: i64,
    ) -> Result<Self, ValidationError> {
        let sku = sku.into();
        validate_price(price)?;
        validate_quantity(quantity)?;
        if sku.trim().is_empty() {
            return Err(ValidationError::EmptySku);
        }

        Ok(Self {
            name: name.into(),
            sku,
            price,
            quantity,
            category: DEFAULT_CATEGORY.to_string(),
            description: String::new(),
            supplier: String::new(),
        })
    }

    /// Rebuild a product from its stored record, re-checking the invariants.
    pub fn from_record(sku: &str, record: &ProductRecord) -> Result<Self, ValidationError> {
        Ok(Self::new(&record.name, sku, record.price, record.quantity)?
            .with_category(&record.category)
            .with_description(&record.description)
            .with_supplier(&record.supplier))
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_supplier(mut self, supplier: impl Into<String>) -> Self {
        self.supplier = supplier.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn supplier(&self) -> &str {
        &self.supplier
    }

    /// The shape this product takes in the backing file.
    pub fn to_record(&self) -> ProductRecord {
        ProductRecord {
            name: self.name.clone(),
            price: self.price,
            quantity: self.quantity,
            category: self.category.clone(),
            description: self.description.clone(),
            supplier: self.supplier.clone(),
        }
    }
}

pub fn validate_price(price: f64) -> Result<(), ValidationError> {
    if !price.is_finite() {
        return Err(ValidationError::InvalidPrice);
    }
    if price < 0.0 {
        return Err(ValidationError::NegativePrice(price));
    }
    Ok(())
}

pub fn validate_quantity(quantity: i64) -> Result<(), ValidationError> {
    if quantity < 0 {
        return Err(ValidationError::NegativeQuantity(quantity));
    }
    Ok(())
}

/// One entry of the backing file, keyed by SKU in [`ProductMap`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub supplier: String,
}

/// SKU → record mapping that keeps insertion order.
///
/// Serialized as a single JSON object whose keys appear in the same order the
/// products were added. Re-inserting an existing SKU replaces the record in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductMap {
    entries: IndexMap<String, ProductRecord>,
}

impl ProductMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, sku: &str) -> bool {
        self.entries.contains_key(sku)
    }

    pub fn get(&self, sku: &str) -> Option<&ProductRecord> {
        self.entries.get(sku)
    }

    pub fn get_mut(&mut self, sku: &str) -> Option<&mut ProductRecord> {
        self.entries.get_mut(sku)
    }

    /// Insert or replace; returns the previous record for `sku`, if any.
    pub fn insert(&mut self, sku: String, record: ProductRecord) -> Option<ProductRecord> {
        self.entries.insert(sku, record)
    }

    /// Remove `sku`, keeping the order of the remaining entries.
    pub fn remove(&mut self, sku: &str) -> Option<ProductRecord> {
        self.entries.shift_remove(sku)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProductRecord)> {
        self.entries.iter().map(|(sku, record)| (sku.as_str(), record))
    }
}
