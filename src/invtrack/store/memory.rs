use super::DataStore;
use crate::error::{InvError, Result};
use crate::model::ProductMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    products: ProductMap,
    fail_saves: bool,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every save fails, as if the disk were read-only.
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    pub fn with_products(products: ProductMap) -> Self {
        Self {
            products,
            ..Self::default()
        }
    }

    /// What was last successfully saved.
    pub fn saved(&self) -> &ProductMap {
        &self.products
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<ProductMap> {
        Ok(self.products.clone())
    }

    fn save(&mut self, products: &ProductMap) -> Result<()> {
        if self.fail_saves {
            return Err(InvError::Store("in-memory store is read-only".to_string()));
        }
        self.products = products.clone();
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}
