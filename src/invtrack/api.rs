//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for UI clients: it dispatches to `commands/*` and hands back a
//! [`CmdResult`] without printing anything.
//!
//! ## Generic Over Storage and Audit
//!
//! `InvApi<S: DataStore, A: AuditSink>`:
//! - Production: `InvApi<FileStore, FileAuditLog>`
//! - Testing: `InvApi<InMemoryStore, MemoryAuditLog>`
//!
//! If the inventory could not be read when it was opened, the first result
//! returned through the facade carries a warning message saying so.

use crate::audit::AuditSink;
use crate::commands;
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::DataStore;
use std::path::{Path, PathBuf};

pub struct InvApi<S: DataStore, A: AuditSink> {
    inventory: Inventory<S, A>,
    config_dir: PathBuf,
    pending_warning: Option<String>,
}

impl<S: DataStore, A: AuditSink> InvApi<S, A> {
    pub fn new(inventory: Inventory<S, A>, config_dir: PathBuf) -> Self {
        let pending_warning = inventory.load_warning().map(str::to_string);
        Self {
            inventory,
            config_dir,
            pending_warning,
        }
    }

    pub fn add_product(&mut self, new: NewProduct) -> Result<CmdResult> {
        let result = commands::add::run(&mut self.inventory, new)?;
        Ok(self.finish(result))
    }

    pub fn list_products(&mut self) -> Result<CmdResult> {
        let result = commands::list::run(&self.inventory)?;
        Ok(self.finish(result))
    }

    pub fn view_product(&mut self, sku: &str) -> Result<CmdResult> {
        let result = commands::view::run(&self.inventory, sku)?;
        Ok(self.finish(result))
    }

    pub fn update_stock(&mut self, sku: &str, quantity: i64) -> Result<CmdResult> {
        let result = commands::stock::run(&mut self.inventory, sku, quantity)?;
        Ok(self.finish(result))
    }

    pub fn delete_product(&mut self, sku: &str) -> Result<CmdResult> {
        let result = commands::delete::run(&mut self.inventory, sku)?;
        Ok(self.finish(result))
    }

    pub fn edit_product(&mut self, edit: &ProductEdit) -> Result<CmdResult> {
        let result = commands::edit::run(&mut self.inventory, edit)?;
        Ok(self.finish(result))
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn inventory(&self) -> &Inventory<S, A> {
        &self.inventory
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    fn finish(&mut self, mut result: CmdResult) -> CmdResult {
        if let Some(warning) = self.pending_warning.take() {
            result.messages.insert(0, CmdMessage::warning(warning));
        }
        result
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, NewProduct, ProductEdit, SkuRecord};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::MemoryAuditLog;
    use crate::store::fs::FileStore;
    use crate::store::memory::InMemoryStore;

    fn api() -> InvApi<InMemoryStore, MemoryAuditLog> {
        let inventory = Inventory::open(InMemoryStore::new(), MemoryAuditLog::new());
        InvApi::new(inventory, PathBuf::from(".invtrack"))
    }

    #[test]
    fn dispatches_add_list_delete() {
        let mut api = api();
        api.add_product(NewProduct::new("Pen", "P1", 1.0, 3)).unwrap();
        api.add_product(NewProduct::new("Ink", "P2", 2.0, 4)).unwrap();
        assert_eq!(api.list_products().unwrap().products.len(), 2);

        let deleted = api.delete_product("P1").unwrap();
        assert!(!deleted.has_errors());
        assert_eq!(api.inventory().len(), 1);
        assert_eq!(api.inventory().audit().lines().len(), 1);
    }

    #[test]
    fn dispatches_stock_and_edit() {
        let mut api = api();
        api.add_product(NewProduct::new("Pen", "P1", 1.0, 3)).unwrap();
        api.update_stock("P1", 30).unwrap();
        api.edit_product(&ProductEdit {
            sku: "P1".into(),
            name: "Fountain Pen".into(),
            category: "Office".into(),
            price: 12.0,
            description: "Refillable".into(),
        })
        .unwrap();

        let shown = api.view_product("P1").unwrap().record.unwrap();
        assert_eq!(shown.record.quantity, 30);
        assert_eq!(shown.record.name, "Fountain Pen");
    }

    #[test]
    fn load_warning_is_reported_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        std::fs::write(&path, "{{{").unwrap();

        let inventory = Inventory::open(FileStore::new(&path), MemoryAuditLog::new());
        let mut api = InvApi::new(inventory, dir.path().join(".invtrack"));

        let first = api.list_products().unwrap();
        assert_eq!(first.messages[0].level, MessageLevel::Warning);
        let second = api.list_products().unwrap();
        assert!(second
            .messages
            .iter()
            .all(|m| m.level != MessageLevel::Warning));
    }
}
