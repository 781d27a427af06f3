use crate::audit::AuditSink;
use crate::commands::view::not_found;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::DataStore;

pub fn run<S: DataStore, A: AuditSink>(inv: &mut Inventory<S, A>, sku: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let Some(record) = inv.get_product(sku).cloned() else {
        result.add_message(not_found(sku));
        return Ok(result);
    };

    if inv.delete_product(sku) {
        result.add_message(CmdMessage::success(format!(
            "Product {} deleted successfully",
            sku
        )));
    } else {
        result.add_message(CmdMessage::error("Failed to delete product"));
    }
    Ok(result.with_record(sku, record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::MemoryAuditLog;
    use crate::commands::fixtures::inventory_with;
    use crate::model::Product;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn deletes_and_returns_removed_record() {
        let mut inv = inventory_with(&["P1", "P2"]);
        let result = run(&mut inv, "P1").unwrap();

        assert_eq!(result.messages[0].content, "Product P1 deleted successfully");
        assert_eq!(result.record.unwrap().record.name, "Product 1");
        assert!(inv.get_product("P1").is_none());
        assert_eq!(inv.audit().lines().len(), 1);
    }

    #[test]
    fn missing_sku_reports_not_found() {
        let mut inv = inventory_with(&["P1"]);
        let result = run(&mut inv, "nope").unwrap();
        assert!(result.has_errors());
        assert!(result.record.is_none());
        assert!(inv.audit().lines().is_empty());
    }

    #[test]
    fn failed_save_reports_error() {
        let mut inv = Inventory::open(InMemoryStore::failing(), MemoryAuditLog::new());
        inv.add_product(&Product::new("Pen", "P1", 1.0, 1).unwrap());

        let result = run(&mut inv, "P1").unwrap();
        assert_eq!(result.messages[0].content, "Failed to delete product");
    }
}
