use crate::audit::AuditSink;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::DataStore;

pub fn not_found(sku: &str) -> CmdMessage {
    CmdMessage::error(format!("Product with SKU {} not found", sku))
}

pub fn run<S: DataStore, A: AuditSink>(inv: &Inventory<S, A>, sku: &str) -> Result<CmdResult> {
    match inv.get_product(sku) {
        Some(record) => Ok(CmdResult::default().with_record(sku, record.clone())),
        None => {
            let mut result = CmdResult::default();
            result.add_message(not_found(sku));
            Ok(result)
        }
    }
}
