use crate::audit::AuditSink;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::DataStore;

pub fn run<S: DataStore, A: AuditSink>(inv: &Inventory<S, A>) -> Result<CmdResult> {
    let products = inv.get_all_products();
    let mut result = CmdResult::default();
    for (sku, reason) in inv.invalid_records() {
        result.add_message(CmdMessage::warning(format!(
            "Skipped stored product {}: {}",
            sku, reason
        )));
    }
    if products.is_empty() {
        result.add_message(CmdMessage::info("No products in inventory."));
    }
    Ok(result.with_products(products))
}
