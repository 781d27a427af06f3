use crate::audit::AuditSink;
use crate::commands::view::not_found;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::validate_quantity;
use crate::store::DataStore;

pub fn run<S: DataStore, A: AuditSink>(
    inv: &mut Inventory<S, A>,
    sku: &str,
    quantity: i64,
) -> Result<CmdResult> {
    validate_quantity(quantity)?;

    let mut result = CmdResult::default();
    if inv.get_product(sku).is_none() {
        result.add_message(not_found(sku));
    } else if inv.update_stock(sku, quantity) {
        result.add_message(CmdMessage::success(format!(
            "Stock for {} updated to {}",
            sku, quantity
        )));
    } else {
        result.add_message(CmdMessage::error(format!(
            "Failed to save stock change for {}",
            sku
        )));
    }
    Ok(result)
}
