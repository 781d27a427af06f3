use crate::audit::AuditSink;
use crate::commands::view::not_found;
use crate::commands::{CmdMessage, CmdResult, ProductEdit};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::validate_price;
use crate::store::DataStore;

pub fn run<S: DataStore, A: AuditSink>(
    inv: &mut Inventory<S, A>,
    edit: &ProductEdit,
) -> Result<CmdResult> {
    validate_price(edit.price)?;

    let mut result = CmdResult::default();
    if inv.get_product(&edit.sku).is_none() {
        result.add_message(not_found(&edit.sku));
        return Ok(result);
    }

    if inv.update_product_details(
        &edit.sku,
        &edit.name,
        &edit.category,
        edit.price,
        &edit.description,
    ) {
        result.add_message(CmdMessage::success(format!(
            "Product {} updated successfully",
            edit.sku
        )));
    } else {
        result.add_message(CmdMessage::error("Failed to update product"));
    }

    if let Some(record) = inv.get_product(&edit.sku) {
        result = result.with_record(&edit.sku, record.clone());
    }
    Ok(result)
}
