use crate::audit::AuditSink;
use crate::commands::{CmdMessage, CmdResult, NewProduct};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::Product;
use crate::store::DataStore;

pub fn run<S: DataStore, A: AuditSink>(
    inv: &mut Inventory<S, A>,
    new: NewProduct,
) -> Result<CmdResult> {
    let mut product = Product::new(new.name, new.sku, new.price, new.quantity)?;
    if let Some(category) = new.category {
        product = product.with_category(category);
    }
    if let Some(description) = new.description {
        product = product.with_description(description);
    }
    if let Some(supplier) = new.supplier {
        product = product.with_supplier(supplier);
    }

    let mut result = CmdResult::default();
    let already_exists = inv.get_product(product.sku()).is_some();
    if inv.add_product(&product) {
        result.add_message(CmdMessage::success(format!(
            "Product '{}' added successfully.",
            product.name()
        )));
        result.products.push(product);
    } else if already_exists {
        result.add_message(CmdMessage::error(format!(
            "Failed to add product. SKU '{}' might already exist.",
            product.sku()
        )));
    } else {
        result.add_message(CmdMessage::error(format!(
            "Failed to save product '{}'.",
            product.name()
        )));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::NullAuditLog;
    use crate::commands::fixtures::{inventory, inventory_with};
    use crate::commands::MessageLevel;
    use crate::error::InvError;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn adds_with_defaults() {
        let mut inv = inventory();
        let result = run(&mut inv, NewProduct::new("Pen", "PEN-1", 1.5, 100)).unwrap();

        assert!(!result.has_errors());
        assert_eq!(result.messages[0].content, "Product 'Pen' added successfully.");
        let record = inv.get_product("PEN-1").unwrap();
        assert_eq!(record.category, "General");
        assert_eq!(record.supplier, "");
    }

    #[test]
    fn adds_optional_fields() {
        let mut inv = inventory();
        let mut new = NewProduct::new("Pen", "PEN-1", 1.5, 100);
        new.category = Some("Office".into());
        new.description = Some("Blue ink".into());
        new.supplier = Some("Bic".into());
        run(&mut inv, new).unwrap();

        let record = inv.get_product("PEN-1").unwrap();
        assert_eq!(record.category, "Office");
        assert_eq!(record.description, "Blue ink");
        assert_eq!(record.supplier, "Bic");
    }

    #[test]
    fn duplicate_sku_reports_error() {
        let mut inv = inventory_with(&["P1"]);
        let result = run(&mut inv, NewProduct::new("Other", "P1", 1.0, 1)).unwrap();

        assert!(result.has_errors());
        assert!(result.messages[0].content.contains("might already exist"));
        assert_eq!(inv.get_product("P1").unwrap().name, "Product 1");
    }

    #[test]
    fn failed_save_reports_error() {
        let mut inv = Inventory::open(InMemoryStore::failing(), NullAuditLog);
        let result = run(&mut inv, NewProduct::new("Pen", "P1", 1.0, 1)).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert_eq!(result.messages[0].content, "Failed to save product 'Pen'.");
    }

    #[test]
    fn invalid_input_is_an_error() {
        let mut inv = inventory();
        let err = run(&mut inv, NewProduct::new("Pen", "P1", -1.0, 1)).unwrap_err();
        assert!(matches!(err, InvError::Validation(_)));
        assert!(inv.is_empty());
    }
}
