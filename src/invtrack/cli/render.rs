//! # Rendering
//!
//! Everything here returns a `String`; handlers decide when to print it. Column
//! widths are measured with `unicode-width` and styles are applied after
//! padding, so escape codes never disturb the layout.

use super::styles::{HEADER, LABEL, OUT_OF_STOCK, WARNING_TITLE};
use colored::Colorize;
use invtrack::api::{CmdMessage, MessageLevel};
use invtrack::model::{Product, ProductRecord};
use unicode_width::UnicodeWidthStr;

pub const DESCRIPTION_WIDTH: usize = 50;
const HEADERS: [&str; 6] = ["SKU", "Name", "Category", "Price", "Stock", "Description"];
const STOCK_COLUMN: usize = 4;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Cut to `DESCRIPTION_WIDTH` characters, marking the cut with "...".
pub fn truncate_description(description: &str) -> String {
    if description.chars().count() > DESCRIPTION_WIDTH {
        let head: String = description.chars().take(DESCRIPTION_WIDTH).collect();
        format!("{}...", head)
    } else {
        description.to_string()
    }
}

fn product_row(product: &Product) -> [String; 6] {
    [
        product.sku().to_string(),
        product.name().to_string(),
        product.category().to_string(),
        format_price(product.price()),
        product.quantity().to_string(),
        truncate_description(product.description()),
    ]
}

fn border(widths: &[usize], fill: char) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.extend(std::iter::repeat(fill).take(width + 2));
        line.push('+');
    }
    line
}

fn row_line(cells: &[String], widths: &[usize], style: impl Fn(usize, &str) -> String) -> String {
    let mut line = String::from("|");
    for (col, (cell, width)) in cells.iter().zip(widths).enumerate() {
        let padding = " ".repeat(width.saturating_sub(cell.width()));
        // Numbers are right aligned.
        let padded = if col == STOCK_COLUMN {
            format!("{}{}", padding, style(col, cell.as_str()))
        } else {
            format!("{}{}", style(col, cell.as_str()), padding)
        };
        line.push_str(&format!(" {} |", padded));
    }
    line
}

/// Grid table of products followed by the total count.
pub fn render_product_table(products: &[Product]) -> String {
    if products.is_empty() {
        return String::new();
    }

    let headers: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
    let rows: Vec<[String; 6]> = products.iter().map(product_row).collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    out.push_str(&border(&widths, '-'));
    out.push('\n');
    out.push_str(&row_line(&headers, &widths, |_, cell| {
        HEADER.apply_to(cell).to_string()
    }));
    out.push('\n');
    out.push_str(&border(&widths, '='));
    out.push('\n');

    for (row, product) in rows.iter().zip(products) {
        let empty = product.quantity() == 0;
        out.push_str(&row_line(row, &widths, |col, cell| {
            if empty && col == STOCK_COLUMN {
                OUT_OF_STOCK.apply_to(cell).to_string()
            } else {
                cell.to_string()
            }
        }));
        out.push('\n');
        out.push_str(&border(&widths, '-'));
        out.push('\n');
    }

    out.push_str(&format!("\nTotal products: {}\n", products.len()));
    out
}

/// Indented field listing, used by `show`, `delete` and `edit`.
pub fn render_record(title: &str, sku: &str, record: &ProductRecord) -> String {
    let fields = [
        ("SKU", sku.to_string()),
        ("Name", record.name.clone()),
        ("Category", record.category.clone()),
        ("Price", format_price(record.price)),
        ("Stock", record.quantity.to_string()),
        ("Description", record.description.clone()),
        ("Supplier", record.supplier.clone()),
    ];

    let mut out = format!("\n{}\n", WARNING_TITLE.apply_to(title));
    for (label, value) in fields {
        out.push_str(&format!(
            "   {} {}\n",
            LABEL.apply_to(format!("{}:", label)),
            value
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        console::set_colors_enabled(false);
    }

    #[test]
    fn truncates_long_descriptions() {
        let long = "x".repeat(60);
        let cut = truncate_description(&long);
        assert_eq!(cut.len(), 53);
        assert!(cut.ends_with("..."));
        assert_eq!(truncate_description("short"), "short");
    }

    #[test]
    fn formats_price_with_two_decimals() {
        assert_eq!(format_price(3.0), "$3.00");
        assert_eq!(format_price(29.999), "$30.00");
    }

    #[test]
    fn table_has_grid_and_total() {
        plain();
        let products = vec![
            Product::new("Widget", "P1", 10.0, 5).unwrap(),
            Product::new("Gadget", "P22", 2.5, 120)
                .unwrap()
                .with_description("Small"),
        ];
        let table = render_product_table(&products);
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(
            lines[0],
            "+-----+--------+----------+--------+-------+-------------+"
        );
        assert_eq!(
            lines[1],
            "| SKU | Name   | Category | Price  | Stock | Description |"
        );
        assert!(lines[2].starts_with("+====="));
        assert_eq!(
            lines[3],
            "| P1  | Widget | General  | $10.00 |     5 |             |"
        );
        assert!(table.ends_with("Total products: 2\n"));
    }

    #[test]
    fn empty_table_renders_nothing() {
        assert!(render_product_table(&[]).is_empty());
    }

    #[test]
    fn record_lists_fields() {
        plain();
        let record = Product::new("Widget", "P1", 10.0, 5).unwrap().to_record();
        let out = render_record("PRODUCT TO DELETE:", "P1", &record);
        assert!(out.contains("PRODUCT TO DELETE:"));
        assert!(out.contains("   Name: Widget"));
        assert!(out.contains("   Stock: 5"));
        assert!(out.contains("   Price: $10.00"));
    }
}
