use console::Style;
use once_cell::sync::Lazy;

pub static HEADER: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static LABEL: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static OUT_OF_STOCK: Lazy<Style> = Lazy::new(|| Style::new().red());
pub static WARNING_TITLE: Lazy<Style> = Lazy::new(|| Style::new().yellow().bold());
