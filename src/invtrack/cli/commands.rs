//! # CLI Layer
//!
//! This module is **one possible UI client** for invtrack. It is the only place
//! that parses arguments, prompts, prints, and sets up diagnostic logging.
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_tracing()`: stderr diagnostics, filtered by `RUST_LOG`
//! - `handle_*()`: Per-command handlers that prompt for missing input, call the
//!   API and print the result

use super::prompt::Prompter;
use super::render::{print_messages, render_product_table, render_record};
use super::setup::{Cli, Commands};
use clap::Parser;
use invtrack::api::{ConfigAction, NewProduct, ProductEdit};
use invtrack::error::Result;
use invtrack::init::{initialize, InvContext, PathOverrides};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut ctx = initialize(
        &cwd,
        PathOverrides {
            data_file: cli.data_file,
            audit_log: cli.log_file,
        },
    );
    let prompter = Prompter::new();

    match cli.command {
        Some(Commands::Add {
            name,
            sku,
            price,
            quantity,
            category,
            description,
            supplier,
        }) => {
            let name = match name {
                Some(n) => n,
                None => prompter.text("Product name", None)?,
            };
            let sku = match sku {
                Some(s) => s,
                None => prompter.text("SKU", None)?,
            };
            let price = match price {
                Some(p) => p,
                None => prompter.parse("Price", None, "price")?,
            };
            let quantity = match quantity {
                Some(q) => q,
                None => prompter.parse("Quantity", None, "quantity")?,
            };
            let new = NewProduct {
                category,
                description,
                supplier,
                ..NewProduct::new(name, sku, price, quantity)
            };
            handle_add(&mut ctx, new)
        }
        Some(Commands::List) | None => handle_list(&mut ctx),
        Some(Commands::Show { sku }) => handle_show(&mut ctx, &sku),
        Some(Commands::Stock { sku, quantity }) => {
            let sku = match sku {
                Some(s) => s,
                None => prompter.text("SKU of product to update", None)?,
            };
            let quantity = match quantity {
                Some(q) => q,
                None => prompter.parse("New quantity", None, "quantity")?,
            };
            handle_stock(&mut ctx, &sku, quantity)
        }
        Some(Commands::Delete { sku, yes }) => {
            let sku = match sku {
                Some(s) => s,
                None => prompter.text("SKU of product to delete", None)?,
            };
            handle_delete(&mut ctx, &prompter, &sku, yes)
        }
        Some(Commands::Edit {
            sku,
            name,
            category,
            price,
            description,
        }) => {
            let sku = match sku {
                Some(s) => s,
                None => prompter.text("SKU of product to edit", None)?,
            };
            let given = EditFields {
                name,
                category,
                price,
                description,
            };
            handle_edit(&mut ctx, &prompter, &sku, given)
        }
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "invtrack=debug" } else { "error" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn handle_add(ctx: &mut InvContext, new: NewProduct) -> Result<()> {
    let result = ctx.api.add_product(new)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut InvContext) -> Result<()> {
    let result = ctx.api.list_products()?;
    print!("{}", render_product_table(&result.products));
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &mut InvContext, sku: &str) -> Result<()> {
    let result = ctx.api.view_product(sku)?;
    if let Some(found) = &result.record {
        print!("{}", render_record("Product Details:", &found.sku, &found.record));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_stock(ctx: &mut InvContext, sku: &str, quantity: i64) -> Result<()> {
    let result = ctx.api.update_stock(sku, quantity)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut InvContext, prompter: &Prompter, sku: &str, yes: bool) -> Result<()> {
    let lookup = ctx.api.view_product(sku)?;
    let Some(found) = &lookup.record else {
        print_messages(&lookup.messages);
        return Ok(());
    };
    print_messages(&lookup.messages);
    print!("{}", render_record("PRODUCT TO DELETE:", &found.sku, &found.record));

    if !yes && !prompter.confirm("Are you sure you want to delete this product?")? {
        println!("Deletion cancelled");
        return Ok(());
    }

    let result = ctx.api.delete_product(sku)?;
    print_messages(&result.messages);
    Ok(())
}

/// Edit values supplied on the command line; the rest are prompted for.
struct EditFields {
    name: Option<String>,
    category: Option<String>,
    price: Option<f64>,
    description: Option<String>,
}

fn handle_edit(
    ctx: &mut InvContext,
    prompter: &Prompter,
    sku: &str,
    given: EditFields,
) -> Result<()> {
    let lookup = ctx.api.view_product(sku)?;
    let Some(found) = lookup.record.clone() else {
        print_messages(&lookup.messages);
        return Ok(());
    };
    print_messages(&lookup.messages);
    print!("{}", render_record("Current Product Details:", &found.sku, &found.record));
    println!();

    let current = found.record;
    let edit = ProductEdit {
        sku: found.sku,
        name: match given.name {
            Some(n) => n,
            None => prompter.text("New name", Some(current.name.as_str()))?,
        },
        category: match given.category {
            Some(c) => c,
            None => prompter.text("New category", Some(current.category.as_str()))?,
        },
        price: match given.price {
            Some(p) => p,
            None => prompter.parse("New price", Some(current.price), "price")?,
        },
        description: match given.description {
            Some(d) => d,
            None => prompter.text("New description", Some(current.description.as_str()))?,
        },
    };

    let result = ctx.api.edit_product(&edit)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &InvContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.clone(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if key.is_none() {
        if let Some(config) = &result.config {
            for (k, v) in config.list_all() {
                println!("{} = {}", k, v);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}
