use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "invtrack", bin_name = "invtrack", version)]
#[command(about = "Command-line inventory tracker", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Inventory JSON file (overrides the config file)
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub data_file: Option<PathBuf>,

    /// Deletion audit log (overrides the config file)
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub log_file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new product (prompts for missing required fields)
    #[command(alias = "add-product")]
    Add {
        #[arg(long)]
        name: Option<String>,

        /// Stock Keeping Unit (unique)
        #[arg(long)]
        sku: Option<String>,

        #[arg(long, allow_negative_numbers = true)]
        price: Option<f64>,

        /// Initial quantity
        #[arg(long, allow_negative_numbers = true)]
        quantity: Option<i64>,

        /// Product category [default: General]
        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        supplier: Option<String>,
    },

    /// List all products with stock information
    #[command(visible_alias = "ls", alias = "view-products")]
    List,

    /// Show the details of one product
    Show { sku: String },

    /// Set the stock quantity of a product
    #[command(alias = "update-stock")]
    Stock {
        #[arg(long)]
        sku: Option<String>,

        /// New quantity
        #[arg(long, allow_negative_numbers = true)]
        quantity: Option<i64>,
    },

    /// Delete a product after confirmation
    #[command(visible_alias = "rm", alias = "delete-product")]
    Delete {
        #[arg(long)]
        sku: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Edit name, category, price and description of a product
    #[command(alias = "edit-product")]
    Edit {
        #[arg(long)]
        sku: Option<String>,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long, allow_negative_numbers = true)]
        price: Option<f64>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, audit-log)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
