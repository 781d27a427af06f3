//! # Invtrack CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file
//! only invokes `cli::run()` and handles process termination. Everything from
//! `invtrack::api` inward is UI agnostic.
//!
//! Exit status is 1 only when a command returns an error (invalid product
//! fields, unusable input). Unknown SKUs and failed saves are reported as
//! messages and still exit 0.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
