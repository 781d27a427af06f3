//! # Invtrack Architecture
//!
//! Invtrack is a single-user inventory tracker: products live in one JSON file
//! on disk, keyed by SKU, and are managed from the command line. The library is
//! UI-agnostic; the `invtrack` binary is just one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, renders tables                │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Surfaces load warnings as messages                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validates user input, turns outcomes into messages       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Inventory (inventory.rs)                                   │
//! │  - Owns the SKU → record mapping, saves after each change   │
//! │  - Reports deletions to an injected AuditSink (audit.rs)    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure model
//!
//! - Bad product fields are a [`error::ValidationError`] and reach the caller.
//! - Unknown SKUs are `false` / `None` at the inventory level and error
//!   messages at the command level.
//! - Storage failures never propagate: an unreadable file opens as an empty
//!   inventory (with a warning) and a failed save turns into `false`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per user command
//! - [`inventory`]: The inventory store and its six operations
//! - [`store`]: Storage abstraction and implementations
//! - [`audit`]: Deletion audit sinks
//! - [`model`]: `Product`, `ProductRecord`, `ProductMap`
//! - [`config`]: Configuration management
//! - [`init`]: Builds a ready-to-use API from the working directory
//! - [`error`]: Error types
//! - `cli`: Argument parsing, prompting and rendering for the binary (not part of the lib API)

pub mod api;
pub mod audit;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod inventory;
pub mod model;
pub mod store;
