//! # Pricebook
//!
//! A product list (name and price) kept in a local SQLite database.
//!
//! ## Features
//!
//! - **Generic table access**: CRUD for any record type implementing `Table`,
//!   with the schema derived from the record and created on first use
//! - **Product view model**: shown list, operating product, busy indicator
//! - **Terminal front end**: list, add, edit, delete and search products
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pricebook::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
