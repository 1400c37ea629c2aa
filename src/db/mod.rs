//! Storage layer for pricebook.
//!
//! A thin generic layer over an embedded SQLite database. Record types
//! describe their table through [`table::Table`]; [`context::DatabaseContext`]
//! derives the schema and statements from that description and runs them
//! against one lazily opened, shared connection.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pricebook::db::{context::DatabaseContext, filter::Filter};
//! use pricebook::libs::product::Product;
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let context = DatabaseContext::from_config()?;
//!
//! let mut pen = Product::new("Pen", 1.50);
//! context.insert(&mut pen).await?;
//!
//! pen.price = 2.00;
//! context.update(&pen).await?;
//!
//! let cheap: Vec<Product> = context.get_filtered(Filter::new().lt("Price", 5.0)).await?;
//! context.delete_by_key::<Product>(pen.id).await?;
//! context.close().await?;
//! # Ok(())
//! # }
//! ```

/// Generic CRUD over the shared connection.
pub mod context;

/// Connection opening and database location.
pub mod db;

/// Typed errors of the storage layer.
pub mod error;

/// Row predicates for filtered queries.
pub mod filter;

/// `Table` mapping for products.
pub mod products;

/// The `Table` trait and the SQL derived from it.
pub mod table;
