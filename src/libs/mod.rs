//! Core library modules for pricebook.
//!
//! - **Record**: the `Product` type and its validation
//! - **Presentation**: the product view model and terminal rendering
//! - **Infrastructure**: configuration, data directory, messages
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use pricebook::db::context::DatabaseContext;
//! use pricebook::libs::product::Product;
//! use pricebook::libs::view_model::{ConsoleNotifier, ProductViewModel};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let mut view_model = ProductViewModel::new(DatabaseContext::from_config()?, Arc::new(ConsoleNotifier));
//! view_model.load_products().await?;
//! view_model.set_operating_product(Some(Product::new("Pen", 1.5)));
//! view_model.save_product().await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data_storage;
pub mod messages;
pub mod product;
pub mod view;
pub mod view_model;
