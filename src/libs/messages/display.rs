//! Display implementation for pricebook messages.
//!
//! All message text is defined here, so the rest of the crate only deals in
//! `Message` variants. Busy texts and alert texts are user-visible in the
//! interactive front end and are kept stable.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === PRODUCT MESSAGES ===
            Message::ProductCreated(name) => format!("Product '{}' created successfully", name),
            Message::ProductUpdated(name) => format!("Product '{}' updated successfully", name),
            Message::ProductDeleted(id) => format!("Product with ID {} deleted successfully", id),
            Message::ProductNotFound(id) => format!("Product with ID {} not found.", id),
            Message::ProductCreateFailed => "Unable to create the product".to_string(),
            Message::ProductUpdateFailed => "Product Updation Error".to_string(),
            Message::ProductDeleteFailed => "Unable to delete the product".to_string(),
            Message::ProductsHeader => "Products:".to_string(),
            Message::ProductsNotFound => "No products yet.".to_string(),
            Message::ProductsMatchingHeader => "Matching products:".to_string(),
            Message::NoProductsMatching => "No products match the given filter.".to_string(),
            Message::ProductsLoaded(count) => format!("Loaded {} product(s)", count),
            Message::ConfirmDeleteProduct(name) => format!("Are you sure you want to delete '{}'?", name),
            Message::EditingProduct(name) => format!("Editing product: {}", name),

            // === BUSY TEXTS ===
            Message::Processing => "Processing...".to_string(),
            Message::LoadingProducts => "Loading Products...".to_string(),
            Message::RefreshingProducts => "Refreshing Products...".to_string(),
            Message::CreatingProduct => "Creating Product...".to_string(),
            Message::UpdatingProduct => "Updating Product...".to_string(),
            Message::DeletingProduct => "Deleting Product..".to_string(),

            // === ALERT TITLES ===
            Message::ValidationErrorTitle => "Validation Error".to_string(),
            Message::ErrorTitle => "Error".to_string(),
            Message::Alert { title, message } => format!("{}: {}", title, message),

            // === PROMPTS ===
            Message::PromptProductName => "Product name".to_string(),
            Message::PromptProductPrice => "Price".to_string(),
            Message::PromptDatabaseFileName => "Database file name".to_string(),
            Message::SelectProductAction => "What do you want to do?".to_string(),
            Message::SelectProductToEdit => "Select a product to edit".to_string(),
            Message::SelectProductToDelete => "Select a product to delete".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed, defaults will be used".to_string(),
            Message::ConfigParseError => "Failed to parse configuration".to_string(),
            Message::ConfigSaveError => "Failed to save configuration".to_string(),

            // === DATABASE MESSAGES ===
            Message::DatabaseOpened(path) => format!("Opened database at {}", path),
            Message::DatabaseClosed => "Database connection closed".to_string(),
            Message::TableCreated(name) => format!("Ensured table '{}' exists", name),

            // === GENERIC MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::InvalidInput(details) => format!("Invalid input: {}", details),
        };

        write!(f, "{}", text)
    }
}
