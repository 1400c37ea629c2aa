//! The product record shown and edited by the application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a product cannot be saved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required.")]
    NameRequired,
    #[error("Price should be greater than 0")]
    PriceNotPositive,
}

/// A single product.
///
/// An `id` of 0 means the product has not been persisted yet; inserting it
/// assigns the real identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: Option<String>,
    pub price: f64,
}

impl Product {
    pub fn new(name: &str, price: f64) -> Self {
        Product {
            id: 0,
            name: Some(name.to_string()),
            price,
        }
    }

    /// True until the product has been inserted.
    pub fn is_new(&self) -> bool {
        self.id == 0
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Checks the name first, then the price.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.as_deref().map_or(true, |name| name.trim().is_empty()) {
            return Err(ValidationError::NameRequired);
        }
        if self.price <= 0.0 || self.price.is_nan() {
            return Err(ValidationError::PriceNotPositive);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_product_is_new_and_invalid() {
        let product = Product::default();
        assert!(product.is_new());
        assert_eq!(product.validate(), Err(ValidationError::NameRequired));
    }

    #[test]
    fn whitespace_name_is_rejected() {
        let product = Product::new("   ", 3.0);
        assert_eq!(product.validate(), Err(ValidationError::NameRequired));
    }

    #[test]
    fn name_is_checked_before_price() {
        let product = Product::new("", 0.0);
        assert_eq!(product.validate(), Err(ValidationError::NameRequired));
    }

    #[test]
    fn non_positive_price_is_rejected() {
        assert_eq!(Product::new("Pen", 0.0).validate(), Err(ValidationError::PriceNotPositive));
        assert_eq!(Product::new("Pen", -1.5).validate(), Err(ValidationError::PriceNotPositive));
        assert_eq!(Product::new("Pen", f64::NAN).validate(), Err(ValidationError::PriceNotPositive));
    }

    #[test]
    fn valid_product_passes() {
        assert!(Product::new("Pen", 1.5).validate().is_ok());
    }

    #[test]
    fn validation_messages() {
        assert_eq!(ValidationError::NameRequired.to_string(), "Name is required.");
        assert_eq!(ValidationError::PriceNotPositive.to_string(), "Price should be greater than 0");
    }
}
