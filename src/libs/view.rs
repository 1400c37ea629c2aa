use super::product::Product;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn products(products: &[Product]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "PRICE"]);
        for product in products {
            table.add_row(row![product.id, product.display_name(), Self::price(product.price)]);
        }
        table.printstd();

        Ok(())
    }

    pub fn product(product: &Product) -> Result<()> {
        Self::products(std::slice::from_ref(product))
    }

    /// Prices are shown with two decimals.
    pub fn price(price: f64) -> String {
        format!("{:.2}", price)
    }
}
