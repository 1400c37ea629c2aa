//! Table mapping for [`Product`].
//!
//! Column names keep the record's field names in PascalCase, so the file
//! layout is `Product(Id, Name, Price)`.

use super::table::{Column, ColumnType, Table};
use crate::libs::product::Product;
use rusqlite::types::Value;
use rusqlite::Row;

impl Table for Product {
    const NAME: &'static str = "Product";
    const PRIMARY_KEY: &'static str = "Id";
    const COLUMNS: &'static [Column] = &[Column::new("Name", ColumnType::Text), Column::new("Price", ColumnType::Real)];

    fn key(&self) -> i64 {
        self.id
    }

    fn set_key(&mut self, key: i64) {
        self.id = key;
    }

    fn values(&self) -> Vec<Value> {
        vec![self.name.clone().map_or(Value::Null, Value::Text), Value::Real(self.price)]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Product {
            id: row.get(0)?,
            name: row.get(1)?,
            price: row.get(2)?,
        })
    }
}
