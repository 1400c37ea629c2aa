//! Record-to-table mapping.
//!
//! A record type implements [`Table`] to describe its table: the name, the
//! integer auto-increment key and the remaining typed columns. The schema and
//! every statement the context runs are derived from that description, so a
//! new record type needs no hand-written SQL.
//!
//! Rows are always selected as the key column followed by [`Table::COLUMNS`]
//! in declaration order; [`Table::from_row`] reads them in that order.

use rusqlite::types::Value;
use rusqlite::Row;

/// Storage class of a non-key column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Real,
    Text,
    Blob,
}

impl ColumnType {
    pub fn sql(self) -> &'static str {
        match self {
            ColumnType::Integer => "INTEGER",
            ColumnType::Real => "REAL",
            ColumnType::Text => "TEXT",
            ColumnType::Blob => "BLOB",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub kind: ColumnType,
}

impl Column {
    pub const fn new(name: &'static str, kind: ColumnType) -> Self {
        Column { name, kind }
    }
}

/// A record type stored in its own table.
pub trait Table: Sized {
    /// Table name.
    const NAME: &'static str;

    /// Integer primary key, declared `AUTOINCREMENT` so identifiers are never reused.
    const PRIMARY_KEY: &'static str;

    /// Non-key columns in declaration order.
    const COLUMNS: &'static [Column];

    fn key(&self) -> i64;

    fn set_key(&mut self, key: i64);

    /// Values for [`Table::COLUMNS`], in the same order.
    fn values(&self) -> Vec<Value>;

    /// Builds a record from a row laid out as key, then [`Table::COLUMNS`].
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;

    /// Whether `name` is the key or one of the declared columns.
    fn has_column(name: &str) -> bool {
        name == Self::PRIMARY_KEY || Self::COLUMNS.iter().any(|c| c.name == name)
    }
}

/// Quotes an identifier for use in SQL.
pub(crate) fn quote(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

pub(crate) fn create_table_sql<T: Table>() -> String {
    let mut columns = vec![format!("{} INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL", quote(T::PRIMARY_KEY))];
    columns.extend(T::COLUMNS.iter().map(|c| format!("{} {}", quote(c.name), c.kind.sql())));

    format!("CREATE TABLE IF NOT EXISTS {} ({})", quote(T::NAME), columns.join(", "))
}

pub(crate) fn select_sql<T: Table>() -> String {
    let mut columns = vec![quote(T::PRIMARY_KEY)];
    columns.extend(T::COLUMNS.iter().map(|c| quote(c.name)));

    format!("SELECT {} FROM {}", columns.join(", "), quote(T::NAME))
}

pub(crate) fn select_by_key_sql<T: Table>() -> String {
    format!("{} WHERE {} = ?1", select_sql::<T>(), quote(T::PRIMARY_KEY))
}

pub(crate) fn insert_sql<T: Table>() -> String {
    let names: Vec<String> = T::COLUMNS.iter().map(|c| quote(c.name)).collect();
    let placeholders: Vec<String> = (1..=T::COLUMNS.len()).map(|i| format!("?{}", i)).collect();

    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quote(T::NAME),
        names.join(", "),
        placeholders.join(", ")
    )
}

/// Key is bound last, after every column value.
pub(crate) fn update_sql<T: Table>() -> String {
    let assignments: Vec<String> = T::COLUMNS
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{} = ?{}", quote(c.name), i + 1))
        .collect();

    format!(
        "UPDATE {} SET {} WHERE {} = ?{}",
        quote(T::NAME),
        assignments.join(", "),
        quote(T::PRIMARY_KEY),
        T::COLUMNS.len() + 1
    )
}

pub(crate) fn delete_by_key_sql<T: Table>() -> String {
    format!("DELETE FROM {} WHERE {} = ?1", quote(T::NAME), quote(T::PRIMARY_KEY))
}
