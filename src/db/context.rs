//! Generic table access over one shared SQLite connection.
//!
//! [`DatabaseContext`] opens its connection lazily on the first call and
//! keeps it until [`DatabaseContext::close`]. Before touching a record type's
//! table it makes sure the table exists; that check runs once per type per
//! connection and is idempotent because the schema uses
//! `CREATE TABLE IF NOT EXISTS`.
//!
//! Every operation is `async` for the caller and runs on tokio's blocking
//! pool while holding the connection lock, so operations never overlap.
//! Nothing is retried: driver errors come back as [`DbError`](super::error::DbError).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pricebook::db::context::DatabaseContext;
//! use pricebook::db::db::DbLocation;
//! use pricebook::libs::product::Product;
//!
//! # async fn demo() -> Result<(), pricebook::db::error::DbError> {
//! let context = DatabaseContext::new(DbLocation::Memory);
//! let mut pen = Product::new("Pen", 1.5);
//! assert!(context.insert(&mut pen).await?);
//! assert_eq!(context.get_all::<Product>().await?.len(), 1);
//! # Ok(())
//! # }
//! ```

use super::db::{Db, DbLocation};
use super::error::DbResult;
use super::filter::Filter;
use super::table::{self, Table};
use crate::libs::messages::Message;
use crate::msg_debug;
use parking_lot::Mutex;
use rusqlite::{params_from_iter, Connection, OptionalExtension};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::task;

#[derive(Default)]
struct ContextState {
    connection: Option<Connection>,
    tables: HashSet<&'static str>,
}

/// Shared entry point to the database for every record type.
///
/// Cloning is cheap and every clone shares the same connection.
#[derive(Clone)]
pub struct DatabaseContext {
    location: DbLocation,
    state: Arc<Mutex<ContextState>>,
}

impl DatabaseContext {
    pub fn new(location: DbLocation) -> Self {
        DatabaseContext {
            location,
            state: Arc::new(Mutex::new(ContextState::default())),
        }
    }

    /// Context over the configured database file in the application data directory.
    pub fn from_config() -> anyhow::Result<Self> {
        Ok(Self::new(DbLocation::from_config()?))
    }

    pub fn location(&self) -> &DbLocation {
        &self.location
    }

    /// Whether the connection is currently open.
    pub fn is_open(&self) -> bool {
        self.state.lock().connection.is_some()
    }

    /// Runs `operation` against the shared connection once `T`'s table exists.
    async fn execute<T, R, F>(&self, operation: F) -> DbResult<R>
    where
        T: Table + 'static,
        R: Send + 'static,
        F: FnOnce(&Connection) -> DbResult<R> + Send + 'static,
    {
        let state = Arc::clone(&self.state);
        let location = self.location.clone();

        task::spawn_blocking(move || -> DbResult<R> {
            let mut guard = state.lock();
            let ContextState { connection, tables } = &mut *guard;

            let conn = match connection.take() {
                Some(conn) => conn,
                None => Db::open(&location)?.conn,
            };
            let conn = connection.insert(conn);

            if !tables.contains(T::NAME) {
                conn.execute(&table::create_table_sql::<T>(), [])?;
                tables.insert(T::NAME);
                msg_debug!(Message::TableCreated(T::NAME.to_string()));
            }

            operation(conn)
        })
        .await?
    }

    /// Every row of `T`'s table. Order is unspecified.
    pub async fn get_all<T>(&self) -> DbResult<Vec<T>>
    where
        T: Table + Send + 'static,
    {
        self.get_filtered(Filter::new()).await
    }

    /// Rows of `T`'s table matching every condition of `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::UnknownColumn`](super::error::DbError::UnknownColumn)
    /// if the filter names a column `T` does not declare.
    pub async fn get_filtered<T>(&self, filter: Filter) -> DbResult<Vec<T>>
    where
        T: Table + Send + 'static,
    {
        let (where_clause, values) = filter.to_sql::<T>()?;

        self.execute::<T, _, _>(move |conn| {
            let sql = if where_clause.is_empty() {
                table::select_sql::<T>()
            } else {
                format!("{} {}", table::select_sql::<T>(), where_clause)
            };
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map(params_from_iter(values.iter()), |row| T::from_row(row))?;

            let mut records = Vec::new();
            for record in rows {
                records.push(record?);
            }
            Ok(records)
        })
        .await
    }

    /// The row with the given key, if any.
    pub async fn get_by_key<T>(&self, key: i64) -> DbResult<Option<T>>
    where
        T: Table + Send + 'static,
    {
        self.execute::<T, _, _>(move |conn| {
            let record = conn
                .query_row(&table::select_by_key_sql::<T>(), [key], |row| T::from_row(row))
                .optional()?;
            Ok(record)
        })
        .await
    }

    /// Inserts `record` and assigns it the new key.
    ///
    /// The record's current key is ignored. Returns `true` iff one row was inserted.
    pub async fn insert<T>(&self, record: &mut T) -> DbResult<bool>
    where
        T: Table + Send + 'static,
    {
        let values = record.values();

        let (affected, key) = self
            .execute::<T, _, _>(move |conn| {
                let affected = conn.execute(&table::insert_sql::<T>(), params_from_iter(values.iter()))?;
                Ok((affected, conn.last_insert_rowid()))
            })
            .await?;

        if affected == 1 {
            record.set_key(key);
        }
        Ok(affected == 1)
    }

    /// Replaces the row whose key matches `record`. Returns `true` iff one row changed.
    pub async fn update<T>(&self, record: &T) -> DbResult<bool>
    where
        T: Table + Send + 'static,
    {
        let mut values = record.values();
        values.push(record.key().into());

        self.execute::<T, _, _>(move |conn| {
            let affected = conn.execute(&table::update_sql::<T>(), params_from_iter(values.iter()))?;
            Ok(affected == 1)
        })
        .await
    }

    /// Deletes the row whose key matches `record`.
    pub async fn delete<T>(&self, record: &T) -> DbResult<bool>
    where
        T: Table + Send + 'static,
    {
        self.delete_by_key::<T>(record.key()).await
    }

    /// Deletes the row with the given key. Returns `true` iff one row was removed.
    pub async fn delete_by_key<T>(&self, key: i64) -> DbResult<bool>
    where
        T: Table + Send + 'static,
    {
        self.execute::<T, _, _>(move |conn| {
            let affected = conn.execute(&table::delete_by_key_sql::<T>(), [key])?;
            Ok(affected == 1)
        })
        .await
    }

    /// Closes the connection. A later call reopens it and re-checks tables.
    pub async fn close(&self) -> DbResult<()> {
        let state = Arc::clone(&self.state);

        task::spawn_blocking(move || -> DbResult<()> {
            let mut guard = state.lock();
            guard.tables.clear();
            if let Some(conn) = guard.connection.take() {
                conn.close().map_err(|(_, e)| e)?;
                msg_debug!(Message::DatabaseClosed);
            }
            Ok(())
        })
        .await?
    }
}
