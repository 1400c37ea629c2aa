//! Error type for the table-access layer.

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Unknown column '{column}' for table '{table}'")]
    UnknownColumn { table: &'static str, column: String },

    #[error("Database worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

pub type DbResult<T> = Result<T, DbError>;
