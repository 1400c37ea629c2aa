use super::error::DbResult;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_debug;
use rusqlite::{Connection, OpenFlags};
use std::path::PathBuf;

/// Where the database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbLocation {
    File(PathBuf),
    Memory,
}

impl DbLocation {
    /// The configured file inside the application data directory.
    pub fn from_config() -> anyhow::Result<DbLocation> {
        Ok(DbLocation::File(Config::read()?.database_path()?))
    }
}

impl std::fmt::Display for DbLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DbLocation::File(path) => write!(f, "{}", path.display()),
            DbLocation::Memory => write!(f, ":memory:"),
        }
    }
}

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens (creating if needed) a read-write connection with a shared cache.
    pub fn open(location: &DbLocation) -> DbResult<Db> {
        let flags = OpenFlags::SQLITE_OPEN_CREATE
            | OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_SHARED_CACHE
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;

        let conn = match location {
            DbLocation::File(path) => {
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() && !parent.exists() {
                        std::fs::create_dir_all(parent)?;
                    }
                }
                Connection::open_with_flags(path, flags)?
            }
            DbLocation::Memory => Connection::open_in_memory_with_flags(flags)?,
        };
        msg_debug!(Message::DatabaseOpened(location.to_string()));

        Ok(Db { conn })
    }
}
