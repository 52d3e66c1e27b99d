//! Key-value storage backends.
//!
//! # Responsibility
//! - Define the byte-store contract repositories persist through.
//! - Provide in-memory, file and embedded SQLite implementations.
//!
//! # Invariants
//! - `set` overwrites any prior value for the key in full.
//! - `get` of a never-written key returns `Ok(None)`, not an error.
//! - Backends do not interpret values; decoding belongs to repositories.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod file;
mod memory;
mod sqlite;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure raised by a storage backend.
#[derive(Debug)]
pub enum StoreError {
    /// File-system failure in `FileStore`.
    Io(std::io::Error),
    /// SQLite bootstrap or query failure in `SqliteStore`.
    Db(DbError),
    /// Key cannot be mapped onto the backend.
    InvalidKey(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "storage io failure: {err}"),
            Self::Db(err) => write!(f, "storage database failure: {err}"),
            Self::InvalidKey(key) => write!(f, "invalid storage key: `{key}`"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidKey(_) => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persistent string key-value store.
///
/// Methods take `&self` so one backend can be shared by the note and theme
/// repositories at the same time.
pub trait KeyValueStore {
    /// Reads the value stored under `key`.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    /// Overwrites the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
    /// Backend label used in log events.
    fn backend_name(&self) -> &'static str;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn backend_name(&self) -> &'static str {
        (**self).backend_name()
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn backend_name(&self) -> &'static str {
        (**self).backend_name()
    }
}
