//! Repository layer over key-value storage.
//!
//! # Responsibility
//! - Define snapshot-style `load`/`save` contracts for notes and theme.
//! - Own the storage keys and wire encodings.
//!
//! # Invariants
//! - Read paths report invalid persisted data as `RepoError::InvalidData`
//!   instead of masking it; degrading to defaults is a service decision.
//! - `save` always writes the full snapshot.

use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod note_repo;
pub mod theme_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for snapshot load/save.
#[derive(Debug)]
pub enum RepoError {
    Store(StoreError),
    Encode(serde_json::Error),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode snapshot: {err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}
