//! Notebook snapshot repository.
//!
//! # Invariants
//! - The whole notebook lives under one key as a JSON object
//!   `{ "<letter>": [{ "text", "timestamp", "color" }] }`.

use crate::model::notebook::NoteBook;
use crate::repo::{RepoError, RepoResult};
use crate::store::KeyValueStore;

/// Storage key holding the serialized notebook.
pub const NOTES_KEY: &str = "libretaNotas";

/// Snapshot repository for the notebook.
pub trait NoteRepository {
    /// Reads the stored notebook; `Ok(None)` when nothing was saved yet.
    fn load(&self) -> RepoResult<Option<NoteBook>>;
    /// Overwrites the stored notebook with `book`.
    fn save(&self, book: &NoteBook) -> RepoResult<()>;
}

/// `NoteRepository` persisting through any `KeyValueStore`.
pub struct KvNoteRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> KvNoteRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: KeyValueStore> NoteRepository for KvNoteRepository<S> {
    fn load(&self) -> RepoResult<Option<NoteBook>> {
        let Some(raw) = self.store.get(NOTES_KEY)? else {
            return Ok(None);
        };
        decode_notebook(&raw).map(Some)
    }

    fn save(&self, book: &NoteBook) -> RepoResult<()> {
        let encoded = serde_json::to_string(book).map_err(RepoError::Encode)?;
        self.store.set(NOTES_KEY, &encoded)?;
        Ok(())
    }
}

fn decode_notebook(raw: &str) -> RepoResult<NoteBook> {
    serde_json::from_str(raw).map_err(|err| {
        RepoError::InvalidData(format!("`{NOTES_KEY}` does not decode as a notebook: {err}"))
    })
}
