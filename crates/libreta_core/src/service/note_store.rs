//! Note store use-case service.
//!
//! # Responsibility
//! - Load the notebook once and degrade to empty on absent/corrupt data.
//! - Apply add/delete and write the full notebook through after each one.
//!
//! # Invariants
//! - Rejected operations never mutate state and never write.
//! - In-memory state is replaced only after the write succeeded, so memory
//!   and storage never diverge.
//! - Log events carry metadata only, never note text.

use crate::clock::Clock;
use crate::model::letter::Letter;
use crate::model::note::{Note, NoteColor, NoteValidationError};
use crate::model::notebook::NoteBook;
use crate::repo::note_repo::NoteRepository;
use crate::repo::RepoError;
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for note use-cases.
#[derive(Debug)]
pub enum NoteStoreError {
    /// Note input was rejected (e.g. blank text).
    Validation(NoteValidationError),
    /// Delete index does not address a rendered note.
    IndexOutOfRange {
        letter: Letter,
        index: usize,
        len: usize,
    },
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl NoteStoreError {
    /// Whether this is an input rejection rather than a storage failure.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, Self::Repo(_))
    }
}

impl Display for NoteStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::IndexOutOfRange { letter, index, len } => write!(
                f,
                "note index {index} out of range for letter {letter} ({len} notes)"
            ),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NoteStoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::IndexOutOfRange { .. } => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<NoteValidationError> for NoteStoreError {
    fn from(value: NoteValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for NoteStoreError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Returns `book` with a new note appended under `letter`.
///
/// The timestamp is read from `clock`; otherwise pure.
///
/// # Errors
/// - `NoteValidationError::EmptyText` when `text.trim()` is empty; `book` is
///   not touched.
pub fn add_note(
    book: &NoteBook,
    letter: Letter,
    text: &str,
    color: NoteColor,
    clock: &impl Clock,
) -> Result<NoteBook, NoteValidationError> {
    let note = Note::new(text, clock.timestamp(), color)?;
    Ok(book.with_note(letter, note))
}

/// Returns `book` without the note at `index` under `letter`.
///
/// # Errors
/// - `IndexOutOfRange` when `index` does not address an existing note.
pub fn delete_note(
    book: &NoteBook,
    letter: Letter,
    index: usize,
) -> Result<NoteBook, NoteStoreError> {
    book.without_note(letter, index)
        .ok_or_else(|| NoteStoreError::IndexOutOfRange {
            letter,
            index,
            len: book.notes(letter).len(),
        })
}

/// Loads a notebook, degrading to empty when absent or unreadable.
pub fn load_notebook(repo: &impl NoteRepository) -> NoteBook {
    match repo.load() {
        Ok(Some(book)) => {
            info!(
                "event=notes_load module=note_store status=ok letters={} notes={}",
                book.letters().count(),
                book.total_notes()
            );
            book
        }
        Ok(None) => {
            info!("event=notes_load module=note_store status=ok source=empty");
            NoteBook::new()
        }
        Err(err) => {
            warn!(
                "event=notes_load module=note_store status=degraded fallback=empty error={}",
                err
            );
            NoteBook::new()
        }
    }
}

/// Write-through note store.
pub struct NoteStore<R: NoteRepository, C: Clock> {
    repo: R,
    clock: C,
    notes: NoteBook,
}

impl<R: NoteRepository, C: Clock> NoteStore<R, C> {
    /// Loads the stored notebook. Never fails; see [`load_notebook`].
    pub fn load(repo: R, clock: C) -> Self {
        let notes = load_notebook(&repo);
        Self { repo, clock, notes }
    }

    pub fn notes(&self) -> &NoteBook {
        &self.notes
    }

    pub fn notes_for(&self, letter: Letter) -> &[Note] {
        self.notes.notes(letter)
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Appends a note and persists the full notebook.
    ///
    /// Returns the stored note with its captured timestamp.
    pub fn add_note(
        &mut self,
        letter: Letter,
        text: &str,
        color: NoteColor,
    ) -> Result<Note, NoteStoreError> {
        let note = match Note::new(text, self.clock.timestamp(), color) {
            Ok(note) => note,
            Err(err) => {
                info!(
                    "event=note_add module=note_store status=rejected letter={} reason={}",
                    letter, err
                );
                return Err(err.into());
            }
        };
        let next = self.notes.with_note(letter, note.clone());
        self.commit(next, "note_add", letter)?;
        Ok(note)
    }

    /// Removes the note at `index` under `letter` and persists.
    pub fn delete_note(&mut self, letter: Letter, index: usize) -> Result<Note, NoteStoreError> {
        let Some(removed) = self.notes.notes(letter).get(index).cloned() else {
            info!(
                "event=note_delete module=note_store status=rejected letter={} index={}",
                letter, index
            );
            return Err(NoteStoreError::IndexOutOfRange {
                letter,
                index,
                len: self.notes.notes(letter).len(),
            });
        };
        let next = delete_note(&self.notes, letter, index)?;
        self.commit(next, "note_delete", letter)?;
        Ok(removed)
    }

    /// Writes the current notebook in full.
    pub fn persist(&self) -> Result<(), NoteStoreError> {
        self.repo.save(&self.notes)?;
        Ok(())
    }

    fn commit(
        &mut self,
        next: NoteBook,
        event: &'static str,
        letter: Letter,
    ) -> Result<(), NoteStoreError> {
        if let Err(err) = self.repo.save(&next) {
            error!(
                "event={event} module=note_store status=error letter={} error={}",
                letter, err
            );
            return Err(err.into());
        }
        self.notes = next;
        info!(
            "event={event} module=note_store status=ok letter={} letter_notes={} total_notes={}",
            letter,
            self.notes.notes(letter).len(),
            self.notes.total_notes()
        );
        Ok(())
    }
}
