//! Letter → notes mapping.
//!
//! # Responsibility
//! - Hold notes grouped by letter in insertion order.
//! - Provide pure add/remove operations used by the note store service.
//!
//! # Invariants
//! - A letter key is created lazily on first add and never removed.
//! - Removal shifts later notes down by one; there are no tombstones.

use crate::model::letter::Letter;
use crate::model::note::Note;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from letter to its ordered notes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteBook {
    entries: BTreeMap<Letter, Vec<Note>>,
}

impl NoteBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notes for `letter` in display order; empty when the key is absent.
    pub fn notes(&self, letter: Letter) -> &[Note] {
        self.entries
            .get(&letter)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether `letter` has ever received a note.
    pub fn contains_letter(&self, letter: Letter) -> bool {
        self.entries.contains_key(&letter)
    }

    /// Letters with a key present, in alphabetical order.
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.entries.keys().copied()
    }

    pub fn total_notes(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Appends `note` to `letter`, creating the key if absent.
    pub fn push(&mut self, letter: Letter, note: Note) {
        self.entries.entry(letter).or_default().push(note);
    }

    /// Removes the note at `index` under `letter`.
    ///
    /// Returns `None` and leaves the book untouched when the letter is absent
    /// or `index` is out of range.
    pub fn remove(&mut self, letter: Letter, index: usize) -> Option<Note> {
        let notes = self.entries.get_mut(&letter)?;
        if index >= notes.len() {
            return None;
        }
        Some(notes.remove(index))
    }

    /// Returns a copy with `note` appended under `letter`.
    pub fn with_note(&self, letter: Letter, note: Note) -> Self {
        let mut next = self.clone();
        next.push(letter, note);
        next
    }

    /// Returns a copy without the note at `index`, or `None` when out of range.
    pub fn without_note(&self, letter: Letter, index: usize) -> Option<Self> {
        let mut next = self.clone();
        next.remove(letter, index)?;
        Some(next)
    }
}
