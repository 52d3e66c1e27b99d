//! Domain model for the letter notebook.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Own validation rules shared by write paths and persisted-data reads.
//!
//! # Invariants
//! - A `Letter` is always one of `A..=Z`.
//! - A stored `Note` never has blank text; its text is kept as typed.
//! - A `NoteBook` key, once created, is never removed.

pub mod letter;
pub mod note;
pub mod notebook;
pub mod theme;
