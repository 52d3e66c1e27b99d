//! Flutter bridge surface for the letter notebook.

pub mod api;
