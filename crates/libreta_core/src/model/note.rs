//! Note domain model.
//!
//! # Responsibility
//! - Define the single persisted note entry and its color tag.
//! - Validate note text on construction and on deserialization.
//!
//! # Invariants
//! - `text` is kept as typed and is not blank.
//! - `timestamp` and `color` never change after creation.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Color tag attached to a note.
///
/// Wire values keep the class names written by earlier releases so existing
/// stored notebooks still decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NoteColor {
    #[default]
    #[serde(rename = "bg-yellow-100")]
    Yellow,
    #[serde(rename = "bg-green-100")]
    Green,
    #[serde(rename = "bg-blue-100")]
    Blue,
}

impl NoteColor {
    /// All selectable colors in swatch order.
    pub const ALL: [NoteColor; 3] = [NoteColor::Yellow, NoteColor::Green, NoteColor::Blue];

    /// Stored/styling class name.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Yellow => "bg-yellow-100",
            Self::Green => "bg-green-100",
            Self::Blue => "bg-blue-100",
        }
    }

    /// Short human label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }

    /// Resolves a 1-based swatch position.
    pub fn from_position(position: usize) -> Option<Self> {
        position
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// Parses a swatch position (`"2"`), label (`"green"`) or class name.
    pub fn parse_input(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if let Ok(position) = trimmed.parse::<usize>() {
            return Self::from_position(position);
        }
        let lowered = trimmed.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|color| color.label() == lowered || color.class_name() == lowered)
    }
}

/// Validation failures for note construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteValidationError {
    /// Text is empty after trimming whitespace.
    EmptyText,
    /// Timestamp is empty.
    EmptyTimestamp,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "note text must not be empty"),
            Self::EmptyTimestamp => write!(f, "note timestamp must not be empty"),
        }
    }
}

impl Error for NoteValidationError {}

/// A single persisted note entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NoteWire")]
pub struct Note {
    text: String,
    timestamp: String,
    color: NoteColor,
}

impl Note {
    /// Creates a note. `text` is stored exactly as given.
    ///
    /// # Errors
    /// - `EmptyText` when `text` is only whitespace.
    /// - `EmptyTimestamp` when `timestamp` is blank.
    pub fn new(
        text: &str,
        timestamp: impl Into<String>,
        color: NoteColor,
    ) -> Result<Self, NoteValidationError> {
        if text.trim().is_empty() {
            return Err(NoteValidationError::EmptyText);
        }
        let timestamp = timestamp.into();
        if timestamp.trim().is_empty() {
            return Err(NoteValidationError::EmptyTimestamp);
        }
        Ok(Self {
            text: text.to_string(),
            timestamp,
            color,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn color(&self) -> NoteColor {
        self.color
    }
}

#[derive(Deserialize)]
struct NoteWire {
    text: String,
    timestamp: String,
    color: NoteColor,
}

impl TryFrom<NoteWire> for Note {
    type Error = NoteValidationError;

    fn try_from(value: NoteWire) -> Result<Self, Self::Error> {
        Note::new(&value.text, value.timestamp, value.color)
    }
}
