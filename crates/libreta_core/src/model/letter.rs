//! Letter category keys.
//!
//! # Invariants
//! - Only the 26 uppercase ASCII letters are representable.
//! - Wire form is a one-character string (`"A"`), also used as JSON map key.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};

/// One of the 26 fixed category keys notes are filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(char);

impl Letter {
    /// Number of selectable letters.
    pub const COUNT: usize = 26;

    /// First letter, selected on startup.
    pub const FIRST: Letter = Letter('A');

    /// Builds a letter from an uppercase ASCII char.
    ///
    /// Returns `None` for anything outside `A..=Z`; lowercase input is not
    /// accepted here so persisted keys stay canonical.
    pub fn new(value: char) -> Option<Self> {
        value.is_ascii_uppercase().then_some(Self(value))
    }

    /// Parses user input such as `"e"` or `" E "`.
    ///
    /// Input is trimmed and uppercased; it must be exactly one ASCII letter.
    pub fn parse_input(input: &str) -> Option<Self> {
        let mut chars = input.trim().chars();
        let first = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Self::new(first.to_ascii_uppercase())
    }

    /// Iterates `A..=Z` in display order.
    pub fn all() -> impl Iterator<Item = Letter> {
        ('A'..='Z').map(Letter)
    }

    pub fn as_char(self) -> char {
        self.0
    }
}

impl Default for Letter {
    fn default() -> Self {
        Self::FIRST
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Letter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut buf = [0u8; 4];
        serializer.serialize_str(self.0.encode_utf8(&mut buf))
    }
}

impl<'de> Deserialize<'de> for Letter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(LetterVisitor)
    }
}

struct LetterVisitor;

impl Visitor<'_> for LetterVisitor {
    type Value = Letter;

    fn expecting(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("a single uppercase letter A-Z")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Letter, E> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(first), None) => Letter::new(first)
                .ok_or_else(|| E::invalid_value(de::Unexpected::Str(value), &self)),
            _ => Err(E::invalid_value(de::Unexpected::Str(value), &self)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Letter;

    #[test]
    fn all_yields_alphabet_in_order() {
        let letters: String = Letter::all().map(Letter::as_char).collect();
        assert_eq!(letters, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        assert_eq!(Letter::all().count(), Letter::COUNT);
    }

    #[test]
    fn new_rejects_non_uppercase() {
        assert!(Letter::new('a').is_none());
        assert!(Letter::new('1').is_none());
        assert!(Letter::new('Ñ').is_none());
        assert_eq!(Letter::new('Q').map(Letter::as_char), Some('Q'));
    }

    #[test]
    fn parse_input_normalizes_case_and_whitespace() {
        assert_eq!(Letter::parse_input(" e "), Letter::new('E'));
        assert_eq!(Letter::parse_input("EE"), None);
        assert_eq!(Letter::parse_input(""), None);
    }

    #[test]
    fn wire_form_is_single_char_string() {
        let letter = Letter::new('C').unwrap();
        assert_eq!(serde_json::to_string(&letter).unwrap(), "\"C\"");
        assert_eq!(serde_json::from_str::<Letter>("\"C\"").unwrap(), letter);
        assert!(serde_json::from_str::<Letter>("\"c\"").is_err());
        assert!(serde_json::from_str::<Letter>("\"AB\"").is_err());
    }
}
