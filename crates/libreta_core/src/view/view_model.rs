//! Pure view-model derivation.
//!
//! Hosts re-render from [`derive_view_model`] after every mutation; nothing
//! here touches storage.

use crate::model::letter::Letter;
use crate::model::note::NoteColor;
use crate::model::notebook::NoteBook;
use crate::model::theme::Theme;

pub const DRAFT_PLACEHOLDER: &str = "Escribe una nota...";
pub const SUBMIT_LABEL: &str = "Agregar Nota";
const TOGGLE_TO_LIGHT_LABEL: &str = "☀️ Claro";
const TOGGLE_TO_DARK_LABEL: &str = "🌙 Oscuro";

/// Transient selection state owned by the view controller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub selected_letter: Letter,
    pub draft_text: String,
    pub selected_color: NoteColor,
    pub theme: Theme,
}

impl ViewState {
    pub fn dark_mode(&self) -> bool {
        self.theme.is_dark()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterTab {
    pub letter: Letter,
    pub selected: bool,
    pub note_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSwatch {
    pub color: NoteColor,
    pub class_name: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeToggle {
    pub theme: Theme,
    /// Label describing the mode the toggle switches to.
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCard {
    /// Position to pass back to `remove_note`.
    pub index: usize,
    pub text: String,
    pub timestamp: String,
    pub color: NoteColor,
    pub class_name: &'static str,
}

/// Everything a presentation surface needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub letters: Vec<LetterTab>,
    pub heading: String,
    pub colors: Vec<ColorSwatch>,
    pub draft: String,
    pub draft_placeholder: &'static str,
    pub submit_label: &'static str,
    pub theme: ThemeToggle,
    pub notes: Vec<NoteCard>,
}

/// Derives the view model for `state` over `notes`.
pub fn derive_view_model(state: &ViewState, notes: &NoteBook) -> ViewModel {
    let letters = Letter::all()
        .map(|letter| LetterTab {
            letter,
            selected: letter == state.selected_letter,
            note_count: notes.notes(letter).len(),
        })
        .collect();

    let colors = NoteColor::ALL
        .into_iter()
        .map(|color| ColorSwatch {
            color,
            class_name: color.class_name(),
            selected: color == state.selected_color,
        })
        .collect();

    let cards = notes
        .notes(state.selected_letter)
        .iter()
        .enumerate()
        .map(|(index, note)| NoteCard {
            index,
            text: note.text().to_string(),
            timestamp: note.timestamp().to_string(),
            color: note.color(),
            class_name: note.color().class_name(),
        })
        .collect();

    ViewModel {
        letters,
        heading: format!("Notas para la letra \"{}\"", state.selected_letter),
        colors,
        draft: state.draft_text.clone(),
        draft_placeholder: DRAFT_PLACEHOLDER,
        submit_label: SUBMIT_LABEL,
        theme: ThemeToggle {
            theme: state.theme,
            label: if state.dark_mode() {
                TOGGLE_TO_LIGHT_LABEL
            } else {
                TOGGLE_TO_DARK_LABEL
            },
        },
        notes: cards,
    }
}
