//! View controller: selection state plus note/theme use-cases.
//!
//! # Responsibility
//! - Own transient UI state (letter, draft, color, theme flag).
//! - Route user events to the note store and theme service.
//!
//! # Invariants
//! - Switching letters keeps the draft; it is shared across letters.
//! - A rejected submission leaves every field unchanged.
//! - `dark_mode` changes only after the preference write succeeded.

use crate::clock::Clock;
use crate::model::letter::Letter;
use crate::model::note::{Note, NoteColor};
use crate::model::theme::Theme;
use crate::repo::note_repo::NoteRepository;
use crate::repo::theme_repo::ThemeRepository;
use crate::repo::RepoResult;
use crate::service::note_store::{NoteStore, NoteStoreError};
use crate::service::theme_service::ThemeService;
use crate::view::view_model::{derive_view_model, ViewModel, ViewState};
use log::debug;

/// Host-side sink for visual side effects.
pub trait Presenter {
    /// Applies the light/dark mode to the presentation surface.
    fn apply_theme(&mut self, theme: Theme);
}

/// Presenter that ignores all signals.
#[derive(Debug, Default)]
pub struct NoopPresenter;

impl Presenter for NoopPresenter {
    fn apply_theme(&mut self, _theme: Theme) {}
}

/// Result of `submit_draft`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A note was stored; the draft was cleared.
    Added(Note),
    /// Draft was blank; nothing changed.
    Rejected,
}

pub struct ViewController<N, T, C, P>
where
    N: NoteRepository,
    T: ThemeRepository,
    C: Clock,
    P: Presenter,
{
    notes: NoteStore<N, C>,
    theme: ThemeService<T>,
    presenter: P,
    state: ViewState,
}

impl<N, T, C, P> ViewController<N, T, C, P>
where
    N: NoteRepository,
    T: ThemeRepository,
    C: Clock,
    P: Presenter,
{
    /// Loads notes and theme, applies the theme, selects `A`.
    pub fn init(note_repo: N, theme_repo: T, clock: C, mut presenter: P) -> Self {
        let notes = NoteStore::load(note_repo, clock);
        let theme = ThemeService::load(theme_repo);
        presenter.apply_theme(theme.theme());

        let state = ViewState {
            selected_letter: Letter::FIRST,
            draft_text: String::new(),
            selected_color: NoteColor::default(),
            theme: theme.theme(),
        };

        Self {
            notes,
            theme,
            presenter,
            state,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn note_store(&self) -> &NoteStore<N, C> {
        &self.notes
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn dark_mode(&self) -> bool {
        self.state.dark_mode()
    }

    pub fn view_model(&self) -> ViewModel {
        derive_view_model(&self.state, self.notes.notes())
    }

    pub fn select_letter(&mut self, letter: Letter) {
        self.state.selected_letter = letter;
    }

    pub fn set_draft_text(&mut self, text: impl Into<String>) {
        self.state.draft_text = text.into();
    }

    pub fn set_selected_color(&mut self, color: NoteColor) {
        self.state.selected_color = color;
    }

    /// Stores the draft under the selected letter and color.
    ///
    /// A blank draft is reported as `SubmitOutcome::Rejected`, not as an
    /// error; only storage failures surface as `Err`.
    pub fn submit_draft(&mut self) -> Result<SubmitOutcome, NoteStoreError> {
        let letter = self.state.selected_letter;
        let color = self.state.selected_color;
        match self.notes.add_note(letter, &self.state.draft_text, color) {
            Ok(note) => {
                self.state.draft_text.clear();
                Ok(SubmitOutcome::Added(note))
            }
            Err(NoteStoreError::Validation(err)) => {
                debug!("event=draft_submit module=view status=rejected reason={err}");
                Ok(SubmitOutcome::Rejected)
            }
            Err(err) => Err(err),
        }
    }

    /// Deletes the note at `index` of the selected letter.
    pub fn remove_note(&mut self, index: usize) -> Result<Note, NoteStoreError> {
        self.notes.delete_note(self.state.selected_letter, index)
    }

    /// Flips dark mode, persists it and signals the presenter.
    pub fn toggle_theme(&mut self) -> RepoResult<Theme> {
        let theme = self.theme.toggle()?;
        self.state.theme = theme;
        self.presenter.apply_theme(theme);
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::{Presenter, SubmitOutcome, ViewController};
    use crate::clock::FixedClock;
    use crate::model::letter::Letter;
    use crate::model::note::NoteColor;
    use crate::model::theme::Theme;
    use crate::repo::note_repo::KvNoteRepository;
    use crate::repo::theme_repo::{KvThemeRepository, THEME_KEY};
    use crate::store::MemoryStore;
    use chrono::NaiveDate;

    #[derive(Default)]
    struct RecordingPresenter {
        applied: Vec<Theme>,
    }

    impl Presenter for RecordingPresenter {
        fn apply_theme(&mut self, theme: Theme) {
            self.applied.push(theme);
        }
    }

    fn clock() -> FixedClock {
        FixedClock(
            NaiveDate::from_ymd_opt(2026, 1, 2)
                .unwrap()
                .and_hms_opt(3, 4, 5)
                .unwrap(),
        )
    }

    #[test]
    fn init_applies_stored_theme() {
        let store = MemoryStore::with_entries([(THEME_KEY, "dark")]);
        let controller = ViewController::init(
            KvNoteRepository::new(&store),
            KvThemeRepository::new(&store),
            clock(),
            RecordingPresenter::default(),
        );

        assert!(controller.dark_mode());
        assert_eq!(controller.presenter().applied, [Theme::Dark]);
        assert_eq!(controller.state().selected_letter, Letter::FIRST);
    }

    #[test]
    fn draft_survives_letter_switch() {
        let store = MemoryStore::new();
        let mut controller = ViewController::init(
            KvNoteRepository::new(&store),
            KvThemeRepository::new(&store),
            clock(),
            RecordingPresenter::default(),
        );

        controller.set_draft_text("shared");
        controller.select_letter(Letter::new('Q').unwrap());
        assert_eq!(controller.state().draft_text, "shared");

        controller.set_selected_color(NoteColor::Green);
        let outcome = controller.submit_draft().unwrap();
        assert!(matches!(outcome, SubmitOutcome::Added(_)));
        assert!(controller.state().draft_text.is_empty());
        assert_eq!(
            controller.note_store().notes_for(Letter::new('Q').unwrap())[0].color(),
            NoteColor::Green
        );
    }
}
