use chrono::NaiveDate;
use libreta_core::{
    FixedClock, KeyValueStore, KvNoteRepository, KvThemeRepository, Letter, MemoryStore,
    NoopPresenter, NoteColor, NoteStoreError, SubmitOutcome, Theme, ViewController, NOTES_KEY,
    THEME_KEY,
};
use serde_json::json;

type Controller<'s> = ViewController<
    KvNoteRepository<&'s MemoryStore>,
    KvThemeRepository<&'s MemoryStore>,
    FixedClock,
    NoopPresenter,
>;

fn controller(store: &MemoryStore) -> Controller<'_> {
    let clock = FixedClock(
        NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(17, 30, 0)
            .unwrap(),
    );
    ViewController::init(
        KvNoteRepository::new(store),
        KvThemeRepository::new(store),
        clock,
        NoopPresenter,
    )
}

#[test]
fn select_letter_then_submit_stores_note_and_clears_draft() {
    let store = MemoryStore::new();
    let mut ui = controller(&store);

    ui.select_letter(Letter::new('E').unwrap());
    ui.set_draft_text("Buy milk");
    let outcome = ui.submit_draft().unwrap();

    let SubmitOutcome::Added(note) = outcome else {
        panic!("draft should have been added");
    };
    assert_eq!(note.text(), "Buy milk");
    assert_eq!(note.color(), NoteColor::Yellow);
    assert_eq!(note.timestamp(), "16/10/2026, 17:30:00");
    assert!(ui.state().draft_text.is_empty());

    let view = ui.view_model();
    assert_eq!(view.heading, "Notas para la letra \"E\"");
    assert_eq!(view.notes.len(), 1);

    let stored: serde_json::Value =
        serde_json::from_str(&store.get(NOTES_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(stored["E"][0]["text"], json!("Buy milk"));
}

#[test]
fn blank_draft_is_rejected_and_state_kept() {
    let store = MemoryStore::new();
    let mut ui = controller(&store);
    ui.set_selected_color(NoteColor::Blue);
    ui.set_draft_text(" \n\t ");
    let before = ui.state().clone();

    assert_eq!(ui.submit_draft().unwrap(), SubmitOutcome::Rejected);
    assert_eq!(ui.state(), &before);
    assert_eq!(store.get(NOTES_KEY).unwrap(), None);
}

#[test]
fn remove_note_targets_selected_letter_only() {
    let store = MemoryStore::new();
    let mut ui = controller(&store);
    ui.set_draft_text("a1");
    ui.submit_draft().unwrap();
    ui.select_letter(Letter::new('B').unwrap());
    ui.set_draft_text("b1");
    ui.submit_draft().unwrap();

    let removed = ui.remove_note(0).unwrap();
    assert_eq!(removed.text(), "b1");
    assert!(ui.view_model().notes.is_empty());
    assert_eq!(
        ui.note_store().notes_for(Letter::FIRST).len(),
        1,
        "letter A must be untouched"
    );

    let err = ui.remove_note(0).unwrap_err();
    assert!(matches!(err, NoteStoreError::IndexOutOfRange { .. }));
}

#[test]
fn toggling_theme_twice_restores_flag_and_preference() {
    let store = MemoryStore::with_entries([(THEME_KEY, "light")]);
    let mut ui = controller(&store);
    assert!(!ui.dark_mode());

    assert_eq!(ui.toggle_theme().unwrap(), Theme::Dark);
    assert!(ui.dark_mode());
    assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));

    ui.toggle_theme().unwrap();
    assert!(!ui.dark_mode());
    assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
}

#[test]
fn theme_survives_restart() {
    let store = MemoryStore::new();
    {
        let mut ui = controller(&store);
        ui.toggle_theme().unwrap();
    }
    let ui = controller(&store);
    assert!(ui.dark_mode());
    assert_eq!(ui.view_model().theme.theme, Theme::Dark);
}
