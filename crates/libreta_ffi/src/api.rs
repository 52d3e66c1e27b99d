//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level notebook functions to Dart via FRB.
//! - Keep error semantics simple: envelopes with `ok` + `message`.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every call opens storage, loads, applies one operation and writes
//!   through; calls are serialized so concurrent isolates cannot lose writes.
//! - Selection state (letter, draft, color) lives on the Dart side.

use libreta_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, open_store,
    ping as ping_inner, AppConfig, KeyValueStore, KvNoteRepository, KvThemeRepository, Letter,
    Note, NoteColor, NoteStore, NoteStoreError, StorageBackend, SystemClock, ThemeService,
};
use log::warn;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

const FFI_DB_FILE_NAME: &str = "libreta_ffi.sqlite3";
static FFI_STORAGE: OnceLock<StorageBackend> = OnceLock::new();
static STORAGE_LOCK: Mutex<()> = Mutex::new(());

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One rendered note card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteItem {
    /// Position within the letter; pass back to `notes_delete`.
    pub index: u32,
    pub text: String,
    pub timestamp: String,
    /// Color class name (`bg-yellow-100|bg-green-100|bg-blue-100`).
    pub color: String,
}

/// Notes of one letter after a read or mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesResponse {
    pub ok: bool,
    pub letter: String,
    pub items: Vec<NoteItem>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl NotesResponse {
    fn success(letter: Letter, notes: &[Note], message: impl Into<String>) -> Self {
        Self {
            ok: true,
            letter: letter.to_string(),
            items: notes
                .iter()
                .enumerate()
                .map(|(index, note)| to_note_item(index, note))
                .collect(),
            message: message.into(),
        }
    }

    fn failure(letter: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            letter: letter.into(),
            items: Vec::new(),
            message: message.into(),
        }
    }
}

/// Theme preference envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeResponse {
    pub ok: bool,
    /// `dark` or `light`.
    pub theme: String,
    pub message: String,
}

/// Lists notes for one letter.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_list(letter: String) -> NotesResponse {
    let Some(parsed) = Letter::parse_input(&letter) else {
        return NotesResponse::failure(letter, "letter must be A-Z");
    };
    with_note_store(|notes| {
        let items = notes.notes_for(parsed);
        let message = format!("{} note(s).", items.len());
        Ok(NotesResponse::success(parsed, items, message))
    })
    .unwrap_or_else(|err| {
        NotesResponse::failure(parsed.to_string(), format!("notes_list failed: {err}"))
    })
}

/// Appends a note under `letter`.
///
/// `color` accepts a 1-based swatch position, a label or a class name.
/// Blank text returns `ok=false` and writes nothing.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_add(letter: String, text: String, color: String) -> NotesResponse {
    let Some(parsed) = Letter::parse_input(&letter) else {
        return NotesResponse::failure(letter, "letter must be A-Z");
    };
    let Some(color) = NoteColor::parse_input(&color) else {
        return NotesResponse::failure(letter, format!("unknown color `{color}`"));
    };
    with_note_store(|notes| match notes.add_note(parsed, &text, color) {
        Ok(_) => Ok(NotesResponse::success(
            parsed,
            notes.notes_for(parsed),
            "Note added.",
        )),
        Err(err) if err.is_rejection() => Ok(NotesResponse::failure(
            parsed.to_string(),
            format!("notes_add rejected: {err}"),
        )),
        Err(err) => Err(err.to_string()),
    })
    .unwrap_or_else(|err| {
        NotesResponse::failure(parsed.to_string(), format!("notes_add failed: {err}"))
    })
}

/// Deletes the note at `index` under `letter`.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_delete(letter: String, index: u32) -> NotesResponse {
    let Some(parsed) = Letter::parse_input(&letter) else {
        return NotesResponse::failure(letter, "letter must be A-Z");
    };
    with_note_store(|notes| match notes.delete_note(parsed, index as usize) {
        Ok(_) => Ok(NotesResponse::success(
            parsed,
            notes.notes_for(parsed),
            "Note deleted.",
        )),
        Err(err @ NoteStoreError::IndexOutOfRange { .. }) => Ok(NotesResponse::failure(
            parsed.to_string(),
            format!("notes_delete rejected: {err}"),
        )),
        Err(err) => Err(err.to_string()),
    })
    .unwrap_or_else(|err| {
        NotesResponse::failure(parsed.to_string(), format!("notes_delete failed: {err}"))
    })
}

/// Reads the stored theme preference.
#[flutter_rust_bridge::frb(sync)]
pub fn theme_get() -> ThemeResponse {
    with_store(|store| {
        let service = ThemeService::load(KvThemeRepository::new(store));
        Ok(ThemeResponse {
            ok: true,
            theme: service.theme().to_string(),
            message: String::new(),
        })
    })
    .unwrap_or_else(|err| theme_failure(format!("theme_get failed: {err}")))
}

/// Flips and persists the theme preference.
#[flutter_rust_bridge::frb(sync)]
pub fn theme_toggle() -> ThemeResponse {
    with_store(|store| {
        let mut service = ThemeService::load(KvThemeRepository::new(store));
        let theme = service.toggle().map_err(|err| err.to_string())?;
        Ok(ThemeResponse {
            ok: true,
            theme: theme.to_string(),
            message: "Theme saved.".to_string(),
        })
    })
    .unwrap_or_else(|err| theme_failure(format!("theme_toggle failed: {err}")))
}

fn theme_failure(message: String) -> ThemeResponse {
    ThemeResponse {
        ok: false,
        theme: String::new(),
        message,
    }
}

fn resolve_storage() -> &'static StorageBackend {
    FFI_STORAGE.get_or_init(|| match AppConfig::from_env() {
        Ok(AppConfig {
            storage: StorageBackend::Memory,
            ..
        }) => {
            warn!("event=ffi_storage module=ffi status=degraded reason=memory_not_persistent");
            default_storage()
        }
        Ok(config) => config.storage,
        Err(err) => {
            warn!("event=ffi_storage module=ffi status=degraded error={err}");
            default_storage()
        }
    })
}

fn default_storage() -> StorageBackend {
    StorageBackend::Sqlite(std::env::temp_dir().join(PathBuf::from(FFI_DB_FILE_NAME)))
}

fn with_store<T>(f: impl FnOnce(&dyn KeyValueStore) -> Result<T, String>) -> Result<T, String> {
    let _guard = STORAGE_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    let store =
        open_store(resolve_storage()).map_err(|err| format!("storage open failed: {err}"))?;
    f(store.as_ref())
}

type FfiNoteStore<'s> = NoteStore<KvNoteRepository<&'s dyn KeyValueStore>, SystemClock>;

fn with_note_store<T>(
    f: impl FnOnce(&mut FfiNoteStore<'_>) -> Result<T, String>,
) -> Result<T, String> {
    with_store(|store| {
        let mut notes = NoteStore::load(KvNoteRepository::new(store), SystemClock);
        f(&mut notes)
    })
}

fn to_note_item(index: usize, note: &Note) -> NoteItem {
    NoteItem {
        index: u32::try_from(index).unwrap_or(u32::MAX),
        text: note.text().to_string(),
        timestamp: note.timestamp().to_string(),
        color: note.color().class_name().to_string(),
    }
}
