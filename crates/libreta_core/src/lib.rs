//! Core domain logic for Libreta, the letter-indexed notebook.
//! This crate is the single source of truth for notebook invariants.

pub mod clock;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;
pub mod view;

pub use clock::{Clock, FixedClock, SystemClock, TIMESTAMP_FORMAT};
pub use config::{open_store, AppConfig, ConfigError, StorageBackend};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::letter::Letter;
pub use model::note::{Note, NoteColor, NoteValidationError};
pub use model::notebook::NoteBook;
pub use model::theme::Theme;
pub use repo::note_repo::{KvNoteRepository, NoteRepository, NOTES_KEY};
pub use repo::theme_repo::{KvThemeRepository, ThemeRepository, THEME_KEY};
pub use repo::{RepoError, RepoResult};
pub use service::note_store::{NoteStore, NoteStoreError};
pub use service::theme_service::ThemeService;
pub use store::{FileStore, KeyValueStore, MemoryStore, SqliteStore, StoreError, StoreResult};
pub use view::controller::{NoopPresenter, Presenter, SubmitOutcome, ViewController};
pub use view::view_model::{derive_view_model, ViewModel, ViewState};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
