use chrono::NaiveDate;
use libreta_core::db::migrations::latest_version;
use libreta_core::db::{open_db, DbError};
use libreta_core::{
    open_store, FileStore, FixedClock, KeyValueStore, KvNoteRepository, Letter, NoteColor,
    NoteStore, SqliteStore, StorageBackend, StoreError,
};
use rusqlite::Connection;

fn clock() -> FixedClock {
    FixedClock(
        NaiveDate::from_ymd_opt(2026, 5, 20)
            .unwrap()
            .and_hms_opt(11, 0, 0)
            .unwrap(),
    )
}

fn write_and_reload(store: &dyn KeyValueStore) {
    let letter = Letter::new('F').unwrap();
    let mut notes = NoteStore::load(KvNoteRepository::new(store), clock());
    notes.add_note(letter, "fresas", NoteColor::Green).unwrap();
    notes.add_note(letter, "frijoles", NoteColor::Blue).unwrap();
    notes.delete_note(letter, 0).unwrap();

    let reloaded = NoteStore::load(KvNoteRepository::new(store), clock());
    assert_eq!(reloaded.notes(), notes.notes());
    assert_eq!(reloaded.notes_for(letter)[0].text(), "frijoles");
}

#[test]
fn file_store_round_trips_notebook() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path().join("data")).unwrap();
    write_and_reload(&store);
    assert!(dir.path().join("data").join("libretaNotas.value").exists());
}

#[test]
fn sqlite_store_round_trips_notebook_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("libreta.sqlite3");
    {
        let store = SqliteStore::open(&path).unwrap();
        write_and_reload(&store);
    }
    let reopened = SqliteStore::open(&path).unwrap();
    let notes = NoteStore::load(KvNoteRepository::new(&reopened), clock());
    assert_eq!(notes.notes().total_notes(), 1);
}

#[test]
fn open_store_builds_configured_backend() {
    let dir = tempfile::tempdir().unwrap();
    let sqlite = open_store(&StorageBackend::Sqlite(dir.path().join("nested/l.db"))).unwrap();
    assert_eq!(sqlite.backend_name(), "sqlite");
    let file = open_store(&StorageBackend::File(dir.path().join("files"))).unwrap();
    assert_eq!(file.backend_name(), "file");
    let memory = open_store(&StorageBackend::Memory).unwrap();
    write_and_reload(memory.as_ref());
}

#[test]
fn open_db_applies_migrations_idempotently() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("libreta.db");

    drop(open_db(&path).unwrap());
    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn), latest_version());
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'kv_entries');",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1);
}

#[test]
fn newer_schema_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match SqliteStore::open(&path) {
        Err(StoreError::Db(DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        })) => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("newer schema must be rejected"),
    }
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}
