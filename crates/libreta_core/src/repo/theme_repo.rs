//! Theme preference repository.
//!
//! The preference is stored as a raw `dark`/`light` string, not JSON.

use crate::model::theme::Theme;
use crate::repo::{RepoError, RepoResult};
use crate::store::KeyValueStore;

/// Storage key holding the theme preference.
pub const THEME_KEY: &str = "theme";

/// Snapshot repository for the theme preference.
pub trait ThemeRepository {
    /// Reads the stored preference; `Ok(None)` when never saved.
    fn load(&self) -> RepoResult<Option<Theme>>;
    fn save(&self, theme: Theme) -> RepoResult<()>;
}

/// `ThemeRepository` persisting through any `KeyValueStore`.
pub struct KvThemeRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> KvThemeRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: KeyValueStore> ThemeRepository for KvThemeRepository<S> {
    fn load(&self) -> RepoResult<Option<Theme>> {
        let Some(raw) = self.store.get(THEME_KEY)? else {
            return Ok(None);
        };
        Theme::from_stored(raw.as_str())
            .map(Some)
            .ok_or_else(|| RepoError::InvalidData(format!("unknown theme value `{raw}`")))
    }

    fn save(&self, theme: Theme) -> RepoResult<()> {
        self.store.set(THEME_KEY, theme.as_str())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{KvThemeRepository, ThemeRepository, THEME_KEY};
    use crate::model::theme::Theme;
    use crate::store::{KeyValueStore, MemoryStore};

    #[test]
    fn stores_raw_string_value() {
        let store = MemoryStore::new();
        let repo = KvThemeRepository::new(&store);
        repo.save(Theme::Dark).unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert_eq!(repo.load().unwrap(), Some(Theme::Dark));
    }

    #[test]
    fn unknown_value_is_invalid_data() {
        let store = MemoryStore::with_entries([(THEME_KEY, "\"dark\"")]);
        assert!(KvThemeRepository::new(&store).load().is_err());
    }
}
