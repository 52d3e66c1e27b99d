//! Theme preference service.
//!
//! # Invariants
//! - Absent or unreadable preference loads as `Theme::Light`.
//! - `toggle` writes the new value before committing it in memory.

use crate::model::theme::Theme;
use crate::repo::theme_repo::ThemeRepository;
use crate::repo::RepoResult;
use log::{error, info, warn};

/// Loaded theme preference with write-on-toggle semantics.
pub struct ThemeService<R: ThemeRepository> {
    repo: R,
    theme: Theme,
}

impl<R: ThemeRepository> ThemeService<R> {
    /// Loads the stored preference. Never fails.
    pub fn load(repo: R) -> Self {
        let theme = match repo.load() {
            Ok(Some(theme)) => theme,
            Ok(None) => Theme::default(),
            Err(err) => {
                warn!(
                    "event=theme_load module=theme status=degraded fallback={} error={}",
                    Theme::default(),
                    err
                );
                Theme::default()
            }
        };
        info!("event=theme_load module=theme status=ok theme={theme}");
        Self { repo, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flips and persists the preference, returning the new value.
    pub fn toggle(&mut self) -> RepoResult<Theme> {
        let next = self.theme.toggled();
        if let Err(err) = self.repo.save(next) {
            error!("event=theme_toggle module=theme status=error error={err}");
            return Err(err);
        }
        self.theme = next;
        info!("event=theme_toggle module=theme status=ok theme={next}");
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::ThemeService;
    use crate::model::theme::Theme;
    use crate::repo::theme_repo::{KvThemeRepository, THEME_KEY};
    use crate::store::{KeyValueStore, MemoryStore};

    #[test]
    fn garbage_value_loads_as_light() {
        let store = MemoryStore::with_entries([(THEME_KEY, "sepia")]);
        let service = ThemeService::load(KvThemeRepository::new(&store));
        assert_eq!(service.theme(), Theme::Light);
    }

    #[test]
    fn toggle_persists_each_flip() {
        let store = MemoryStore::with_entries([(THEME_KEY, "dark")]);
        let mut service = ThemeService::load(KvThemeRepository::new(&store));
        assert_eq!(service.theme(), Theme::Dark);

        assert_eq!(service.toggle().unwrap(), Theme::Light);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
        assert_eq!(service.toggle().unwrap(), Theme::Dark);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }
}
