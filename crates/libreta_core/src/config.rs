//! Runtime configuration resolved from environment variables.
//!
//! # Responsibility
//! - Pick the storage backend and its location.
//! - Carry log level/directory for hosts that enable file logging.
//!
//! # Invariants
//! - Unset variables fall back to defaults; set-but-invalid values are errors.
//! - Resolution is a pure function of the lookup closure.

use crate::logging::{default_log_level, normalize_level};
use crate::store::{FileStore, KeyValueStore, MemoryStore, SqliteStore, StoreResult};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_STORAGE: &str = "LIBRETA_STORAGE";
pub const ENV_DATA_PATH: &str = "LIBRETA_DATA_PATH";
pub const ENV_LOG_LEVEL: &str = "LIBRETA_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "LIBRETA_LOG_DIR";

const DEFAULT_SQLITE_FILE_NAME: &str = "libreta.sqlite3";
const DEFAULT_FILE_STORE_DIR_NAME: &str = "libreta_store";

/// Selected storage backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    File(PathBuf),
    Sqlite(PathBuf),
}

/// Resolved host configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub storage: StorageBackend,
    pub log_level: &'static str,
    /// Absolute directory for log files; `None` keeps logging off.
    pub log_dir: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownBackend(String),
    InvalidLogLevel(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownBackend(value) => write!(
                f,
                "unknown {ENV_STORAGE} value `{value}`; expected memory|file|sqlite"
            ),
            Self::InvalidLogLevel(message) => write!(f, "{message}"),
        }
    }
}

impl Error for ConfigError {}

impl AppConfig {
    /// Resolves configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let data_path = non_empty(ENV_DATA_PATH).map(PathBuf::from);
        let backend = non_empty(ENV_STORAGE).unwrap_or_else(|| "sqlite".to_string());
        let storage = match backend.to_ascii_lowercase().as_str() {
            "memory" => StorageBackend::Memory,
            "file" => StorageBackend::File(
                data_path.unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_FILE_STORE_DIR_NAME)),
            ),
            "sqlite" => StorageBackend::Sqlite(
                data_path.unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_SQLITE_FILE_NAME)),
            ),
            _ => return Err(ConfigError::UnknownBackend(backend)),
        };

        let log_level = match non_empty(ENV_LOG_LEVEL) {
            Some(level) => normalize_level(&level).map_err(ConfigError::InvalidLogLevel)?,
            None => default_log_level(),
        };

        Ok(Self {
            storage,
            log_level,
            log_dir: non_empty(ENV_LOG_DIR),
        })
    }
}

/// Opens the configured backend.
pub fn open_store(backend: &StorageBackend) -> StoreResult<Box<dyn KeyValueStore>> {
    let store: Box<dyn KeyValueStore> = match backend {
        StorageBackend::Memory => Box::new(MemoryStore::new()),
        StorageBackend::File(dir) => Box::new(FileStore::open(dir)?),
        StorageBackend::Sqlite(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            Box::new(SqliteStore::open(path)?)
        }
    };
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ConfigError, StorageBackend, ENV_DATA_PATH, ENV_LOG_LEVEL, ENV_STORAGE};
    use crate::logging::default_log_level;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn resolve(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_to_sqlite_in_temp_dir() {
        let config = resolve(&[]).unwrap();
        match config.storage {
            StorageBackend::Sqlite(path) => assert!(path.ends_with("libreta.sqlite3")),
            other => panic!("unexpected backend: {other:?}"),
        }
        assert_eq!(config.log_level, default_log_level());
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn explicit_backend_and_path_are_used() {
        let config = resolve(&[
            (ENV_STORAGE, " File "),
            (ENV_DATA_PATH, "/var/lib/libreta"),
            (ENV_LOG_LEVEL, "WARNING"),
        ])
        .unwrap();
        assert_eq!(
            config.storage,
            StorageBackend::File(PathBuf::from("/var/lib/libreta"))
        );
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert_eq!(
            resolve(&[(ENV_STORAGE, "redis")]).unwrap_err(),
            ConfigError::UnknownBackend("redis".to_string())
        );
        assert!(matches!(
            resolve(&[(ENV_LOG_LEVEL, "loud")]).unwrap_err(),
            ConfigError::InvalidLogLevel(_)
        ));
    }
}
