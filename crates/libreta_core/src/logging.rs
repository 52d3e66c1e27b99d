//! Process-wide logging for the notebook hosts.
//!
//! # Invariants
//! - Logging starts at most once; repeating the same settings is a no-op and
//!   asking for different settings is an error.
//! - Initialization never panics.
//! - Note text never reaches the log, including from panics.

use flexi_logger::{FileSpec, Logger, LoggerHandle, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "libreta";

static ACTIVE: OnceCell<ActiveLogger> = OnceCell::new();

/// Validated logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LogSettings {
    level: &'static str,
    dir: PathBuf,
}

impl LogSettings {
    fn parse(level: &str, log_dir: &str) -> Result<Self, String> {
        let level = normalize_level(level)?;
        let trimmed = log_dir.trim();
        if trimmed.is_empty() {
            return Err("log_dir cannot be empty".to_string());
        }
        let dir = Path::new(trimmed);
        if !dir.is_absolute() {
            return Err(format!("log_dir must be an absolute path, got `{trimmed}`"));
        }
        Ok(Self {
            level,
            dir: dir.to_path_buf(),
        })
    }

    fn ensure_same(&self, requested: &Self) -> Result<(), String> {
        if self == requested {
            return Ok(());
        }
        Err(format!(
            "logging already running ({} at `{}`); refusing to switch to {} at `{}`",
            self.level,
            self.dir.display(),
            requested.level,
            requested.dir.display()
        ))
    }

    fn start(&self) -> Result<LoggerHandle, String> {
        std::fs::create_dir_all(&self.dir).map_err(|err| {
            format!(
                "failed to create log directory `{}`: {err}",
                self.dir.display()
            )
        })?;
        Logger::try_with_str(self.level)
            .map_err(|err| format!("invalid log level `{}`: {err}", self.level))?
            .log_to_file(
                FileSpec::default()
                    .directory(self.dir.as_path())
                    .basename(LOG_FILE_BASENAME),
            )
            .write_mode(WriteMode::BufferAndFlush)
            .append()
            .format_for_files(flexi_logger::detailed_format)
            .start()
            .map_err(|err| format!("failed to start logger: {err}"))
    }
}

struct ActiveLogger {
    settings: LogSettings,
    _handle: LoggerHandle,
}

/// Starts file logging at `level` under `log_dir`.
///
/// # Errors
/// - Unsupported `level`, or an empty or relative `log_dir`.
/// - The directory cannot be created or the logger cannot start.
/// - Logging is already running with other settings.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let requested = LogSettings::parse(level, log_dir)?;

    let active = ACTIVE.get_or_try_init(|| -> Result<ActiveLogger, String> {
        let handle = requested.start()?;
        install_panic_hook();
        info!(
            "event=logging_init module=core status=ok level={} log_dir={} version={}",
            requested.level,
            requested.dir.display(),
            env!("CARGO_PKG_VERSION")
        );
        Ok(ActiveLogger {
            settings: requested.clone(),
            _handle: handle,
        })
    })?;

    active.settings.ensure_same(&requested)
}

/// Returns `(level, log_dir)` while logging is running.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    ACTIVE
        .get()
        .map(|active| (active.settings.level, active.settings.dir.clone()))
}

/// `debug` in debug builds, `info` in release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

/// Normalizes a user-supplied level name to its canonical form.
pub fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

/// Records panic locations. Payloads are dropped since they may quote note text.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let location = info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        error!("event=panic module=core status=error location={location}");
        previous(info);
    }));
}
