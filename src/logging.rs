//! Tracing setup and the panic hook.
//!
//! The terminal is in raw mode on the alternate screen while the compositor
//! runs, so logs never go to stdout or stderr. They are written to
//! `<log_dir>/termpane.log` through a non-blocking appender instead. The filter
//! comes from `TERMPANE_LOG` (`EnvFilter` syntax) and defaults to `termpane=info`.

use std::path::{Path, PathBuf};
use std::sync::Once;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::compositor::CompositorConfig;
use crate::error::{Error, Result};
use crate::render::driver;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "TERMPANE_LOG";

/// Name of the log file inside the log directory.
pub const LOG_FILE: &str = "termpane.log";

const DEFAULT_FILTER: &str = "termpane=info";

/// Keeps the background log writer alive. Dropping it flushes pending records.
pub struct LoggingGuard {
    _guard: WorkerGuard,
    log_file: PathBuf,
}

impl LoggingGuard {
    /// Path of the file being written.
    pub fn log_file(&self) -> &Path {
        &self.log_file
    }
}

/// Build the filter from `TERMPANE_LOG`, falling back to the default.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber writing to the configured log directory.
///
/// The previous log file is truncated on each start.
pub fn init(config: &CompositorConfig) -> Result<LoggingGuard> {
    let dir = &config.log_dir;
    std::fs::create_dir_all(dir).map_err(|source| Error::LogDir {
        path: dir.clone(),
        source,
    })?;
    let log_file = dir.join(LOG_FILE);
    let stale = remove_stale_log(&log_file);

    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|_| Error::LoggingInstalled)?;

    tracing::info!(target: "termpane::logging", file = %log_file.display(), "logging initialised");
    if let Err(err) = stale {
        tracing::warn!(target: "termpane::logging", %err, "previous log file not removed; appending");
    }
    Ok(LoggingGuard {
        _guard: guard,
        log_file,
    })
}

/// Delete the log file left by the previous run. A missing file is fine.
fn remove_stale_log(log_file: &Path) -> std::io::Result<()> {
    match std::fs::remove_file(log_file) {
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

/// Restore the terminal and log the panic before the default hook prints it.
///
/// Installing more than once is a no-op.
pub fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            driver::restore_terminal();
            tracing::error!(target: "termpane::panic", %info, "panic");
            default_panic(info);
        }));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_parses() {
        assert!(DEFAULT_FILTER.parse::<EnvFilter>().is_ok());
    }

    #[test]
    fn stale_log_removal() {
        let dir = std::env::temp_dir().join(format!("termpane-stale-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let file = dir.join(LOG_FILE);
        assert!(remove_stale_log(&file).is_ok());
        std::fs::write(&file, b"old run").unwrap();
        assert!(remove_stale_log(&file).is_ok());
        assert!(!file.exists());

        // A directory where the log file should be cannot be removed as a file.
        std::fs::create_dir(&file).unwrap();
        assert!(remove_stale_log(&file).is_err());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn unwritable_log_dir_is_reported() {
        // A regular file cannot become a directory.
        let file = std::env::temp_dir().join(format!("termpane-not-a-dir-{}", std::process::id()));
        std::fs::write(&file, b"x").unwrap();
        let config = CompositorConfig::new().with_log_dir(file.join("logs"));
        let err = init(&config).err().unwrap();
        assert!(matches!(err, Error::LogDir { .. }));
        std::fs::remove_file(&file).unwrap();
    }
}
