//! Error type shared by the compositor, the driver and logging setup.
//!
//! Bounds mismatches inside widgets are never errors: they render blanks instead.
//! Everything here is fatal to the render loop.

use std::io;
use std::path::PathBuf;

/// Errors that stop the compositor.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The terminal could not be queried or put into raw/alternate-screen mode.
    #[error("terminal initialisation failed: {0}")]
    Terminal(#[source] io::Error),

    /// Flushing a frame or reading the next terminal event failed.
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),

    /// The log directory could not be created.
    #[error("cannot create log directory {}: {source}", path.display())]
    LogDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A global tracing subscriber was already installed.
    #[error("logging already initialised")]
    LoggingInstalled,
}

/// Result alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
