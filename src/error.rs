//! Crate-wide error type.
//!
//! The browsing core itself never fails; errors only come from the edges
//! (loading a library root, reading settings, setting up log output).

use std::path::PathBuf;

/// Result alias carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested library root does not exist or is not a directory.
    #[error("library root {} is not a readable directory", path.display())]
    LibraryRoot { path: PathBuf },

    #[error("configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("logging setup failed: {0}")]
    Logging(String),
}
