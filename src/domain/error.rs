//! Error types for the Lorekeeper plugin.
//!
//! This module defines the centralized error type [`LorekeeperError`] and a type alias
//! [`Result`] used by the fallible layers of the plugin (catalog loading, theme
//! parsing, worker communication). The list and render-dispatch core never fails:
//! out-of-range input is clamped there instead of reported.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// The main error type for Lorekeeper plugin operations.
///
/// Most variants carry a description of what went wrong. I/O failures keep
/// the path they were about, since the message is shown to the user.
///
/// # Examples
///
/// ```
/// use lorekeeper::LorekeeperError;
///
/// fn validate_paths(paths: &[String]) -> Result<(), LorekeeperError> {
///     if paths.is_empty() {
///         return Err(LorekeeperError::Config("no catalog paths configured".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_paths(&[]).is_err());
/// ```
#[derive(Debug, Error)]
pub enum LorekeeperError {
    /// A catalog file could not be interpreted.
    ///
    /// Raised when a catalog path is missing or its content is not a
    /// recognised catalog layout.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Reading `path` failed.
    #[error("IO error: {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The embedded palette could not be parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LorekeeperError {
    /// Wraps an I/O failure on `path`.
    #[must_use]
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// A specialized `Result` type for Lorekeeper operations.
pub type Result<T> = std::result::Result<T, LorekeeperError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn io_errors_name_the_file() {
        let err = LorekeeperError::io(Path::new("/host/srd.json"), io::Error::from(io::ErrorKind::NotFound));
        let message = err.to_string();
        assert!(message.starts_with("IO error: /host/srd.json: "), "{message}");
        assert!(std::error::Error::source(&err).is_some());
    }
}
