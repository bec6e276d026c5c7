//! Content source trait and error type.

use std::path::Path;

/// Error raised by a content source.
///
/// Variants carry no path context: the caller knows which path it asked for
/// and attaches that context itself, so every failure gets a uniform shape
/// regardless of backend.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SourceError {
    /// The file does not exist.
    #[error("File not found")]
    NotFound,
    /// The file exists but cannot be read.
    #[error("Permission denied")]
    PermissionDenied,
    /// Any other read failure, with the backend's message.
    #[error("{0}")]
    Other(String),
}

/// A read primitive for include targets.
///
/// Implementations must be usable from hosts that parallelize across
/// documents, hence the `Send + Sync` bound; the trait itself defines no
/// concurrency.
pub trait ContentSource: Send + Sync {
    /// Read the raw content of an absolute path.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the path does not exist or cannot be
    /// read.
    fn read(&self, path: &Path) -> Result<String, SourceError>;
}
