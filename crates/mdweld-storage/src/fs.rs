//! Filesystem content source.

use std::fs;
use std::io;
use std::path::Path;

use crate::source::{ContentSource, SourceError};

/// Content source backed by the local filesystem.
///
/// Reads are blocking and synchronous; no caching is performed, so every
/// directive sees the file as it currently exists on disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl ContentSource for FsSource {
    fn read(&self, path: &Path) -> Result<String, SourceError> {
        tracing::debug!(path = %path.display(), "reading include target");
        fs::read_to_string(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => SourceError::NotFound,
            io::ErrorKind::PermissionDenied => SourceError::PermissionDenied,
            _ => SourceError::Other(err.to_string()),
        })
    }
}
