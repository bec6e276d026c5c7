//! In-memory content source for testing.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::source::{ContentSource, SourceError};

/// In-memory content source.
///
/// Stores file contents in a map keyed by path. Use the builder method to
/// seed fixtures.
///
/// # Example
///
/// ```ignore
/// use std::path::Path;
/// use mdweld_storage::{ContentSource, MemorySource};
///
/// let source = MemorySource::new().with_file("/docs/snippet.rs", "fn main() {}\n");
/// assert_eq!(
///     source.read(Path::new("/docs/snippet.rs")).unwrap(),
///     "fn main() {}\n",
/// );
/// ```
#[derive(Debug, Default)]
pub struct MemorySource {
    files: HashMap<PathBuf, String>,
}

impl MemorySource {
    /// Create an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with the given content.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }
}

impl ContentSource for MemorySource {
    fn read(&self, path: &Path) -> Result<String, SourceError> {
        self.files.get(path).cloned().ok_or(SourceError::NotFound)
    }
}
