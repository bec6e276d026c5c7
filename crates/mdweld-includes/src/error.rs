//! Error types for include processing.

use std::path::Path;

use mdweld_storage::SourceError;

use crate::anchor::AnchorError;

/// Failure raised while resolving a single include directive.
#[derive(Debug, thiserror::Error)]
pub enum IncludeFailure {
    /// The target file could not be read.
    #[error("{0}")]
    Read(#[from] SourceError),
    /// The requested anchor could not be extracted.
    #[error("{0}")]
    Anchor(#[from] AnchorError),
}

/// Error produced when a document's includes cannot be processed.
///
/// Every failure gets the same composed, greppable shape tying the
/// underlying cause back to the offending document and the resolved target,
/// even though the read and extraction primitives know nothing about
/// documents:
///
/// ```text
/// Unable to process includes for <document>. Unable to include file '<target>'. <cause>
/// ```
#[derive(Debug, thiserror::Error)]
#[error("Unable to process includes for {document}. Unable to include file '{target}'. {cause}")]
pub struct IncludeError {
    document: String,
    target: String,
    #[source]
    cause: IncludeFailure,
}

impl IncludeError {
    pub(crate) fn new(document: &Path, target: &Path, cause: IncludeFailure) -> Self {
        Self {
            document: document.display().to_string(),
            target: target.display().to_string(),
            cause,
        }
    }

    /// Path of the document being processed.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Resolved absolute path of the include target.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_composed_message_for_missing_file() {
        let err = IncludeError::new(
            &PathBuf::from("/site/test.md"),
            &PathBuf::from("/site/missing.md"),
            SourceError::NotFound.into(),
        );

        assert_eq!(
            err.to_string(),
            "Unable to process includes for /site/test.md. \
             Unable to include file '/site/missing.md'. File not found",
        );
    }

    #[test]
    fn test_composed_message_for_missing_anchor() {
        let err = IncludeError::new(
            &PathBuf::from("/site/test.md"),
            &PathBuf::from("/site/included.md"),
            AnchorError::NotFound("missingAnchor".to_owned()).into(),
        );

        assert_eq!(
            err.to_string(),
            "Unable to process includes for /site/test.md. \
             Unable to include file '/site/included.md'. Anchor 'missingAnchor' not found",
        );
    }
}
