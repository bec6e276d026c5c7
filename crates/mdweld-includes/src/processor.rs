//! The include engine.

use std::path::{Path, PathBuf};

use mdweld_markdown::Document;
use mdweld_storage::{ContentSource, FsSource};

use crate::anchor::extract;
use crate::directive::{Anchor, parse_directives};
use crate::error::{IncludeError, IncludeFailure};
use crate::resolver::{IncludeOptions, resolve};

/// Resolves include directives inside a document's fenced code blocks.
///
/// The processor walks code blocks in document order and, for each
/// directive match, resolves the path, reads the target through the
/// injected [`ContentSource`], extracts the requested anchor, and splices
/// the result over the exact directive span. Spans are computed against the
/// block's original text, so one substitution never affects another's
/// position; everything outside the matched spans stays byte-identical.
///
/// Processing is fail-fast: the first failed read or extraction aborts the
/// document and no partially substituted output is produced for it.
/// Configuration is immutable after construction, so one processor can be
/// reused across documents.
pub struct IncludeProcessor<S = FsSource> {
    options: IncludeOptions,
    source: S,
}

impl IncludeProcessor {
    /// Create a processor reading include targets from the filesystem.
    #[must_use]
    pub fn new(options: IncludeOptions) -> Self {
        Self::with_source(options, FsSource)
    }
}

impl<S: ContentSource> IncludeProcessor<S> {
    /// Create a processor with an injected content source.
    #[must_use]
    pub fn with_source(options: IncludeOptions, source: S) -> Self {
        Self { options, source }
    }

    /// Resolve all include directives in `document`, in place.
    ///
    /// # Errors
    ///
    /// Returns [`IncludeError`] on the first unreadable target or failed
    /// anchor extraction, naming the document and the resolved path.
    pub fn process(&self, document: &mut Document) -> Result<(), IncludeError> {
        let document_path: PathBuf = document.path().to_owned();
        for block in document.code_blocks_mut() {
            if let Some(expanded) = self.expand(&document_path, &block.literal)? {
                block.literal = expanded;
            }
        }
        Ok(())
    }

    /// Expand every directive in a block's literal text.
    ///
    /// Returns `Ok(None)` when the text contains no directives, leaving the
    /// block untouched.
    fn expand(&self, document: &Path, text: &str) -> Result<Option<String>, IncludeError> {
        let directives = parse_directives(text);
        if directives.is_empty() {
            return Ok(None);
        }

        let mut out = String::with_capacity(text.len());
        let mut cursor = 0;
        for directive in directives {
            let target = resolve(document, &directive.path, &self.options);
            let content = self
                .include(&target, &directive.anchor)
                .map_err(|cause| IncludeError::new(document, &target, cause))?;

            out.push_str(&text[cursor..directive.span.start]);
            out.push_str(&content);
            cursor = directive.span.end;
        }
        out.push_str(&text[cursor..]);

        Ok(Some(out))
    }

    /// Read one target and extract the requested anchor.
    fn include(&self, target: &Path, anchor: &Anchor) -> Result<String, IncludeFailure> {
        let raw = self.source.read(target)?;
        Ok(extract(&raw, anchor)?)
    }
}

#[cfg(test)]
mod tests {
    use mdweld_storage::MemorySource;
    use pretty_assertions::assert_eq;

    use super::*;

    const DOC_PATH: &str = "/site/test.md";

    fn processor(source: MemorySource) -> IncludeProcessor<MemorySource> {
        IncludeProcessor::with_source(IncludeOptions::new("/site"), source)
    }

    fn run(source: MemorySource, markdown: &str) -> Result<String, IncludeError> {
        let mut doc = Document::parse(DOC_PATH, markdown);
        processor(source).process(&mut doc)?;
        Ok(doc.to_markdown())
    }

    #[test]
    fn test_whole_file_include() {
        let source = MemorySource::new()
            .with_file("/site/included-file.md", "This is the included content.");

        let output = run(source, "```markdown\n{{#include ./included-file.md}}\n```\n").unwrap();
        assert_eq!(output, "```markdown\nThis is the included content.\n```\n");
    }

    #[test]
    fn test_multiple_includes_in_one_block() {
        let source = MemorySource::new().with_file("/site/x.md", "C");

        let output = run(
            source,
            "```markdown\n{{#include ./x.md}}\n{{#include ./x.md}}\n```\n",
        )
        .unwrap();
        assert_eq!(output, "```markdown\nC\nC\n```\n");
    }

    #[test]
    fn test_line_range_include() {
        let source = MemorySource::new()
            .with_file("/site/lines.md", "Line 1\nLine 2\nLine 3\nLine 4\nLine 5");

        let output = run(source, "```markdown\n{{#include ./lines.md:2:4}}\n```\n").unwrap();
        assert_eq!(output, "```markdown\nLine 2\nLine 3\nLine 4\n```\n");
    }

    #[test]
    fn test_named_anchor_include() {
        let source = MemorySource::new().with_file(
            "/site/code.rs",
            "// ANCHOR: main\nfn main() {}\n// ANCHOR_END: main\n",
        );

        let output = run(source, "```rust\n{{#include ./code.rs:main}}\n```\n").unwrap();
        assert_eq!(output, "```rust\nfn main() {}\n```\n");
    }

    #[test]
    fn test_alias_and_relative_paths_are_equivalent() {
        let source = || MemorySource::new().with_file("/site/x.md", "content");

        let via_alias = run(source(), "```md\n{{#include @/x.md}}\n```\n").unwrap();
        let via_relative = run(source(), "```md\n{{#include ./x.md}}\n```\n").unwrap();
        assert_eq!(via_alias, via_relative);
    }

    #[test]
    fn test_surrounding_block_text_is_untouched() {
        let source = MemorySource::new().with_file("/site/x.md", "X");

        let output = run(
            source,
            "```md\nbefore include\n{{#include ./x.md}}\nafter include\n```\n",
        )
        .unwrap();
        assert_eq!(output, "```md\nbefore include\nX\nafter include\n```\n");
    }

    #[test]
    fn test_text_outside_code_blocks_is_not_scanned() {
        // Directive-looking text in prose is not an inclusion request.
        let markdown = "{{#include ./x.md}}\n\n```md\nplain\n```\n";

        let output = run(MemorySource::new(), markdown).unwrap();
        assert_eq!(output, markdown);
    }

    #[test]
    fn test_malformed_directive_passes_through() {
        let markdown = "```md\n{{#import ./x.md}}\n{{#include ./x.md:1:2:3}}\n```\n";

        let output = run(MemorySource::new(), markdown).unwrap();
        assert_eq!(output, markdown);
    }

    #[test]
    fn test_missing_file_reports_document_and_target() {
        let err = run(
            MemorySource::new(),
            "```markdown\n{{#include ./invalid-file.md}}\n```\n",
        )
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Unable to process includes for /site/test.md. \
             Unable to include file '/site/invalid-file.md'. File not found",
        );
    }

    #[test]
    fn test_missing_anchor_reports_document_and_target() {
        let source = MemorySource::new().with_file("/site/included-file.md", "plain content");

        let err = run(
            source,
            "```markdown\n{{#include ./included-file.md:missingAnchor}}\n```\n",
        )
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Unable to process includes for /site/test.md. \
             Unable to include file '/site/included-file.md'. Anchor 'missingAnchor' not found",
        );
    }

    #[test]
    fn test_out_of_range_lines_fail() {
        let source = MemorySource::new().with_file("/site/short.md", "only line");

        let err = run(source, "```md\n{{#include ./short.md:1:9}}\n```\n").unwrap_err();
        assert!(err.to_string().contains("out of bounds"));
        assert_eq!(err.target(), "/site/short.md");
    }

    #[test]
    fn test_failure_aborts_without_partial_substitution() {
        let source = MemorySource::new().with_file("/site/good.md", "GOOD");
        let markdown = "```md\n{{#include ./good.md}}\n{{#include ./missing.md}}\n```\n";

        let mut doc = Document::parse(DOC_PATH, markdown);
        let err = processor(source).process(&mut doc).unwrap_err();

        assert_eq!(err.target(), "/site/missing.md");
        assert_eq!(doc.to_markdown(), markdown);
    }

    #[test]
    fn test_second_run_is_a_noop() {
        let source = || MemorySource::new().with_file("/site/x.md", "plain text");

        let once = run(source(), "```md\n{{#include ./x.md}}\n```\n").unwrap();
        let twice = run(source(), &once).unwrap();
        assert_eq!(twice, once);
    }

    #[test]
    fn test_parent_relative_include() {
        let source = MemorySource::new().with_file("/shared/x.md", "shared");

        let mut doc = Document::parse(
            "/site/guide/page.md",
            "```md\n{{#include ../../shared/x.md}}\n```\n",
        );
        processor(source).process(&mut doc).unwrap();
        assert_eq!(doc.to_markdown(), "```md\nshared\n```\n");
    }

    #[test]
    fn test_filesystem_backed_include() {
        let dir = tempfile::tempdir().unwrap();
        let doc_path = dir.path().join("test.md");
        std::fs::write(dir.path().join("x.md"), "from disk").unwrap();

        let fs_processor = IncludeProcessor::new(IncludeOptions::new(dir.path()));
        let mut doc = Document::parse(&doc_path, "```md\n{{#include ./x.md}}\n```\n");
        fs_processor.process(&mut doc).unwrap();

        assert_eq!(doc.to_markdown(), "```md\nfrom disk\n```\n");
    }
}
