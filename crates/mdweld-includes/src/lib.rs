//! Include directive resolution for fenced code blocks.
//!
//! Resolves `{{#include <path>[:<anchor>]}}` directives found inside the
//! fenced code blocks of a markdown [`Document`](mdweld_markdown::Document),
//! replacing each directive with the referenced file's content: the whole
//! file, a 1-based inclusive line range (`:start:end`), or a named region
//! delimited by `ANCHOR: <name>` / `ANCHOR_END: <name>` marker lines.
//!
//! The engine runs as one stage of a sequential document pipeline. It only
//! rewrites code-block payloads, resolves every directive independently in
//! document order, and fails fast: the first unreadable file or missing
//! anchor aborts the document with an error naming both the document and
//! the resolved target path. Text that merely resembles a directive passes
//! through untouched.
//!
//! Paths are resolved relative to the including document, or against a
//! configured project root when they start with the root alias prefix
//! (default `@/`). Resolution is purely lexical; existence is only checked
//! by the injected [`ContentSource`](mdweld_storage::ContentSource) read.
//!
//! # Example
//!
//! ```
//! use mdweld_includes::{IncludeOptions, IncludeProcessor};
//! use mdweld_markdown::Document;
//! use mdweld_storage::MemorySource;
//!
//! let source = MemorySource::new().with_file("/docs/hello.rs", "fn main() {}");
//! let processor =
//!     IncludeProcessor::with_source(IncludeOptions::new("/docs"), source);
//!
//! let mut doc = Document::parse("/docs/guide.md", "```rust\n{{#include ./hello.rs}}\n```\n");
//! processor.process(&mut doc).unwrap();
//!
//! assert_eq!(doc.to_markdown(), "```rust\nfn main() {}\n```\n");
//! ```

mod anchor;
mod directive;
mod error;
mod processor;
mod resolver;

pub use anchor::{AnchorError, extract};
pub use directive::{Anchor, Directive, parse_directives};
pub use error::{IncludeError, IncludeFailure};
pub use processor::IncludeProcessor;
pub use resolver::{DEFAULT_ROOT_ALIAS, IncludeOptions, resolve};
