//! Lossless markdown block model for preprocessing stages.
//!
//! This crate splits a markdown source into a flat sequence of blocks:
//! verbatim text runs and fenced code blocks. Preprocessing stages rewrite
//! the literal payload of code blocks and serialize the document back with
//! [`Document::to_markdown`], which reproduces every untouched byte exactly.
//!
//! The model is deliberately minimal: it is not a markdown AST. Stages that
//! only care about fenced code regions (the only block kind they are allowed
//! to rewrite) get exactly that capability and nothing else, so the document
//! survives the round trip byte-identically.
//!
//! # Example
//!
//! ```
//! use mdweld_markdown::{Block, Document};
//!
//! let source = "# Title\n\n```rust\nfn main() {}\n```\n";
//! let doc = Document::parse("guide.md", source);
//!
//! assert_eq!(doc.blocks().len(), 2);
//! assert!(matches!(doc.blocks()[1], Block::Code(_)));
//! assert_eq!(doc.to_markdown(), source);
//! ```

mod document;
mod fence;

pub use document::{Block, CodeBlock, Document};
