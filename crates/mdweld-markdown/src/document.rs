//! Document block tree: parsing and lossless serialization.

use std::mem;
use std::path::{Path, PathBuf};

use crate::fence::Fence;

/// A fenced code block within a document.
///
/// The fence lines are kept exactly as they appeared in the source (line
/// terminators included) so serialization is lossless. Preprocessing stages
/// rewrite only [`literal`](Self::literal); fence character, length, info
/// string, and indentation are never touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// Opening fence line, verbatim.
    open: String,
    /// Content between the fences, verbatim.
    pub literal: String,
    /// Closing fence line, verbatim. `None` when the fence runs to EOF.
    close: Option<String>,
}

impl CodeBlock {
    /// Language from the fence info string, if any.
    ///
    /// The language is the first word of the info string, e.g. `rust` for
    /// a <code>```rust ignore</code> fence.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.open
            .trim_start()
            .trim_start_matches(['`', '~'])
            .split_whitespace()
            .next()
    }
}

/// A document block. Only [`Block::Code`] payloads may be rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A verbatim run of markdown outside any fence, newlines included.
    Text(String),
    /// A fenced code block.
    Code(CodeBlock),
}

/// A parsed markdown document.
///
/// Carries its own source path, used by preprocessing stages purely for
/// error messages. The block sequence concatenates back to the original
/// source via [`to_markdown`](Self::to_markdown).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    path: PathBuf,
    blocks: Vec<Block>,
}

impl Document {
    /// Parse a markdown source into a block sequence.
    ///
    /// The parser is line-based: a line opening a code fence starts a
    /// [`CodeBlock`], the matching closing fence ends it, everything else
    /// accumulates into verbatim [`Block::Text`] runs. A fence left open at
    /// EOF produces a code block with no closing line, as `CommonMark`
    /// treats the rest of the document as code.
    #[must_use]
    pub fn parse(path: impl Into<PathBuf>, source: &str) -> Self {
        let mut blocks = Vec::new();
        let mut text = String::new();
        let mut open_fence: Option<(Fence, CodeBlock)> = None;

        for line in source.split_inclusive('\n') {
            match open_fence.take() {
                None => {
                    if let Some(fence) = Fence::open(line) {
                        if !text.is_empty() {
                            blocks.push(Block::Text(mem::take(&mut text)));
                        }
                        open_fence = Some((
                            fence,
                            CodeBlock {
                                open: line.to_owned(),
                                literal: String::new(),
                                close: None,
                            },
                        ));
                    } else {
                        text.push_str(line);
                    }
                }
                Some((fence, mut block)) => {
                    if fence.closes(line) {
                        block.close = Some(line.to_owned());
                        blocks.push(Block::Code(block));
                    } else {
                        block.literal.push_str(line);
                        open_fence = Some((fence, block));
                    }
                }
            }
        }

        if let Some((_, block)) = open_fence {
            blocks.push(Block::Code(block));
        }
        if !text.is_empty() {
            blocks.push(Block::Text(text));
        }

        Self {
            path: path.into(),
            blocks,
        }
    }

    /// Source path of the document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All blocks in document order.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Mutable iterator over the code blocks, in document order.
    pub fn code_blocks_mut(&mut self) -> impl Iterator<Item = &mut CodeBlock> {
        self.blocks.iter_mut().filter_map(|block| match block {
            Block::Code(code) => Some(code),
            Block::Text(_) => None,
        })
    }

    /// Serialize the document back to markdown.
    ///
    /// Byte-identical to the parsed source as long as no block was modified.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            match block {
                Block::Text(text) => out.push_str(text),
                Block::Code(code) => {
                    out.push_str(&code.open);
                    out.push_str(&code.literal);
                    if let Some(close) = &code.close {
                        out.push_str(close);
                    }
                }
            }
        }
        out
    }
}
