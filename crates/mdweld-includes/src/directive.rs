//! Include directive grammar.
//!
//! A directive is the literal marker `{{#include ` followed by a path token
//! and an optional anchor suffix introduced by `:`, closed with `}}`:
//!
//! - `{{#include ./file.rs}}`: whole file.
//! - `{{#include ./file.rs:4:10}}`: 1-based inclusive line range.
//! - `{{#include ./file.rs:setup}}`: named anchor region.
//!
//! Text that resembles a directive but does not match the grammar is not an
//! error; it is simply not recognized and passes through untouched.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

static DIRECTIVE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{#include ([^}\r\n]+)\}\}").unwrap());

/// Sub-selection of an included file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Anchor {
    /// Entire file content.
    All,
    /// 1-based inclusive line range.
    Lines {
        /// First line of the range.
        start: usize,
        /// Last line of the range.
        end: usize,
    },
    /// Region delimited by `ANCHOR: <name>` / `ANCHOR_END: <name>` lines.
    Named(String),
}

/// A single include directive matched within a block's literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// Raw path token, exactly as written.
    pub path: String,
    /// Requested sub-selection of the target file.
    pub anchor: Anchor,
    /// Byte span of the full `{{#include ...}}` match in the block text.
    pub span: Range<usize>,
}

/// Find all well-formed include directives in a block's literal text.
///
/// Matches are returned in source order with their exact spans, so callers
/// can splice replacements against the original text. Tokens that do not
/// match the grammar are skipped.
#[must_use]
pub fn parse_directives(text: &str) -> Vec<Directive> {
    DIRECTIVE_PATTERN
        .captures_iter(text)
        .filter_map(|caps| {
            let matched = caps.get(0).unwrap();
            let token = caps.get(1).unwrap().as_str();
            let (path, anchor) = split_token(token)?;
            Some(Directive {
                path: path.to_owned(),
                anchor,
                span: matched.range(),
            })
        })
        .collect()
}

/// Split a path token into (path, anchor).
///
/// Returns `None` when the token does not match the grammar: an empty path,
/// a range with non-numeric bounds, or more than two anchor segments.
fn split_token(token: &str) -> Option<(&str, Anchor)> {
    let mut parts = token.split(':');
    let path = parts.next()?;
    if path.is_empty() {
        return None;
    }

    match (parts.next(), parts.next(), parts.next()) {
        (None, _, _) => Some((path, Anchor::All)),
        (Some(name), None, _) if !name.is_empty() => {
            Some((path, Anchor::Named(name.to_owned())))
        }
        (Some(start), Some(end), None) => {
            let start = start.parse().ok()?;
            let end = end.parse().ok()?;
            Some((path, Anchor::Lines { start, end }))
        }
        _ => None,
    }
}
