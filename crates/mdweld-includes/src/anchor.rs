//! Anchor extraction from included file content.
//!
//! An anchor selects which part of a file a directive splices in: the whole
//! file, a 1-based inclusive line range, or a named region delimited by
//! `ANCHOR: <name>` / `ANCHOR_END: <name>` marker lines. Markers are
//! matched by their literal text regardless of the comment prefix in front
//! of them, since source files in different languages use different comment
//! syntaxes.
//!
//! Bad anchors fail loudly rather than being clamped or skipped, so broken
//! includes are caught at build time instead of silently truncating docs.

use crate::directive::Anchor;

/// Literal start-marker text, matched anywhere in a line.
const START_MARKER: &str = "ANCHOR:";

/// Literal end-marker text, matched anywhere in a line.
const END_MARKER: &str = "ANCHOR_END:";

/// Error raised while extracting an anchor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnchorError {
    /// No matching `ANCHOR:`/`ANCHOR_END:` pair exists for the name.
    #[error("Anchor '{0}' not found")]
    NotFound(String),
    /// A line-range bound lies outside the file.
    #[error("Line range {start}:{end} is out of bounds for a file with {line_count} lines")]
    RangeOutOfBounds {
        /// Requested first line.
        start: usize,
        /// Requested last line.
        end: usize,
        /// Number of lines in the file.
        line_count: usize,
    },
    /// A line range with `start > end`.
    #[error("Line range {start}:{end} has start greater than end")]
    RangeInverted {
        /// Requested first line.
        start: usize,
        /// Requested last line.
        end: usize,
    },
}

/// Extract the part of `content` selected by `anchor`.
///
/// # Errors
///
/// Returns [`AnchorError`] when a line range lies outside the file or a
/// named marker pair cannot be located.
pub fn extract(content: &str, anchor: &Anchor) -> Result<String, AnchorError> {
    match anchor {
        Anchor::All => Ok(content.to_owned()),
        Anchor::Lines { start, end } => extract_lines(content, *start, *end),
        Anchor::Named(name) => extract_named(content, name),
    }
}

/// Select lines `start..=end` (1-based, inclusive), joined by newlines.
fn extract_lines(content: &str, start: usize, end: usize) -> Result<String, AnchorError> {
    if start > end {
        return Err(AnchorError::RangeInverted { start, end });
    }

    let lines: Vec<&str> = content.lines().collect();
    if start < 1 || end > lines.len() {
        return Err(AnchorError::RangeOutOfBounds {
            start,
            end,
            line_count: lines.len(),
        });
    }

    Ok(lines[start - 1..end].join("\n"))
}

/// Select the lines strictly between the named marker pair.
///
/// Lines are preserved verbatim, leading and trailing whitespace included.
/// A start marker without a matching end marker counts as not found.
fn extract_named(content: &str, name: &str) -> Result<String, AnchorError> {
    let lines: Vec<&str> = content.lines().collect();

    let start = lines
        .iter()
        .position(|line| is_marker(line, START_MARKER, name))
        .ok_or_else(|| AnchorError::NotFound(name.to_owned()))?;
    let len = lines[start + 1..]
        .iter()
        .position(|line| is_marker(line, END_MARKER, name))
        .ok_or_else(|| AnchorError::NotFound(name.to_owned()))?;

    Ok(lines[start + 1..start + 1 + len].join("\n"))
}

/// Check whether a line carries `marker` followed by exactly `name`.
///
/// Anything before the marker (comment characters, indentation) is ignored.
fn is_marker(line: &str, marker: &str, name: &str) -> bool {
    line.find(marker)
        .is_some_and(|pos| line[pos + marker.len()..].trim() == name)
}
