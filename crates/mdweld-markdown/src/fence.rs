//! Code fence detection for block parsing.
//!
//! Fences can use backticks or tildes (three or more). The closing fence
//! must use the same character and be at least as long as the opening run.

/// An open code fence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Fence {
    /// Character used for the fence (backtick or tilde).
    ch: char,
    /// Length of the opening run (minimum length for closing).
    len: usize,
}

impl Fence {
    /// Detect an opening fence on a line.
    ///
    /// Returns `None` when the line does not start a fenced code block.
    pub(crate) fn open(line: &str) -> Option<Self> {
        let trimmed = line.trim_start();
        let first = trimmed.chars().next()?;
        if first != '`' && first != '~' {
            return None;
        }

        let len = trimmed.chars().take_while(|&c| c == first).count();
        if len >= 3 { Some(Self { ch: first, len }) } else { None }
    }

    /// Check whether a line closes this fence.
    ///
    /// After the fence characters, only whitespace is allowed.
    pub(crate) fn closes(&self, line: &str) -> bool {
        let trimmed = line.trim_start();
        let count = trimmed.chars().take_while(|&c| c == self.ch).count();
        count >= self.len && trimmed[count..].chars().all(char::is_whitespace)
    }
}
