/// Rope storage behind a `TextDocument`.
use std::fmt;

use anyhow::Result;
use ropey::{Rope, RopeSlice};

/// Document text. Every position is a char offset, never a byte offset.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    rope: Rope,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self { rope: Rope::new() }
    }
}

impl From<&str> for TextBuffer {
    fn from(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rope)
    }
}

impl TextBuffer {
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Inserts `text` before the char at `position`.
    ///
    /// # Errors
    ///
    /// Returns an error if `position` is past the end of the text.
    pub fn insert(&mut self, position: usize, text: &str) -> Result<()> {
        self.check_span(position, position)?;
        self.rope.insert(position, text);
        Ok(())
    }

    /// Removes chars `[start..end)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the span is reversed or runs past the end.
    pub fn remove(&mut self, start: usize, end: usize) -> Result<()> {
        self.check_span(start, end)?;
        self.rope.remove(start..end);
        Ok(())
    }

    /// Borrows chars `[start..end)` without copying.
    ///
    /// # Errors
    ///
    /// Returns an error if the span is reversed or runs past the end.
    pub fn slice(&self, start: usize, end: usize) -> Result<RopeSlice<'_>> {
        self.check_span(start, end)?;
        Ok(self.rope.slice(start..end))
    }

    fn check_span(&self, start: usize, end: usize) -> Result<()> {
        let len = self.rope.len_chars();
        if start > end {
            anyhow::bail!("reversed span {start}..{end}");
        }
        if end > len {
            anyhow::bail!("span {start}..{end} past end of text ({len} chars)");
        }
        Ok(())
    }
}
