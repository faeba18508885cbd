//! Document snapshot handed to the completion and quick-info engines.
//!
//! All offsets are UTF-8 byte offsets. Offsets past the end are clamped and offsets inside a
//! multi-byte char snap back to the char start, so no accessor panics on host input.

use ropey::{Rope, RopeSlice};
use std::borrow::Cow;
use std::ops::Range;

#[derive(Debug, Clone, Default)]
pub struct Document {
    rope: Rope,
}

impl Document {
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    pub fn len(&self) -> usize {
        self.rope.len_bytes()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_bytes() == 0
    }

    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Line text without its terminator.
    pub fn line(&self, idx: usize) -> String {
        if idx >= self.rope.len_lines() {
            return String::new();
        }
        let text = slice_to_cow(self.rope.line(idx));
        strip_line_break(&text).to_string()
    }

    pub fn lines(&self) -> impl Iterator<Item = (usize, String)> + '_ {
        (0..self.rope.len_lines()).map(|idx| (idx, self.line(idx)))
    }

    pub fn line_of_offset(&self, offset: usize) -> usize {
        self.rope.byte_to_line(self.clamp(offset))
    }

    pub fn line_start(&self, idx: usize) -> usize {
        if idx >= self.rope.len_lines() {
            return self.rope.len_bytes();
        }
        self.rope.line_to_byte(idx)
    }

    /// Clamps `offset` into the document and onto a char boundary.
    pub fn clamp(&self, offset: usize) -> usize {
        let offset = offset.min(self.rope.len_bytes());
        self.rope.char_to_byte(self.rope.byte_to_char(offset))
    }

    pub fn slice(&self, range: Range<usize>) -> String {
        let start = self.clamp(range.start);
        let end = self.clamp(range.end).max(start);
        let start_char = self.rope.byte_to_char(start);
        let end_char = self.rope.byte_to_char(end);
        self.rope.slice(start_char..end_char).to_string()
    }

    /// Replaces `range` with `text` (incremental sync).
    pub fn replace(&mut self, range: Range<usize>, text: &str) {
        let start = self.clamp(range.start);
        let end = self.clamp(range.end).max(start);
        let start_char = self.rope.byte_to_char(start);
        let end_char = self.rope.byte_to_char(end);
        if start_char != end_char {
            self.rope.remove(start_char..end_char);
        }
        if !text.is_empty() {
            self.rope.insert(start_char, text);
        }
    }

    /// Replaces the whole content (full sync).
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for chunk in self.rope.chunks() {
            f.write_str(chunk)?;
        }
        Ok(())
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

fn slice_to_cow(slice: RopeSlice<'_>) -> Cow<'_, str> {
    match slice.as_str() {
        Some(text) => Cow::Borrowed(text),
        None => Cow::Owned(slice.to_string()),
    }
}

fn strip_line_break(line: &str) -> &str {
    line.trim_end_matches(|ch| {
        matches!(
            ch,
            '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
        )
    })
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/document.rs"]
mod tests;
