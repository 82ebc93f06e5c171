//! Forward-only character cursor over a slice of the program.
//!
//! A cursor owns nothing: it borrows a text slice and remembers where that
//! slice starts inside the whole program (`base`), so spans produced from a
//! loop body or function body still point into the whole program.
//!
//! The only consuming primitive is [`next_char`](SourceCursor::next_char);
//! everything else (`eat_while`, `skip_line`) is built on top of it or on
//! `peek`. Loop bodies rewind with [`reset`](SourceCursor::reset) between
//! iterations.

use crate::Span;

/// Read-once cursor over a text buffer.
///
/// Not `Clone`: two cursors never share position state,
/// and the evaluator builds fresh cursors for nested blocks instead.
#[derive(Debug)]
pub struct SourceCursor<'a> {
    /// Text being read.
    text: &'a str,
    /// Current read position (byte index into `text`).
    pos: usize,
    /// Absolute offset of `text[0]` in the whole program.
    base: usize,
}

impl<'a> SourceCursor<'a> {
    /// Cursor over a whole program.
    pub fn new(text: &'a str) -> Self {
        Self::with_base(text, 0)
    }

    /// Cursor over a slice that starts at absolute offset `base`.
    pub fn with_base(text: &'a str, base: usize) -> Self {
        SourceCursor { text, pos: 0, base }
    }

    /// Consume and return the next character, or `None` once exhausted.
    #[inline]
    pub fn next_char(&mut self) -> Option<char> {
        let c = self.text[self.pos..].chars().next()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// The next character without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    /// Rewind to the start of the text.
    #[inline]
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Current position relative to the start of this cursor's text.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Current position as an absolute program offset.
    #[inline]
    pub fn offset(&self) -> usize {
        self.base + self.pos
    }

    /// The full text this cursor reads.
    #[inline]
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Unread remainder of the text.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// Text between two relative positions.
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.text[start..end]
    }

    /// Absolute span between two relative positions.
    #[inline]
    pub fn span_between(&self, start: usize, end: usize) -> Span {
        Span::new(self.base + start, self.base + end)
    }

    /// Absolute span from a relative position up to the current position.
    #[inline]
    pub fn span_from(&self, start: usize) -> Span {
        self.span_between(start, self.pos)
    }

    /// Consume characters while `pred` holds.
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    pub fn skip_whitespace(&mut self) {
        self.eat_while(char::is_whitespace);
    }

    /// Skip to the next line terminator (not consumed) or to the end.
    pub fn skip_line(&mut self) {
        let rest = self.rest().as_bytes();
        match memchr::memchr2(b'\n', b'\r', rest) {
            Some(idx) => self.pos += idx,
            None => self.pos = self.text.len(),
        }
    }
}
