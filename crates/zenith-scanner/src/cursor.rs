//! Cursor: the engine's view over the remaining input.
//!
//! The scanner never owns input. The parsing engine positions a cursor at the
//! candidate token start and the scanner only queries it (`is_eof`) and
//! reports back through it (`mark_end`, `set_result`). [`SliceCursor`] is a
//! self-contained implementation over a byte slice, used by tests and by
//! embedders that drive the scanner without a parsing engine.

use core::ops::Range;

use bstr::ByteSlice;

use crate::token::TokenKind;

/// Host-provided view over the remaining input of one parse session.
pub trait Cursor {
    /// The character at the cursor, or `None` at end-of-input.
    fn lookahead(&self) -> Option<char>;

    /// Moves past the lookahead character. With `skip`, the character is
    /// treated as whitespace and excluded from the token.
    fn advance(&mut self, skip: bool);

    /// Fixes the end of the current token at the cursor position.
    ///
    /// Calling it before any `advance` yields a zero-width token.
    fn mark_end(&mut self);

    /// Zero-based column of the cursor within its line.
    fn column(&mut self) -> u32;

    /// Whether the cursor has reached end-of-input.
    fn is_eof(&self) -> bool;

    /// Records the kind of the token being recognized.
    fn set_result(&mut self, kind: TokenKind);
}

/// A [`Cursor`] over an in-memory byte slice.
///
/// Invalid UTF-8 is reported as `U+FFFD` and advanced over one maximal
/// invalid subsequence at a time.
#[derive(Debug, Clone)]
pub struct SliceCursor<'src> {
    input: &'src [u8],
    pos: usize,
    token_start: usize,
    marked_end: Option<usize>,
    result: Option<TokenKind>,
}

impl<'src> SliceCursor<'src> {
    /// A cursor at the start of `input`.
    #[must_use]
    pub fn new(input: &'src [u8]) -> Self {
        Self::at(input, 0)
    }

    /// A cursor positioned at end-of-input.
    #[must_use]
    pub fn at_end(input: &'src [u8]) -> Self {
        Self::at(input, input.len())
    }

    /// A cursor at byte `offset`, clamped to the input length.
    #[must_use]
    pub fn at(input: &'src [u8], offset: usize) -> Self {
        let pos = offset.min(input.len());
        Self {
            input,
            pos,
            token_start: pos,
            marked_end: None,
            result: None,
        }
    }

    /// Byte offset of the lookahead character.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Byte offset where the token was marked to end, if it was.
    #[must_use]
    pub fn marked_end(&self) -> Option<usize> {
        self.marked_end
    }

    /// Kind recorded by the last successful scan.
    #[must_use]
    pub fn result(&self) -> Option<TokenKind> {
        self.result
    }

    /// Byte range of the recognized token, once its end is marked.
    #[must_use]
    pub fn token_span(&self) -> Option<Range<usize>> {
        self.marked_end.map(|end| self.token_start..end)
    }

    /// Starts a new token at the current position, forgetting the previous
    /// mark and result. The engine does this before every scanner call.
    pub fn begin_token(&mut self) {
        self.token_start = self.pos;
        self.marked_end = None;
        self.result = None;
    }

    fn decode(&self) -> Option<(char, usize)> {
        let rest = &self.input[self.pos..];
        if rest.is_empty() {
            return None;
        }
        let (ch, len) = bstr::decode_utf8(rest);
        Some((ch.unwrap_or(char::REPLACEMENT_CHARACTER), len.max(1)))
    }
}

impl Cursor for SliceCursor<'_> {
    fn lookahead(&self) -> Option<char> {
        self.decode().map(|(ch, _)| ch)
    }

    fn advance(&mut self, skip: bool) {
        if let Some((_, len)) = self.decode() {
            self.pos += len;
            if skip {
                self.token_start = self.pos;
            }
        }
    }

    fn mark_end(&mut self) {
        self.marked_end = Some(self.pos);
    }

    fn column(&mut self) -> u32 {
        let before = &self.input[..self.pos];
        let line_start = before.rfind_byte(b'\n').map_or(0, |nl| nl + 1);
        let chars = before[line_start..].chars().count();
        u32::try_from(chars).unwrap_or(u32::MAX)
    }

    fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn set_result(&mut self, kind: TokenKind) {
        self.result = Some(kind);
    }
}
