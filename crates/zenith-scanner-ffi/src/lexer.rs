//! The engine's lexer record and its [`Cursor`] adapter.

use core::{ffi::c_char, marker::PhantomData, ptr::NonNull};

use zenith_scanner::{Cursor, TokenKind};

/// Symbol index type used by the engine.
pub type TSSymbol = u16;

/// Lexer record passed by the engine to `scan`, laid out as in
/// `tree_sitter/parser.h`.
#[repr(C)]
pub struct TSLexer {
    pub lookahead: i32,
    pub result_symbol: TSSymbol,
    pub advance: unsafe extern "C" fn(*mut TSLexer, bool),
    pub mark_end: unsafe extern "C" fn(*mut TSLexer),
    pub get_column: unsafe extern "C" fn(*mut TSLexer) -> u32,
    pub is_at_included_range_start: unsafe extern "C" fn(*const TSLexer) -> bool,
    pub eof: unsafe extern "C" fn(*const TSLexer) -> bool,
    pub log: Option<unsafe extern "C" fn(*const TSLexer, *const c_char, ...)>,
}

/// A [`Cursor`] backed by an engine-owned [`TSLexer`].
///
/// Borrowed for the duration of one `scan` call.
pub struct LexerCursor<'a> {
    lexer: NonNull<TSLexer>,
    _scan: PhantomData<&'a mut TSLexer>,
}

impl LexerCursor<'_> {
    /// Wraps the engine's lexer pointer. Returns `None` for null.
    ///
    /// # Safety
    ///
    /// A non-null `lexer` must point to a live, initialized [`TSLexer`] whose
    /// callbacks stay valid while the cursor is in use, and nothing else may
    /// access it during that time except through those callbacks.
    pub unsafe fn from_raw(lexer: *mut TSLexer) -> Option<Self> {
        NonNull::new(lexer).map(|lexer| Self {
            lexer,
            _scan: PhantomData,
        })
    }

    fn raw(&self) -> *mut TSLexer {
        self.lexer.as_ptr()
    }
}

impl Cursor for LexerCursor<'_> {
    fn lookahead(&self) -> Option<char> {
        if self.is_eof() {
            return None;
        }
        // SAFETY: `from_raw` guarantees a live lexer.
        let code = unsafe { (*self.raw()).lookahead };
        let ch = u32::try_from(code).ok().and_then(char::from_u32);
        Some(ch.unwrap_or(char::REPLACEMENT_CHARACTER))
    }

    fn advance(&mut self, skip: bool) {
        let lexer = self.raw();
        // SAFETY: `from_raw` guarantees a live lexer with valid callbacks.
        unsafe { ((*lexer).advance)(lexer, skip) }
    }

    fn mark_end(&mut self) {
        let lexer = self.raw();
        // SAFETY: as above.
        unsafe { ((*lexer).mark_end)(lexer) }
    }

    fn column(&mut self) -> u32 {
        let lexer = self.raw();
        // SAFETY: as above.
        unsafe { ((*lexer).get_column)(lexer) }
    }

    fn is_eof(&self) -> bool {
        let lexer = self.raw();
        // SAFETY: as above.
        unsafe { ((*lexer).eof)(lexer) }
    }

    fn set_result(&mut self, kind: TokenKind) {
        // SAFETY: as above.
        unsafe { (*self.raw()).result_symbol = kind.symbol() }
    }
}
