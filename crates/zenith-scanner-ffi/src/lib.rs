//! C ABI entry points the tree-sitter runtime links against for the `zenith`
//! grammar's external scanner.
//!
//! Each parse session gets its own heap-allocated [`ExternalScanner`] behind
//! the opaque payload pointer. The engine serializes calls into one payload.

mod lexer;

use core::{
    ffi::{c_char, c_uint, c_void},
    slice,
};

pub use lexer::{LexerCursor, TSLexer, TSSymbol};
use zenith_scanner::{ExternalScanner, SERIALIZATION_BUFFER_SIZE, TokenKind, ValidTokens};

/// Allocates the scanner for a new parse session.
#[unsafe(no_mangle)]
pub extern "C" fn tree_sitter_zenith_external_scanner_create() -> *mut c_void {
    Box::into_raw(Box::new(ExternalScanner::new())).cast()
}

/// Releases a scanner. A null payload is ignored.
///
/// # Safety
///
/// A non-null `payload` must come from
/// [`tree_sitter_zenith_external_scanner_create`] and not have been destroyed.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tree_sitter_zenith_external_scanner_destroy(payload: *mut c_void) {
    if payload.is_null() {
        tracing::debug!("destroy called without a scanner");
        return;
    }
    // SAFETY: non-null payloads are boxes handed out by `create`.
    drop(unsafe { Box::from_raw(payload.cast::<ExternalScanner>()) });
}

/// Writes the scanner state into `buffer` and returns the byte count.
///
/// # Safety
///
/// `payload` must be null or a live scanner; `buffer` must be null or valid
/// for [`SERIALIZATION_BUFFER_SIZE`] bytes of writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tree_sitter_zenith_external_scanner_serialize(
    payload: *mut c_void,
    buffer: *mut c_char,
) -> c_uint {
    // SAFETY: caller contract.
    let Some(scanner) = (unsafe { payload.cast::<ExternalScanner>().as_ref() }) else {
        return 0;
    };
    if buffer.is_null() {
        return 0;
    }
    // SAFETY: the engine's serialization buffer is SERIALIZATION_BUFFER_SIZE bytes.
    let buf = unsafe { slice::from_raw_parts_mut(buffer.cast::<u8>(), SERIALIZATION_BUFFER_SIZE) };
    match scanner.serialize(buf) {
        Ok(len) => c_uint::try_from(len).unwrap_or(0),
        Err(err) => {
            tracing::debug!(%err, "scanner state did not fit");
            0
        }
    }
}

/// Restores scanner state from the first `length` bytes of `buffer`.
///
/// A zero length restores the create-time state; a record that does not
/// decode does the same.
///
/// # Safety
///
/// `payload` must be null or a live scanner; when `length` is non-zero,
/// `buffer` must be null or valid for `length` bytes of reads.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tree_sitter_zenith_external_scanner_deserialize(
    payload: *mut c_void,
    buffer: *const c_char,
    length: c_uint,
) {
    // SAFETY: caller contract.
    let Some(scanner) = (unsafe { payload.cast::<ExternalScanner>().as_mut() }) else {
        return;
    };
    let bytes = if length == 0 || buffer.is_null() {
        &[][..]
    } else {
        // SAFETY: caller contract; u32 always fits usize on supported targets.
        unsafe { slice::from_raw_parts(buffer.cast::<u8>(), length as usize) }
    };
    // A refused record already left the scanner in its default state.
    let _ = scanner.deserialize(bytes);
}

/// Attempts to recognize `eof_tok` at the lexer position.
///
/// # Safety
///
/// `payload` must be null or a live scanner; `lexer` must be null or a live
/// engine lexer; `valid_symbols` must be null or valid for one `bool` per
/// external token.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tree_sitter_zenith_external_scanner_scan(
    payload: *mut c_void,
    lexer: *mut TSLexer,
    valid_symbols: *const bool,
) -> bool {
    // SAFETY: caller contract.
    let Some(scanner) = (unsafe { payload.cast::<ExternalScanner>().as_mut() }) else {
        return false;
    };
    // SAFETY: caller contract.
    let Some(mut cursor) = (unsafe { LexerCursor::from_raw(lexer) }) else {
        return false;
    };
    let valid = if valid_symbols.is_null() {
        ValidTokens::none()
    } else {
        // SAFETY: the engine passes one flag per external token.
        ValidTokens::new(unsafe { slice::from_raw_parts(valid_symbols, TokenKind::COUNT) })
    };
    scanner.scan(&mut cursor, valid).is_some()
}
