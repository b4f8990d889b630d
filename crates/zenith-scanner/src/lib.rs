//! External token scanner for the `zenith` grammar.
//!
//! The grammar delegates a single token, `eof_tok`, to this crate. The
//! scanner recognizes it as a zero-width token at end-of-input and makes
//! sure it is produced at most once per boundary, no matter how often the
//! parsing engine re-invokes it there. The only state that survives between
//! invocations is a one-byte [`ScannerState`] record that the engine stores
//! and hands back through [`ExternalScanner::serialize`] and
//! [`ExternalScanner::deserialize`].
//!
//! ```rust
//! use zenith_scanner::{ExternalScanner, SliceCursor, TokenKind, ValidTokens};
//!
//! let mut scanner = ExternalScanner::new();
//! let mut cursor = SliceCursor::at_end(b"function main()\nend main\n");
//!
//! assert_eq!(scanner.scan(&mut cursor, ValidTokens::all()), Some(TokenKind::EofTok));
//! assert_eq!(scanner.scan(&mut cursor, ValidTokens::all()), None);
//! ```

#![no_std]

#[cfg(test)]
extern crate std;

mod cursor;
mod error;
mod options;
mod scanner;
mod state;
mod token;

#[cfg(test)]
mod tests;

pub use cursor::{Cursor, SliceCursor};
pub use error::{StateError, StateSizeError};
pub use options::ScannerOptions;
pub use scanner::ExternalScanner;
pub use state::{STATE_FORMAT_VERSION, STATE_SIZE, ScannerState};
pub use token::{TokenKind, ValidTokens};

/// Size of the buffer the parsing engine hands to `serialize`.
///
/// Every encoded state must fit; [`STATE_SIZE`] is far below it.
pub const SERIALIZATION_BUFFER_SIZE: usize = 1024;

const _: () = assert!(STATE_SIZE <= SERIALIZATION_BUFFER_SIZE);
