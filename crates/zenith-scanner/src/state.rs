//! The state record carried between scanner invocations.
//!
//! Wire layout (one byte):
//!
//! ```text
//!   7   6   5   4   3   2   1   0
//! +---------------+-----------+---+
//! |    version    | reserved  | E |
//! +---------------+-----------+---+
//! ```
//!
//! - `E`: the previous successful scan emitted `eof_tok`.
//! - `reserved`: must be zero.
//! - `version`: [`STATE_FORMAT_VERSION`].
//!
//! An empty record restores the default state. Anything else that does not
//! match the layout is refused.

use crate::error::{StateError, StateSizeError};

/// Exact number of bytes a serialized [`ScannerState`] occupies.
pub const STATE_SIZE: usize = 1;

/// Format version stored in the high nibble of the record.
pub const STATE_FORMAT_VERSION: u8 = 1;

const END_MARKER_BIT: u8 = 0b0000_0001;
const RESERVED_MASK: u8 = 0b0000_1110;
const VERSION_SHIFT: u32 = 4;

/// Scanner state that persists across invocations of one parse session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct ScannerState {
    /// The most recent successful scan emitted the end-of-input token.
    pub last_was_end_marker: bool,
}

impl ScannerState {
    /// Encodes the state into its fixed-size record.
    #[must_use]
    pub const fn encode(&self) -> [u8; STATE_SIZE] {
        let mut byte = STATE_FORMAT_VERSION << VERSION_SHIFT;
        if self.last_was_end_marker {
            byte |= END_MARKER_BIT;
        }
        [byte]
    }

    /// Writes the record to the front of `buf` and returns the number of
    /// bytes written, always [`STATE_SIZE`].
    ///
    /// # Errors
    ///
    /// Returns [`StateSizeError`] if `buf` is shorter than [`STATE_SIZE`];
    /// `buf` is left untouched.
    pub fn encode_into(&self, buf: &mut [u8]) -> Result<usize, StateSizeError> {
        let Some(dst) = buf.get_mut(..STATE_SIZE) else {
            return Err(StateSizeError {
                expected: STATE_SIZE,
                actual: buf.len(),
            });
        };
        dst.copy_from_slice(&self.encode());
        Ok(STATE_SIZE)
    }

    /// Decodes a record produced by [`ScannerState::encode`].
    ///
    /// An empty record yields the default state.
    ///
    /// # Errors
    ///
    /// - [`StateError::Size`] if the record is longer than [`STATE_SIZE`].
    /// - [`StateError::UnsupportedVersion`] for an unknown format version.
    /// - [`StateError::ReservedBits`] if any reserved bit is set.
    pub fn decode(bytes: &[u8]) -> Result<Self, StateError> {
        let byte = match bytes {
            [] => return Ok(Self::default()),
            [byte] => *byte,
            _ => {
                return Err(StateSizeError {
                    expected: STATE_SIZE,
                    actual: bytes.len(),
                }
                .into());
            }
        };

        let version = byte >> VERSION_SHIFT;
        if version != STATE_FORMAT_VERSION {
            return Err(StateError::UnsupportedVersion(version));
        }
        if byte & RESERVED_MASK != 0 {
            return Err(StateError::ReservedBits(byte & RESERVED_MASK));
        }

        Ok(Self {
            last_was_end_marker: byte & END_MARKER_BIT != 0,
        })
    }
}
