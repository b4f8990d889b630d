//! Scanner: end-of-input recognition with duplicate suppression.
//!
//! The engine calls [`ExternalScanner::scan`] at every position where an
//! external token could start. At the trailing boundary it may do so many
//! times in a row (error recovery, incremental re-lex). The scanner answers
//! with a zero-width `eof_tok` the first time and declines afterwards, so the
//! engine can never be fed an unbounded run of empty tokens.
//!
//! State machine
//!
//! | cursor      | `last_was_end_marker` | acceptable | result | flag after |
//! |-------------|-----------------------|------------|--------|------------|
//! | not at EOF  | any                   | any        | none   | `false`    |
//! | at EOF      | `true`                | any        | none   | `true`     |
//! | at EOF      | `false`               | no (*)     | none   | `false`    |
//! | at EOF      | `false`               | yes        | match  | `true`     |
//!
//! (*) only when [`ScannerOptions::honor_valid_tokens`] is set.
//!
//! Invariants
//! - Between two scans at end-of-input at most one matches, unless a scan at
//!   a non-EOF position or a restore lies in between.
//! - The cursor is never advanced; a match marks its end in place.

use crate::{
    cursor::Cursor,
    error::{StateError, StateSizeError},
    options::ScannerOptions,
    state::ScannerState,
    token::{TokenKind, ValidTokens},
};


/// External token scanner for one parse session.
///
/// Creating the value corresponds to the engine's `create` hook and dropping
/// it to `destroy`; the state lives exactly as long as the session owning it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExternalScanner {
    state: ScannerState,
    options: ScannerOptions,
}

impl ExternalScanner {
    /// A scanner in the default state with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_options(options: ScannerOptions) -> Self {
        Self {
            state: ScannerState::default(),
            options,
        }
    }

    /// Resumes a scanner from previously extracted state.
    #[must_use]
    pub fn from_state(state: ScannerState, options: ScannerOptions) -> Self {
        Self { state, options }
    }

    /// Ends the session, handing back its state.
    #[must_use]
    pub fn into_state(self) -> ScannerState {
        self.state
    }

    #[must_use]
    pub fn state(&self) -> ScannerState {
        self.state
    }

    #[must_use]
    pub fn options(&self) -> ScannerOptions {
        self.options
    }

    /// Returns to the create-time state. Options are kept.
    pub fn reset(&mut self) {
        self.state = ScannerState::default();
    }

    /// Writes the state record into `buf` and returns the byte count.
    ///
    /// # Errors
    ///
    /// Returns [`StateSizeError`] when `buf` cannot hold
    /// [`STATE_SIZE`](crate::STATE_SIZE) bytes.
    pub fn serialize(&self, buf: &mut [u8]) -> Result<usize, StateSizeError> {
        self.state.encode_into(buf)
    }

    /// Replaces the state with the record in `bytes`.
    ///
    /// An empty record restores the create-time state. A record that fails
    /// to decode also leaves the scanner in the create-time state.
    ///
    /// # Errors
    ///
    /// Returns the [`StateError`] explaining why the record was refused.
    #[tracing::instrument(level = "trace", skip(self), fields(len = bytes.len()))]
    pub fn deserialize(&mut self, bytes: &[u8]) -> Result<(), StateError> {
        match ScannerState::decode(bytes) {
            Ok(state) => {
                self.state = state;
                Ok(())
            }
            Err(err) => {
                tracing::debug!(%err, "refusing scanner state record");
                self.reset();
                Err(err)
            }
        }
    }

    /// Attempts to recognize an external token at the cursor.
    ///
    /// On a match the cursor's end is marked at its current position and its
    /// result is set to the returned kind.
    pub fn scan<C: Cursor + ?Sized>(
        &mut self,
        cursor: &mut C,
        valid: ValidTokens<'_>,
    ) -> Option<TokenKind> {
        if !cursor.is_eof() {
            if self.state.last_was_end_marker {
                tracing::trace!("input continues past emitted eof_tok, clearing marker");
            }
            self.state.last_was_end_marker = false;
            return None;
        }

        if self.state.last_was_end_marker {
            tracing::trace!("eof_tok already emitted at this boundary");
            return None;
        }

        if self.options.honor_valid_tokens && !valid.contains(TokenKind::EofTok) {
            tracing::trace!("eof_tok not acceptable here");
            return None;
        }

        cursor.mark_end();
        cursor.set_result(TokenKind::EofTok);
        self.state.last_was_end_marker = true;
        tracing::trace!("emitting eof_tok");
        Some(TokenKind::EofTok)
    }
}
