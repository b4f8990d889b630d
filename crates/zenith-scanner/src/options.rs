/// Configuration options for the external scanner.
///
/// # Default
///
/// All options default to the conservative behaviour described on each
/// field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct ScannerOptions {
    /// Whether to consult the engine's acceptable token kinds before matching.
    ///
    /// When `false`, the scanner emits `eof_tok` at end-of-input even if the
    /// engine did not ask for it, and relies on the engine to discard the
    /// unwanted token.
    ///
    /// # Default
    ///
    /// `true`
    pub honor_valid_tokens: bool,
}

impl Default for ScannerOptions {
    fn default() -> Self {
        Self {
            honor_valid_tokens: true,
        }
    }
}
