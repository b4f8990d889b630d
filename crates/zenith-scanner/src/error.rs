use thiserror::Error;

/// A state record or serialization buffer had the wrong size.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("state record needs {expected} bytes, got {actual}")]
pub struct StateSizeError {
    /// Bytes the operation requires.
    pub expected: usize,
    /// Bytes the caller provided.
    pub actual: usize,
}

/// Reasons a serialized state record is refused on restore.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    #[error("size error: {0}")]
    Size(#[from] StateSizeError),
    #[error("unsupported state format version {0}")]
    UnsupportedVersion(u8),
    #[error("reserved state bits set: {0:#04x}")]
    ReservedBits(u8),
}
