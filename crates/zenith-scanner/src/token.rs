/// Token kinds recognized by the external scanner.
///
/// Variants follow the order of the grammar's `externals` list; the
/// discriminant is the symbol index the engine uses for that token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[repr(u16)]
pub enum TokenKind {
    /// Zero-width end-of-input token (`eof_tok` in the grammar).
    EofTok = 0,
}

impl TokenKind {
    /// Number of external token kinds.
    pub const COUNT: usize = 1;

    /// All kinds in externals order.
    pub const ALL: [TokenKind; Self::COUNT] = [TokenKind::EofTok];

    /// Symbol index of this kind within the externals list.
    #[must_use]
    pub const fn symbol(self) -> u16 {
        self as u16
    }

    /// Inverse of [`TokenKind::symbol`].
    #[must_use]
    pub const fn from_symbol(symbol: u16) -> Option<Self> {
        match symbol {
            0 => Some(TokenKind::EofTok),
            _ => None,
        }
    }

    /// Name of the token in the grammar.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::EofTok => "eof_tok",
        }
    }
}

/// The set of token kinds the engine currently accepts.
///
/// Wraps the engine's flag array, one `bool` per [`TokenKind`] in externals
/// order. Kinds past the end of a short slice count as not acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidTokens<'a> {
    flags: &'a [bool],
}

impl<'a> ValidTokens<'a> {
    /// Wraps an engine-provided flag slice.
    #[must_use]
    pub const fn new(flags: &'a [bool]) -> Self {
        Self { flags }
    }

    /// Accepts nothing.
    #[must_use]
    pub const fn none() -> Self {
        Self { flags: &[] }
    }

    #[must_use]
    pub fn contains(&self, kind: TokenKind) -> bool {
        self.flags
            .get(usize::from(kind.symbol()))
            .copied()
            .unwrap_or(false)
    }

    /// Kinds flagged as acceptable, in externals order.
    pub fn iter(&self) -> impl Iterator<Item = TokenKind> + '_ {
        TokenKind::ALL
            .into_iter()
            .filter(move |kind| self.contains(*kind))
    }
}

impl ValidTokens<'static> {
    /// Accepts every kind, as the engine does during error recovery.
    #[must_use]
    pub const fn all() -> Self {
        const ALL: [bool; TokenKind::COUNT] = [true; TokenKind::COUNT];
        Self { flags: &ALL }
    }
}

impl<'a> From<&'a [bool]> for ValidTokens<'a> {
    fn from(flags: &'a [bool]) -> Self {
        Self::new(flags)
    }
}
