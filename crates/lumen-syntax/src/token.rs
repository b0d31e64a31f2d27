//! Terminal tree elements.

use text_size::{TextRange, TextSize};
use triomphe::Arc;

use crate::syntax_kind::SyntaxKind;

/// A terminal leaf: one lexical unit with its kind, start offset, and text.
///
/// Tokens are sealed at construction and never mutated. Identity is by value:
/// two tokens with equal kind, offset, and text are interchangeable, and a
/// single token may be shared by several parents.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: SyntaxKind,
    offset: TextSize,
    text: Box<str>,
}

impl Token {
    /// Creates a sealed token. `kind` must be a terminal kind.
    pub fn new(kind: SyntaxKind, offset: TextSize, text: impl Into<Box<str>>) -> Arc<Self> {
        debug_assert!(kind.is_token(), "{kind:?} is not a token kind");
        Arc::new(Self { kind, offset, text: text.into() })
    }

    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        self.kind
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the token text. Zero only for empty terminals such as `Eof`.
    #[inline]
    pub fn text_len(&self) -> TextSize {
        TextSize::new(self.text.len() as u32)
    }

    #[inline]
    pub fn range(&self) -> TextRange {
        TextRange::at(self.offset, self.text_len())
    }
}
