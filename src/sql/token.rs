//! Token model tying a `TokenKind` to its source span.
//!
//! Besides the byte offsets into the original input, a token remembers the
//! last punctuation separator (`,`, `(`, `)` or `;`) that stood between it and
//! the previous token. Separators are not tokens themselves, but the alias
//! heuristic needs to know that `users, orders` is a list and not
//! `users AS orders`.
use crate::sql::{keyword::Keyword, token_kind::TokenKind};

/// A lexical token with its inclusive start and exclusive end byte offsets.
///
/// Invariants:
/// - `end >= start`
/// - `[start, end)` is a valid slice range for the original input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
    pub preceded_by: Option<char>,
}

impl Token {
    pub const fn new(kind: TokenKind, start: usize, end: usize, preceded_by: Option<char>) -> Self {
        Self {
            kind,
            start,
            end,
            preceded_by,
        }
    }

    pub fn text(&self) -> &str {
        self.kind.text()
    }

    pub fn keyword(&self) -> Option<Keyword> {
        self.kind.keyword()
    }

    pub fn is_keyword(&self, kw: Keyword) -> bool {
        self.kind.is_keyword(kw)
    }

    /// True when only whitespace (or nothing) separates this token from the
    /// one before it.
    pub fn is_adjacent(&self) -> bool {
        self.preceded_by.is_none()
    }

    pub const fn span(&self) -> (usize, usize) {
        (self.start, self.end)
    }
}
