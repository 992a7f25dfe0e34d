//! Token kind definitions for the completion tokenizer.
//!
//! Every variant carries the token text. Words are upper-cased when produced
//! so keyword checks are plain string comparisons; quoted spans keep their
//! quotes and original content because the classifier treats them as opaque.
//!
//! See `keyword.rs` for the `Keyword` enum and `tokenizer.rs` for tokenization.

use crate::sql::keyword::Keyword;

/// Classification for a token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Keyword candidate, identifier, number, `*`, dotted name. Upper-cased.
    Word(String),
    /// One of `=`, `<`, `>`, `!`.
    Operator(char),
    /// `'...'`, quotes included.
    QuotedLiteral(String),
    /// `"..."`, quotes included.
    QuotedIdentifier(String),
}

impl TokenKind {
    /// The token text as it will be compared by the classifier.
    pub fn text(&self) -> &str {
        match self {
            TokenKind::Word(s) | TokenKind::QuotedLiteral(s) | TokenKind::QuotedIdentifier(s) => {
                s.as_str()
            }
            TokenKind::Operator(c) => match c {
                '=' => "=",
                '<' => "<",
                '>' => ">",
                _ => "!",
            },
        }
    }

    /// Returns the clause keyword this token spells, if any.
    pub fn keyword(&self) -> Option<Keyword> {
        match self {
            TokenKind::Word(s) => Keyword::from_upper(s),
            _ => None,
        }
    }

    /// True if this token is the given keyword.
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        self.keyword() == Some(kw)
    }

    pub fn is_word(&self) -> bool {
        matches!(self, TokenKind::Word(_))
    }

    pub fn is_quoted(&self) -> bool {
        matches!(
            self,
            TokenKind::QuotedLiteral(_) | TokenKind::QuotedIdentifier(_)
        )
    }
}
