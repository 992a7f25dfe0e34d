//! Lenient SQL tokenization for completion.
//!
//! Modules:
//! - `keyword`    : clause keywords plus the static keyword lists offered as completions.
//! - `token_kind` : classification of lexical atoms (words, operators, quoted spans).
//! - `token`      : token struct pairing a `TokenKind` with source offsets.
//! - `tokenizer`  : single pass O(n) tokenizer producing a `Vec<Token>` from raw SQL.
//!
//! Input is usually an unfinished statement typed into a shell, so nothing
//! here ever fails: dangling quotes, stray operators and half words all yield
//! some token stream.
//!
//! NOTE: This is **not** a SQL parser. The context classifier only needs word
//! boundaries, keyword identity and quote awareness.

pub mod keyword;
pub mod token;
pub mod token_kind;
pub mod tokenizer;

pub use keyword::{
    ALL_KEYWORDS, DDL_KEYWORDS, FROM_KEYWORDS, Keyword, SELECT_KEYWORDS, WHERE_KEYWORDS,
    is_keyword,
};
pub use token::Token;
pub use token_kind::TokenKind;
pub use tokenizer::tokenize;
