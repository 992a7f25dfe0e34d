//! SQL keyword model shared by the tokenizer, the context classifier and the
//! completer.
//!
//! Two things live here:
//! - `Keyword`, the handful of words that open or shape a clause. The
//!   classifier matches on these while scanning backwards from the cursor.
//! - The static keyword lists offered as completions in each clause. They are
//!   plain slices looked up by exact (upper-case) string match; the full list
//!   doubles as the "is this word a keyword?" set used to reject aliases.
//!
//! Every per-clause list is a subset of [`ALL_KEYWORDS`]; non-smart completion
//! relies on that to stay a superset of any context-filtered result.

use std::{collections::HashSet, sync::LazyLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Select,
    From,
    Join,
    Inner,
    Left,
    Right,
    Cross,
    Full,
    Natural,
    Where,
    Group,
    Order,
    By,
    Having,
    Insert,
    Into,
    Update,
    Set,
    On,
    Using,
    Create,
    Alter,
    Drop,
    As,
}

impl Keyword {
    /// Join modifiers that only open a JOIN clause when `JOIN` follows them.
    pub const JOIN_MODIFIERS: [Self; 6] = [
        Keyword::Inner,
        Keyword::Left,
        Keyword::Right,
        Keyword::Cross,
        Keyword::Full,
        Keyword::Natural,
    ];

    /// Keywords after which the next token names a table.
    pub const TABLE_INTRODUCERS: [Self; 4] =
        [Keyword::From, Keyword::Join, Keyword::Update, Keyword::Into];

    /// Attempt to classify an *upper‑cased* word into a `Keyword`.
    ///
    /// NOTE: The tokenizer already upper-cases words, so callers holding a
    /// `Token` should go through `Token::keyword` instead.
    pub fn from_upper(word: &str) -> Option<Self> {
        use Keyword::*;
        let kw = match word {
            "SELECT" => Select,
            "FROM" => From,
            "JOIN" => Join,
            "INNER" => Inner,
            "LEFT" => Left,
            "RIGHT" => Right,
            "CROSS" => Cross,
            "FULL" => Full,
            "NATURAL" => Natural,
            "WHERE" => Where,
            "GROUP" => Group,
            "ORDER" => Order,
            "BY" => By,
            "HAVING" => Having,
            "INSERT" => Insert,
            "INTO" => Into,
            "UPDATE" => Update,
            "SET" => Set,
            "ON" => On,
            "USING" => Using,
            "CREATE" => Create,
            "ALTER" => Alter,
            "DROP" => Drop,
            "AS" => As,
            _ => return None,
        };
        Some(kw)
    }

    /// Canonical upper-case string form of the keyword.
    pub const fn as_str(self) -> &'static str {
        use Keyword::*;
        match self {
            Select => "SELECT",
            From => "FROM",
            Join => "JOIN",
            Inner => "INNER",
            Left => "LEFT",
            Right => "RIGHT",
            Cross => "CROSS",
            Full => "FULL",
            Natural => "NATURAL",
            Where => "WHERE",
            Group => "GROUP",
            Order => "ORDER",
            By => "BY",
            Having => "HAVING",
            Insert => "INSERT",
            Into => "INTO",
            Update => "UPDATE",
            Set => "SET",
            On => "ON",
            Using => "USING",
            Create => "CREATE",
            Alter => "ALTER",
            Drop => "DROP",
            As => "AS",
        }
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// True if `word` (any case) is a known SQL keyword.
pub fn is_keyword(word: &str) -> bool {
    static SET: LazyLock<HashSet<&'static str>> =
        LazyLock::new(|| ALL_KEYWORDS.iter().copied().collect());
    SET.contains(word.to_uppercase().as_str())
}

pub static SELECT_KEYWORDS: &[&str] = &[
    "DISTINCT", "ALL", "AS", "FROM", "WHERE", "GROUP", "BY", "HAVING", "ORDER", "LIMIT", "OFFSET",
    "UNION", "INTERSECT", "EXCEPT", "CASE", "WHEN", "THEN", "ELSE", "END", "AND", "OR", "NOT",
    "IN", "EXISTS", "BETWEEN", "LIKE", "ILIKE", "IS", "NULL", "TRUE", "FALSE", "ASC", "DESC",
    "NULLS", "FIRST", "LAST", "OVER", "PARTITION", "ROWS", "RANGE", "UNBOUNDED", "PRECEDING",
    "FOLLOWING", "CURRENT", "ROW", "FILTER", "WITHIN", "LATERAL", "CROSS", "NATURAL",
];

pub static FROM_KEYWORDS: &[&str] = &[
    "JOIN", "INNER", "LEFT", "RIGHT", "FULL", "OUTER", "CROSS", "NATURAL", "ON", "USING", "WHERE",
    "GROUP", "BY", "HAVING", "ORDER", "LIMIT", "OFFSET", "AS", "UNION", "INTERSECT", "EXCEPT",
];

pub static WHERE_KEYWORDS: &[&str] = &[
    "AND", "OR", "NOT", "IN", "EXISTS", "BETWEEN", "LIKE", "ILIKE", "IS", "NULL", "TRUE", "FALSE",
    "ANY", "ALL", "SOME", "GROUP", "BY", "HAVING", "ORDER", "LIMIT", "OFFSET",
];

pub static DDL_KEYWORDS: &[&str] = &[
    "TABLE", "INDEX", "VIEW", "MATERIALIZED", "SEQUENCE", "SCHEMA", "DATABASE", "FUNCTION",
    "PROCEDURE", "TRIGGER", "TYPE", "DOMAIN", "EXTENSION", "IF", "EXISTS", "NOT", "CASCADE",
    "RESTRICT", "COLUMN", "CONSTRAINT", "PRIMARY", "KEY", "UNIQUE", "REFERENCES", "FOREIGN",
    "CHECK", "DEFAULT",
];

pub static ALL_KEYWORDS: &[&str] = &[
    "SELECT", "INSERT", "UPDATE", "DELETE", "CREATE", "ALTER", "DROP", "TRUNCATE", "FROM",
    "WHERE", "JOIN", "INNER", "LEFT", "RIGHT", "FULL", "OUTER", "CROSS", "NATURAL", "ON", "USING",
    "GROUP", "BY", "HAVING", "ORDER", "LIMIT", "OFFSET", "AS", "DISTINCT", "ALL", "ANY", "SOME",
    "UNION", "INTERSECT", "EXCEPT", "AND", "OR", "NOT", "IN", "EXISTS", "BETWEEN", "LIKE",
    "ILIKE", "IS", "NULL", "TRUE", "FALSE", "CASE", "WHEN", "THEN", "ELSE", "END", "ASC", "DESC",
    "NULLS", "FIRST", "LAST", "INTO", "VALUES", "SET", "DEFAULT", "RETURNING", "WITH",
    "RECURSIVE", "TABLE", "INDEX", "VIEW", "MATERIALIZED", "SEQUENCE", "SCHEMA", "DATABASE",
    "FUNCTION", "PROCEDURE", "TRIGGER", "TYPE", "DOMAIN", "EXTENSION", "IF", "CASCADE",
    "RESTRICT", "COLUMN", "CONSTRAINT", "PRIMARY", "KEY", "UNIQUE", "REFERENCES", "FOREIGN",
    "CHECK", "BEGIN", "COMMIT", "ROLLBACK", "SAVEPOINT", "GRANT", "REVOKE", "EXPLAIN", "ANALYZE",
    "VERBOSE", "COSTS", "BUFFERS", "FORMAT", "COPY", "TO", "STDIN", "STDOUT", "DELIMITER", "CSV",
    "HEADER", "QUOTE", "ESCAPE", "FORCE", "VACUUM", "REINDEX", "CLUSTER", "COMMENT", "OVER",
    "PARTITION", "ROWS", "RANGE", "UNBOUNDED", "PRECEDING", "FOLLOWING", "CURRENT", "ROW",
    "FILTER", "WITHIN", "LATERAL", "FETCH", "NEXT", "PRIOR", "ABSOLUTE", "RELATIVE", "FORWARD",
    "BACKWARD", "DECLARE", "CURSOR", "FOR", "CLOSE", "MOVE",
];
