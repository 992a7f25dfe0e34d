use super::*;

/// A table mentioned after `FROM`, `JOIN`, `UPDATE` or `INTO`, with its alias.
///
/// Both fields are lower-cased so lookups ignore the casing the user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    pub name: String,
    pub alias: Option<String>,
}

impl TableRef {
    pub fn new(name: impl Into<String>, alias: Option<impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            alias: alias.map(Into::into),
        }
    }

    /// True if `ident` names this reference, either through its alias or the
    /// table name itself.
    pub fn answers_to(&self, ident: &str) -> bool {
        self.alias.as_deref() == Some(ident) || self.name == ident
    }
}

impl std::fmt::Display for TableRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.alias {
            Some(alias) => write!(f, "{} {}", self.name, alias),
            None => f.write_str(&self.name),
        }
    }
}

/// Collect every table reference in the token stream, in order of appearance.
///
/// Parsing rules (simplified):
/// - The token right after `FROM`/`JOIN`/`UPDATE`/`INTO` is the table, unless
///   it is a keyword (e.g. `FROM (SELECT ...`) or not a name at all.
/// - `table AS alias` and `table alias` both bind an alias. A bare alias must
///   directly follow the table with no `,`/`(`/`)`/`;` in between and must not
///   be a keyword, so `FROM a, b` and `INTO t (col)` bind none.
pub fn extract_table_refs(tokens: &[Token]) -> Vec<TableRef> {
    let mut refs = Vec::new();
    for (i, tok) in tokens.iter().enumerate() {
        if !tok
            .keyword()
            .is_some_and(|kw| Keyword::TABLE_INTRODUCERS.contains(&kw))
        {
            continue;
        }
        let Some(name) = tokens.get(i + 1).and_then(table_name) else {
            continue;
        };
        let alias = alias_at(tokens, i + 2);
        refs.push(TableRef { name, alias });
    }
    refs
}

/// Map a dot qualifier back to a table name.
///
/// The first reference whose alias or name equals `ident` wins. Anything
/// unresolved is returned as is.
pub fn resolve_table_name(ident: &str, refs: &[TableRef]) -> String {
    refs.iter()
        .find(|r| r.answers_to(ident))
        .map_or_else(|| ident.to_string(), |r| r.name.clone())
}

fn alias_at(tokens: &[Token], idx: usize) -> Option<String> {
    let next = tokens.get(idx).filter(|t| t.is_adjacent())?;
    if next.is_keyword(Keyword::As) {
        return tokens.get(idx + 1).and_then(table_name);
    }
    table_name(next)
}

fn table_name(tok: &Token) -> Option<String> {
    match &tok.kind {
        TokenKind::Word(word) if !is_keyword(word) => Some(word.to_lowercase()),
        TokenKind::QuotedIdentifier(quoted) => {
            let inner = quoted.trim_matches('"');
            (!inner.is_empty()).then(|| inner.to_lowercase())
        }
        _ => None,
    }
}
