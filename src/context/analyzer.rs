use super::*;
use crate::trace;
use itertools::Itertools as _;

/// Where the cursor sits in the statement typed so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SqlContext {
    /// Most recently opened clause before the cursor.
    pub clause: Option<Clause>,
    /// Input is a backslash command such as `\dt`.
    pub is_backslash: bool,
    /// Qualifier in front of a trailing `.`; `Some` means the cursor follows a dot.
    pub before_dot: Option<String>,
    /// Tables referenced anywhere in the statement, in order.
    pub tables: Vec<TableRef>,
}

macro_rules! clause_flags {
    ($($flag:ident => $clause:ident),* $(,)?) => {
        impl SqlContext {
            $(
                pub fn $flag(&self) -> bool {
                    self.clause == Some(Clause::$clause)
                }
            )*
        }
    };
}

clause_flags! {
    in_select => Select,
    in_from => From,
    in_join => Join,
    in_where => Where,
    in_order_by => OrderBy,
    in_group_by => GroupBy,
    in_having => Having,
    in_insert => Insert,
    in_update => Update,
    in_set => Set,
    in_on => On,
    in_using => Using,
    in_create => Create,
    in_alter => Alter,
    in_drop => Drop,
}

impl SqlContext {
    pub fn after_dot(&self) -> bool {
        self.before_dot.is_some()
    }

    /// Table the dot qualifier refers to, resolved through aliases.
    pub fn dot_table(&self) -> Option<String> {
        self.before_dot
            .as_deref()
            .map(|ident| resolve_table_name(ident, &self.tables))
    }
}

/// Classify the text in front of the cursor.
///
/// This is a greedy backward scan, not a parser: the first clause keyword
/// found walking back from the cursor wins. Subqueries are not tracked, so
/// `SELECT ... FROM (SELECT ... FROM x) t WHERE` reports whatever clause
/// keyword is nearest.
pub fn analyze(raw: &str) -> SqlContext {
    analyze_statement(raw, "")
}

/// Like [`analyze`], but tables named in `after` (the text behind the
/// cursor, up to the end of the statement) also count, so the qualifier in
/// `SELECT u.| FROM users u` resolves.
pub fn analyze_statement(before: &str, after: &str) -> SqlContext {
    let mut ctx = SqlContext::default();
    let text = before.trim();

    if text.is_empty() {
        return ctx;
    }

    if text.starts_with('\\') {
        ctx.is_backslash = true;
        return ctx;
    }

    let tokens = tokenize(text);
    ctx.tables = extract_table_refs(&tokens);
    ctx.tables.extend(trailing_table_refs(after));
    ctx.clause = active_clause(&tokens);
    ctx.before_dot = dot_qualifier(before, &ctx.tables);

    trace!(
        clause = ?ctx.clause,
        before_dot = ?ctx.before_dot,
        tables = %ctx.tables.iter().join(", "),
        "analyzed completion context"
    );
    ctx
}

fn trailing_table_refs(after: &str) -> Vec<TableRef> {
    let tokens: Vec<Token> = tokenize(after)
        .into_iter()
        .take_while(|t| t.preceded_by != Some(';'))
        .collect();
    extract_table_refs(&tokens)
}

/// Qualifier of a dotted word at the end of `text`: `users` for `users.`,
/// `users` for `public.users.`, `u` for `u.na`.
///
/// A trailing dot always counts, even when followed by whitespace. A dot in
/// the middle of the word only counts when its qualifier names one of
/// `tables`, so a schema-qualified name such as `billing.inv` stays a plain
/// word.
fn dot_qualifier(text: &str, tables: &[TableRef]) -> Option<String> {
    let trimmed = text.trim_end();
    let trailing = trimmed.ends_with('.');
    let word = if trailing { last_word(trimmed) } else { last_word(text) };
    let (qualifier, _) = word.rsplit_once('.')?;
    let qualifier = qualifier.rsplit('.').next().unwrap_or_default().to_lowercase();
    (trailing || tables.iter().any(|r| r.answers_to(&qualifier))).then_some(qualifier)
}

fn active_clause(tokens: &[Token]) -> Option<Clause> {
    for (i, tok) in tokens.iter().enumerate().rev() {
        let Some(kw) = tok.keyword() else {
            continue;
        };
        let next_is = |expected: Keyword| tokens.get(i + 1).is_some_and(|t| t.is_keyword(expected));
        let clause = match kw {
            Keyword::Select => Clause::Select,
            Keyword::From => Clause::From,
            Keyword::Join => Clause::Join,
            kw if Keyword::JOIN_MODIFIERS.contains(&kw) && next_is(Keyword::Join) => Clause::Join,
            Keyword::Where => Clause::Where,
            Keyword::Order if next_is(Keyword::By) => Clause::OrderBy,
            Keyword::Group if next_is(Keyword::By) => Clause::GroupBy,
            Keyword::Having => Clause::Having,
            Keyword::Insert | Keyword::Into => Clause::Insert,
            Keyword::Update => Clause::Update,
            Keyword::Set => Clause::Set,
            Keyword::On => Clause::On,
            Keyword::Using => Clause::Using,
            Keyword::Create => Clause::Create,
            Keyword::Alter => Clause::Alter,
            Keyword::Drop => Clause::Drop,
            _ => continue,
        };
        return Some(clause);
    }
    None
}
