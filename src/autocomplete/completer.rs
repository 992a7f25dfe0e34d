use crate::*;
use itertools::Itertools as _;

/// Suggestions for one cursor position plus the span they replace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// Range of the text before the cursor that an accepted suggestion
    /// replaces. After `alias.` it covers only the part past the dot.
    pub span: WordSpan,
    pub suggestions: Suggestions,
}

/// Context-aware SQL completer.
///
/// Holds a [`MetadataHandle`] to the host's current schema snapshot and the
/// two host settings: smart (context filtered) completion and keyword casing.
/// Every call re-lexes the text before the cursor; nothing is cached between
/// calls.
#[derive(Debug, Clone)]
pub struct Completer {
    metadata: MetadataHandle,
    smart: bool,
    casing: KeywordCasing,
    ranked: bool,
}

impl Completer {
    pub fn new(metadata: Metadata, smart: bool) -> Self {
        Self::with_handle(MetadataHandle::new(metadata), smart)
    }

    /// Share an existing snapshot slot, e.g. one a background refresh writes to.
    pub fn with_handle(metadata: MetadataHandle, smart: bool) -> Self {
        Self {
            metadata,
            smart,
            casing: KeywordCasing::default(),
            ranked: false,
        }
    }

    pub fn from_settings(settings: &Settings, metadata: MetadataHandle) -> Result<Self> {
        let mut completer = Self::with_handle(metadata, settings.smart_completion);
        completer.set_keyword_casing(settings.keyword_casing()?);
        completer.set_ranked(settings.ranked);
        Ok(completer)
    }

    pub fn set_smart(&mut self, smart: bool) {
        self.smart = smart;
    }

    pub fn smart(&self) -> bool {
        self.smart
    }

    pub fn set_keyword_casing(&mut self, casing: KeywordCasing) {
        self.casing = casing;
    }

    pub fn keyword_casing(&self) -> KeywordCasing {
        self.casing
    }

    /// Sort suggestions best match first instead of keeping category order.
    pub fn set_ranked(&mut self, ranked: bool) {
        self.ranked = ranked;
    }

    /// Swap in a new snapshot. Calls already in flight keep the old one.
    pub fn update_metadata(&self, metadata: Metadata) {
        self.metadata.replace(metadata);
    }

    pub fn metadata_handle(&self) -> MetadataHandle {
        self.metadata.clone()
    }

    /// Suggestions for `text` with the cursor at byte offset `cursor`.
    ///
    /// A cursor past the end is clamped to the end of `text`.
    pub fn complete(&self, text: &str, cursor: usize) -> Suggestions {
        self.complete_at(text, cursor).suggestions
    }

    /// Like [`Completer::complete`], also returning the span to replace.
    pub fn complete_at(&self, text: &str, cursor: usize) -> Completion {
        let cursor = clamp_cursor(text, cursor);
        let before = &text[..cursor];
        let ctx = analyze_statement(before, &text[cursor..]);
        // Only a column after a real qualifier replaces the part past the dot;
        // anything else (e.g. `billing.invoices`) replaces the whole word.
        let span = if ctx.after_dot() {
            filter_span(before)
        } else {
            word_span(before)
        };
        let word = span.slice(before);
        let meta = self.metadata.load();
        let candidates = Candidates {
            meta: &meta,
            word,
            casing: self.casing,
        };

        let mut suggestions = if self.smart {
            let suggestions = candidates.for_context(&ctx);
            debug!(
                clause = ?ctx.clause,
                backslash = ctx.is_backslash,
                before_dot = ?ctx.before_dot,
                count = suggestions.len(),
                "smart completion"
            );
            suggestions
        } else {
            candidates.all()
        };

        if self.ranked {
            suggestions.sort_by_key(|s| fuzzy_score(word, s.match_text()));
        }
        Completion { span, suggestions }
    }
}

fn clamp_cursor(text: &str, cursor: usize) -> usize {
    let mut cursor = cursor.min(text.len());
    while !text.is_char_boundary(cursor) {
        cursor -= 1;
    }
    cursor
}

/// One completion request's view of the snapshot: each method yields the
/// fuzzy-filtered suggestions of one category.
struct Candidates<'a> {
    meta: &'a Metadata,
    word: &'a str,
    casing: KeywordCasing,
}

impl Candidates<'_> {
    fn for_context(&self, ctx: &SqlContext) -> Suggestions {
        if ctx.is_backslash {
            return self.specials();
        }
        if let Some(table) = ctx.dot_table() {
            return self.columns_of(&table);
        }

        let Some(clause) = ctx.clause else {
            return self.all();
        };
        match clause {
            Clause::Select => [
                self.keywords(SELECT_KEYWORDS),
                self.functions(),
                self.tables(),
                self.referenced_columns(ctx),
            ]
            .concat(),
            Clause::From | Clause::Join => [
                self.keywords(FROM_KEYWORDS),
                self.tables(),
                self.views(),
                self.schemas(),
            ]
            .concat(),
            Clause::Where | Clause::Having | Clause::On => [
                self.keywords(WHERE_KEYWORDS),
                self.referenced_columns(ctx),
                self.functions(),
            ]
            .concat(),
            Clause::OrderBy | Clause::GroupBy | Clause::Set => self.referenced_columns(ctx),
            Clause::Insert => [self.tables(), self.referenced_columns(ctx)].concat(),
            Clause::Update => self.tables(),
            Clause::Create | Clause::Alter | Clause::Drop => [
                self.keywords(DDL_KEYWORDS),
                self.tables(),
                self.schemas(),
                self.datatypes(),
            ]
            .concat(),
            Clause::Using => self.all(),
        }
    }

    /// Every category, no context filtering.
    fn all(&self) -> Suggestions {
        [
            self.keywords(ALL_KEYWORDS),
            self.tables(),
            self.views(),
            self.all_columns(),
            self.functions(),
            self.schemas(),
            self.databases(),
            self.datatypes(),
            self.specials(),
            self.favorites(),
        ]
        .concat()
    }

    fn hits<'n>(&self, names: impl IntoIterator<Item = &'n str>) -> impl Iterator<Item = &'n str> {
        let word = self.word;
        names.into_iter().filter(move |n| fuzzy_match(word, n))
    }

    fn keywords(&self, keywords: &[&str]) -> Suggestions {
        self.hits(keywords.iter().copied())
            .map(|kw| Suggestion::keyword(self.casing.apply(kw, self.word)))
            .collect()
    }

    fn tables(&self) -> Suggestions {
        self.hits(self.meta.tables.iter().map(String::as_str))
            .map(Suggestion::table)
            .collect()
    }

    fn views(&self) -> Suggestions {
        self.hits(self.meta.views.iter().map(String::as_str))
            .map(Suggestion::view)
            .collect()
    }

    fn functions(&self) -> Suggestions {
        self.hits(self.meta.functions.iter().map(String::as_str))
            .map(Suggestion::function)
            .collect()
    }

    fn schemas(&self) -> Suggestions {
        self.hits(self.meta.schemas.iter().map(String::as_str))
            .map(Suggestion::schema)
            .collect()
    }

    fn databases(&self) -> Suggestions {
        self.hits(self.meta.databases.iter().map(String::as_str))
            .map(Suggestion::database)
            .collect()
    }

    fn datatypes(&self) -> Suggestions {
        self.hits(self.meta.datatypes.iter().map(String::as_str))
            .map(Suggestion::datatype)
            .collect()
    }

    fn favorites(&self) -> Suggestions {
        self.hits(self.meta.favorites.iter().map(String::as_str))
            .map(Suggestion::favorite)
            .collect()
    }

    fn specials(&self) -> Suggestions {
        self.meta
            .specials
            .iter()
            .filter(|cmd| fuzzy_match(self.word, &cmd.name))
            .map(Suggestion::special)
            .collect()
    }

    fn columns_of(&self, table: &str) -> Suggestions {
        self.hits(self.meta.columns_of(table).iter().map(String::as_str))
            .map(|col| Suggestion::column(col, table))
            .collect()
    }

    /// Columns of the tables the statement references. Falls back to every
    /// known column when none of them is in the snapshot.
    fn referenced_columns(&self, ctx: &SqlContext) -> Suggestions {
        let known = ctx
            .tables
            .iter()
            .map(|r| r.name.as_str())
            .unique()
            .filter(|name| !self.meta.columns_of(name).is_empty())
            .collect_vec();
        if known.is_empty() {
            return self.all_columns();
        }
        known.into_iter().flat_map(|t| self.columns_of(t)).collect()
    }

    fn all_columns(&self) -> Suggestions {
        self.meta
            .all_columns()
            .filter(|(_, col)| fuzzy_match(self.word, col))
            .map(|(table, col)| Suggestion::column(col, table))
            .collect()
    }
}
