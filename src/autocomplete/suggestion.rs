use crate::*;

/// What a suggestion completes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum SuggestionKind {
    #[display("keyword")]
    Keyword,
    #[display("table")]
    Table,
    #[display("view")]
    View,
    #[display("column")]
    Column,
    #[display("function")]
    Function,
    #[display("schema")]
    Schema,
    #[display("database")]
    Database,
    #[display("datatype")]
    Datatype,
    #[display("alias")]
    Alias,
    #[display("special")]
    Special,
    #[display("favorite")]
    Favorite,
}

/// An autocomplete suggestion.
///
/// `text` is what gets inserted in place of the word being typed;
/// `display_text` is what a completion menu shows.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{display_text}")]
pub struct Suggestion {
    pub text: String,
    pub display_text: String,
    pub kind: SuggestionKind,
    pub description: String,
}
pub type Suggestions = Vec<Suggestion>;

impl Suggestion {
    pub fn new(
        text: impl Into<String>,
        kind: SuggestionKind,
        description: impl Into<String>,
    ) -> Self {
        let text = text.into();
        Self {
            display_text: text.clone(),
            text,
            kind,
            description: description.into(),
        }
    }

    pub fn keyword(text: impl Into<String>) -> Self {
        Self::new(text, SuggestionKind::Keyword, "keyword")
    }

    pub fn table(name: &str) -> Self {
        Self::new(name, SuggestionKind::Table, "table")
    }

    pub fn view(name: &str) -> Self {
        Self::new(name, SuggestionKind::View, "view")
    }

    /// Column suggestion described by the table it belongs to.
    pub fn column(name: &str, table: &str) -> Self {
        Self::new(name, SuggestionKind::Column, table)
    }

    /// Functions insert with an empty argument list: `count` becomes `count()`.
    pub fn function(name: &str) -> Self {
        Self::new(format!("{name}()"), SuggestionKind::Function, "function")
    }

    pub fn schema(name: &str) -> Self {
        Self::new(name, SuggestionKind::Schema, "schema")
    }

    pub fn database(name: &str) -> Self {
        Self::new(name, SuggestionKind::Database, "database")
    }

    pub fn datatype(name: &str) -> Self {
        Self::new(name, SuggestionKind::Datatype, "type")
    }

    pub fn special(command: &SpecialCommand) -> Self {
        Self::new(
            &command.name,
            SuggestionKind::Special,
            &command.description,
        )
    }

    pub fn favorite(name: &str) -> Self {
        Self::new(name, SuggestionKind::Favorite, "saved query")
    }

    /// The name this suggestion is matched and ranked on.
    pub fn match_text(&self) -> &str {
        match self.kind {
            SuggestionKind::Function => self.text.trim_end_matches("()"),
            _ => &self.text,
        }
    }
}
