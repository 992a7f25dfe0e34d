use super::*;

/// A backslash command offered in `\` completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialCommand {
    pub name: String,
    pub description: String,
}

impl SpecialCommand {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Schema picture the completer draws candidates from.
///
/// Owned by the host and replaced wholesale on refresh; the engine only ever
/// reads it. Column lists keep the order the provider returned them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pub tables: Vec<String>,
    pub views: Vec<String>,
    pub columns: IndexMap<String, Vec<String>>,
    pub functions: Vec<String>,
    pub schemas: Vec<String>,
    pub databases: Vec<String>,
    pub datatypes: Vec<String>,
    pub specials: Vec<SpecialCommand>,
    /// Names of saved queries.
    pub favorites: Vec<String>,
}

impl Metadata {
    /// Columns of `table`.
    ///
    /// Tries the exact key, then a case-insensitive match, then (for
    /// `schema.table` names) the bare table part. Unknown tables have no
    /// columns.
    pub fn columns_of(&self, table: &str) -> &[String] {
        self.lookup_columns(table)
            .or_else(|| {
                table
                    .rsplit_once('.')
                    .and_then(|(_, bare)| self.lookup_columns(bare))
            })
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn lookup_columns(&self, table: &str) -> Option<&Vec<String>> {
        self.columns.get(table).or_else(|| {
            self.columns
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(table))
                .map(|(_, cols)| cols)
        })
    }

    /// Every `(table, column)` pair in snapshot order.
    pub fn all_columns(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns
            .iter()
            .flat_map(|(table, cols)| cols.iter().map(move |c| (table.as_str(), c.as_str())))
    }
}
