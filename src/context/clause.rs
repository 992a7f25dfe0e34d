/// The SQL clause the cursor is logically inside.
///
/// Exactly one clause can be active; the classifier picks the most recently
/// opened one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Clause {
    #[display("SELECT")]
    Select,
    #[display("FROM")]
    From,
    #[display("JOIN")]
    Join,
    #[display("WHERE")]
    Where,
    #[display("ORDER BY")]
    OrderBy,
    #[display("GROUP BY")]
    GroupBy,
    #[display("HAVING")]
    Having,
    #[display("INSERT")]
    Insert,
    #[display("UPDATE")]
    Update,
    #[display("SET")]
    Set,
    #[display("ON")]
    On,
    #[display("USING")]
    Using,
    #[display("CREATE")]
    Create,
    #[display("ALTER")]
    Alter,
    #[display("DROP")]
    Drop,
}
