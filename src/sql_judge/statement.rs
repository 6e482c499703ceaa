use std::fmt;

use serde::Serialize;

use super::common::is_quote;

/// Category of a statement as decided by the judge, with the few fields routing
/// needs before (or instead of) a full parse.
///
/// Captured names are verbatim: original case and qualification, quotes kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum StatementCategory {
    /// SELECT, CALL
    Query,
    Mutation { kind: MutationKind },
    TransactionControl,
    /// SET of anything other than transaction characteristics or autocommit
    SessionSet,
    UseSchema { schema: String },
    Describe { table: String },
    ShowDatabases,
    /// `None` when there is no `FROM <db>` clause and the current schema applies
    ShowTableStatus { database: Option<String> },
    ShowTables,
    ShowColumns { table: String },
    ShowIndex { table: String },
    ShowCreateTable { reference_token: TableToken },
    ShowOther,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationKind {
    Insert(InsertMetadata),
    Update,
    Delete,
}

/// What the leading keywords reveal about an insert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InsertMetadata {
    /// MySQL `REPLACE` rather than `INSERT`.
    pub replace: bool,
    /// `IGNORE` modifier present.
    pub ignore: bool,
}

/// Located table reference inside the cleaned statement text, used by the rewriter
/// to splice in a physical table name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableToken {
    /// Byte offset in the cleaned statement.
    pub start: usize,
    /// Byte length of the reference.
    pub length: usize,
    /// The reference as written, e.g. `logic_db.t_order`.
    pub name: String,
}

impl StatementCategory {
    /// Table tokens for the rewriter. Exactly one for `ShowCreateTable`, none otherwise.
    pub fn table_tokens(&self) -> &[TableToken] {
        match self {
            StatementCategory::ShowCreateTable { reference_token } => {
                std::slice::from_ref(reference_token)
            }
            _ => &[],
        }
    }

    /// Whether routing needs the deep grammar parser for this statement.
    pub fn needs_deep_parse(&self) -> bool {
        matches!(
            self,
            StatementCategory::Query | StatementCategory::Mutation { .. }
        )
    }

    pub fn is_insert(&self) -> bool {
        matches!(
            self,
            StatementCategory::Mutation {
                kind: MutationKind::Insert(_)
            }
        )
    }
}

impl fmt::Display for StatementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatementCategory::Query => write!(f, "Query"),
            StatementCategory::Mutation { kind } => write!(f, "Mutation({})", kind),
            StatementCategory::TransactionControl => write!(f, "TransactionControl"),
            StatementCategory::SessionSet => write!(f, "SessionSet"),
            StatementCategory::UseSchema { schema } => write!(f, "UseSchema({})", schema),
            StatementCategory::Describe { table } => write!(f, "Describe({})", table),
            StatementCategory::ShowDatabases => write!(f, "ShowDatabases"),
            StatementCategory::ShowTableStatus {
                database: Some(database),
            } => write!(f, "ShowTableStatus({})", database),
            StatementCategory::ShowTableStatus { database: None } => write!(f, "ShowTableStatus"),
            StatementCategory::ShowTables => write!(f, "ShowTables"),
            StatementCategory::ShowColumns { table } => write!(f, "ShowColumns({})", table),
            StatementCategory::ShowIndex { table } => write!(f, "ShowIndex({})", table),
            StatementCategory::ShowCreateTable { reference_token } => {
                write!(f, "ShowCreateTable({})", reference_token)
            }
            StatementCategory::ShowOther => write!(f, "ShowOther"),
        }
    }
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MutationKind::Insert(meta) => {
                f.write_str(if meta.replace { "Replace" } else { "Insert" })?;
                if meta.ignore {
                    f.write_str(" Ignore")?;
                }
                Ok(())
            }
            MutationKind::Update => f.write_str("Update"),
            MutationKind::Delete => f.write_str("Delete"),
        }
    }
}

impl TableToken {
    pub fn new(start: usize, name: &str) -> Self {
        TableToken {
            start,
            length: name.len(),
            name: name.to_string(),
        }
    }

    /// Exclusive end offset in the cleaned statement.
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    /// Owner schema without identifier quotes, if the reference is qualified.
    pub fn schema(&self) -> Option<&str> {
        self.split().0.map(unquote)
    }

    /// Table name without identifier quotes.
    pub fn table(&self) -> &str {
        unquote(self.split().1)
    }

    // Split on the first '.' outside a quoted run.
    fn split(&self) -> (Option<&str>, &str) {
        let mut open_quote = None;
        for (idx, c) in self.name.char_indices() {
            match open_quote {
                Some(q) if c == q => open_quote = None,
                Some(_) => {}
                None if is_quote(c) => open_quote = Some(c),
                None if c == '.' => return (Some(&self.name[..idx]), &self.name[idx + 1..]),
                None => {}
            }
        }
        (None, &self.name)
    }
}

impl fmt::Display for TableToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}..{}", self.name, self.start, self.end())
    }
}

fn unquote(identifier: &str) -> &str {
    for quote in ['`', '"'] {
        if let Some(inner) = identifier
            .strip_prefix(quote)
            .and_then(|s| s.strip_suffix(quote))
        {
            return inner;
        }
    }
    identifier
}
