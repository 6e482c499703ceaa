use thiserror::Error;

/// Failure of the statement judge. Carries the statement exactly as received
/// so callers can report it back to the client.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JudgeError {
    #[error("Unsupported SQL statement: [{sql}]")]
    UnclassifiableStatement { sql: String },
}

impl JudgeError {
    pub fn unclassifiable(sql: impl Into<String>) -> Self {
        JudgeError::UnclassifiableStatement { sql: sql.into() }
    }

    /// The rejected statement text.
    pub fn sql(&self) -> &str {
        match self {
            JudgeError::UnclassifiableStatement { sql } => sql,
        }
    }
}

/// Unknown name for a string-configured enum (dialect, output format).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown {kind}: '{value}'")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}
