use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::sql_judge::errors::ParseEnumError;
use crate::sql_judge::{JudgeError, StatementCategory};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<summary>\t<statement>` per line
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl FromStr for OutputFormat {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ParseEnumError {
                kind: "output format",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Judge outcome for one statement, as printed by the CLI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JudgeReport<'a> {
    pub sql: &'a str,
    #[serde(flatten)]
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Classified { statement: StatementCategory },
    Unsupported { error: String },
}

impl<'a> JudgeReport<'a> {
    pub fn new(sql: &'a str, result: Result<StatementCategory, JudgeError>) -> Self {
        let outcome = match result {
            Ok(statement) => Outcome::Classified { statement },
            Err(e) => Outcome::Unsupported {
                error: e.to_string(),
            },
        };
        JudgeReport { sql, outcome }
    }

    pub fn is_classified(&self) -> bool {
        matches!(self.outcome, Outcome::Classified { .. })
    }

    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Json => serde_json::to_string(self),
            OutputFormat::Text => Ok(match &self.outcome {
                Outcome::Classified { statement } => {
                    format!("{}\t{}", statement, single_line(self.sql))
                }
                Outcome::Unsupported { error } => format!("ERROR\t{}", single_line(error)),
            }),
        }
    }
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
