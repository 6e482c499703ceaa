//! Per-dialect rule tables.
//!
//! Every dialect shares [`BASE_RULES`] (queries, DML, transaction control and
//! session `SET`). A dialect puts its own layer in front of the base layer to add
//! administrative statements or to override how a shared keyword family is read.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use super::common::LexicalSyntax;
use super::errors::ParseEnumError;
use super::rules::{Capture, Rule, RuleId, RuleTable, Step};

const SHOW: Step = Step::Keyword(&["SHOW"]);

pub const BASE_RULES: &[Rule] = &[
    Rule::new(RuleId::Query, &[Step::Keyword(&["SELECT", "CALL"])]),
    Rule::new(
        RuleId::Insert,
        &[
            Step::Keyword(&["INSERT"]),
            Step::Optional(&["LOW_PRIORITY", "DELAYED", "HIGH_PRIORITY"]),
            Step::Optional(&["IGNORE"]),
        ],
    ),
    Rule::new(RuleId::Update, &[Step::Keyword(&["UPDATE"])]),
    Rule::new(RuleId::Delete, &[Step::Keyword(&["DELETE"])]),
    Rule::new(
        RuleId::TransactionControl,
        &[
            Step::Keyword(&["SET"]),
            Step::Keyword(&["TRANSACTION", "AUTOCOMMIT"]),
        ],
    ),
    Rule::new(RuleId::SessionSet, &[Step::Keyword(&["SET"]), Step::Any]),
    Rule::new(
        RuleId::TransactionControl,
        &[Step::Keyword(&["COMMIT", "ROLLBACK", "SAVEPOINT", "BEGIN"])],
    ),
];

pub const MYSQL_RULES: &[Rule] = &[
    Rule::new(
        RuleId::Replace,
        &[
            Step::Keyword(&["REPLACE"]),
            Step::Optional(&["LOW_PRIORITY", "DELAYED"]),
        ],
    ),
    Rule::new(
        RuleId::TransactionControl,
        &[
            Step::Keyword(&["SET"]),
            Step::Optional(&["SESSION", "GLOBAL", "LOCAL"]),
            Step::Keyword(&[
                "TRANSACTION",
                "AUTOCOMMIT",
                "@@AUTOCOMMIT",
                "@@SESSION.AUTOCOMMIT",
                "@@LOCAL.AUTOCOMMIT",
            ]),
        ],
    ),
    Rule::new(
        RuleId::TransactionControl,
        &[Step::Keyword(&["START"]), Step::Keyword(&["TRANSACTION"])],
    ),
    Rule::new(
        RuleId::TransactionControl,
        &[Step::Keyword(&["RELEASE"]), Step::Keyword(&["SAVEPOINT"])],
    ),
    Rule::new(RuleId::UseSchema, &[Step::Keyword(&["USE"])]).capturing(Capture::Identifier),
    Rule::new(RuleId::Describe, &[Step::Keyword(&["DESCRIBE", "DESC"])])
        .capturing(Capture::Identifier),
    Rule::new(
        RuleId::ShowDatabases,
        &[SHOW, Step::Keyword(&["DATABASES", "SCHEMAS"])],
    ),
    Rule::new(
        RuleId::ShowTableStatus,
        &[SHOW, Step::Keyword(&["TABLE"]), Step::Keyword(&["STATUS"])],
    )
    .capturing(Capture::OptionalFromIdentifier),
    Rule::new(
        RuleId::ShowTables,
        &[SHOW, Step::Optional(&["FULL"]), Step::Keyword(&["TABLES"])],
    ),
    Rule::new(
        RuleId::ShowColumns,
        &[
            SHOW,
            Step::Optional(&["FULL"]),
            Step::Keyword(&["COLUMNS", "FIELDS"]),
        ],
    )
    .capturing(Capture::FromIdentifier),
    Rule::new(
        RuleId::ShowIndex,
        &[SHOW, Step::Keyword(&["INDEX", "INDEXES", "KEYS"])],
    )
    .capturing(Capture::FromIdentifier),
    Rule::new(
        RuleId::ShowCreateTable,
        &[SHOW, Step::Keyword(&["CREATE"]), Step::Keyword(&["TABLE"])],
    )
    .capturing(Capture::TableReference),
    Rule::new(RuleId::ShowOther, &[SHOW, Step::Any]),
];

pub const POSTGRESQL_RULES: &[Rule] = &[
    Rule::new(
        RuleId::TransactionControl,
        &[Step::Keyword(&["START"]), Step::Keyword(&["TRANSACTION"])],
    ),
    Rule::new(
        RuleId::TransactionControl,
        &[Step::Keyword(&["END", "ABORT"])],
    ),
    Rule::new(
        RuleId::TransactionControl,
        &[
            Step::Keyword(&["SET"]),
            Step::Keyword(&["SESSION"]),
            Step::Keyword(&["CHARACTERISTICS"]),
        ],
    ),
    Rule::new(RuleId::ShowOther, &[SHOW, Step::Any]),
];

lazy_static! {
    static ref MYSQL_TABLE: RuleTable = RuleTable::compose(&[MYSQL_RULES, BASE_RULES]);
    static ref POSTGRESQL_TABLE: RuleTable = RuleTable::compose(&[POSTGRESQL_RULES, BASE_RULES]);
    static ref SQL92_TABLE: RuleTable = RuleTable::compose(&[BASE_RULES]);
}

/// SQL dialect whose statement rules the judge applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    #[serde(alias = "MySQL")]
    MySql,
    #[serde(alias = "postgres", alias = "pg")]
    PostgreSql,
    #[serde(alias = "ansi")]
    Sql92,
}

impl Dialect {
    pub const ALL: [Dialect; 3] = [Dialect::MySql, Dialect::PostgreSql, Dialect::Sql92];

    pub fn rule_table(self) -> &'static RuleTable {
        match self {
            Dialect::MySql => &MYSQL_TABLE,
            Dialect::PostgreSql => &POSTGRESQL_TABLE,
            Dialect::Sql92 => &SQL92_TABLE,
        }
    }

    pub fn lexical_syntax(self) -> LexicalSyntax {
        LexicalSyntax {
            hash_line_comments: self == Dialect::MySql,
            backslash_escapes: self == Dialect::MySql,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Dialect::MySql => "mysql",
            Dialect::PostgreSql => "postgresql",
            Dialect::Sql92 => "sql92",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mysql" => Ok(Dialect::MySql),
            "postgresql" | "postgres" | "pg" => Ok(Dialect::PostgreSql),
            "sql92" | "ansi" => Ok(Dialect::Sql92),
            _ => Err(ParseEnumError {
                kind: "dialect",
                value: s.to_string(),
            }),
        }
    }
}
