//! Statement judge: decides what kind of statement a SQL string is, without a
//! grammar parse, and captures the identifiers routing needs up front.
//!
//! The pipeline is linear and stateless: `clean -> tokenize -> match -> build`.
//! Tokens before the first keyword that can open a statement are skipped, so
//! `(SELECT 1) UNION (SELECT 2)` is a query.
//! The only failure is [`JudgeError::UnclassifiableStatement`], raised when no rule
//! matches the leading keywords or a matched rule's identifier is missing.
//!
//! ```
//! use sqljudge::sql_judge::{SqlJudgeEngine, StatementCategory};
//!
//! let engine = SqlJudgeEngine::default();
//! let statement = engine.judge("/*+ HINT */ use sharding_db").unwrap();
//! assert_eq!(
//!     statement,
//!     StatementCategory::UseSchema { schema: "sharding_db".to_string() }
//! );
//! assert!(engine.judge("int i = 0").is_err());
//! ```

pub(crate) mod common;
pub mod dialect;
pub mod errors;
pub mod factory;
pub mod preprocessor;
pub mod rules;
pub mod statement;
pub mod tokenizer;

pub use common::LexicalSyntax;
pub use dialect::Dialect;
pub use errors::JudgeError;
pub use statement::{InsertMetadata, MutationKind, StatementCategory, TableToken};

/// Classifies statements for one dialect. Holds no per-call state, so a single
/// engine can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SqlJudgeEngine {
    dialect: Dialect,
}

impl SqlJudgeEngine {
    pub fn new(dialect: Dialect) -> Self {
        SqlJudgeEngine { dialect }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn judge(&self, sql: &str) -> Result<StatementCategory, JudgeError> {
        let table = self.dialect.rule_table();
        let syntax = self.dialect.lexical_syntax();
        let cleaned = preprocessor::clean_with(sql, syntax);
        // Tokens ahead of the first statement keyword (`(`, stray `-`, words) are noise
        let keywords: Vec<_> = tokenizer::tokens(&cleaned, syntax)
            .skip_while(|keyword| !table.opens_statement(keyword))
            .take(table.lookahead())
            .collect();
        log::trace!(
            "Judging [{}] with keywords {:?}",
            cleaned,
            keywords.iter().map(|k| k.text).collect::<Vec<_>>()
        );

        let Some(matched) = table.find(&keywords) else {
            log::debug!("No {} rule matches: {}", self.dialect, sql);
            return Err(JudgeError::unclassifiable(sql));
        };
        log::debug!("Matched {:?} rule ({} keywords)", matched.rule.id, matched.consumed);

        factory::build(&matched, &cleaned, &keywords).ok_or_else(|| {
            log::debug!("Missing identifier for {:?} rule: {}", matched.rule.id, sql);
            JudgeError::unclassifiable(sql)
        })
    }
}

/// Judge a statement with the default (MySQL) rules.
pub fn judge(sql: &str) -> Result<StatementCategory, JudgeError> {
    SqlJudgeEngine::default().judge(sql)
}
