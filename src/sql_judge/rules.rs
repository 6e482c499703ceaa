//! Classification rules and first-match-wins rule tables.
//!
//! A rule is a short pattern over the leading keywords plus an optional capture
//! of the identifier that follows the pattern. Tables are composed from layers
//! (dialect layer ahead of the shared base layer) so a dialect overrides a base
//! rule simply by listing a rule for the same keywords earlier.

use super::tokenizer::Keyword;

/// Statements no rule classifies. Skipping of leading noise stops at them, so a
/// `SET` or `SELECT` inside DDL is never taken for the statement's own keyword.
const UNCLASSIFIED_STATEMENTS: &[&str] = &[
    "CREATE", "ALTER", "DROP", "TRUNCATE", "RENAME", "GRANT", "REVOKE", "LOAD", "EXPLAIN",
];

/// One position of a rule pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Token must be one of these (upper-case) keywords.
    Keyword(&'static [&'static str]),
    /// Consumed when it is one of these keywords, skipped otherwise.
    Optional(&'static [&'static str]),
    /// Any token, but one must be present.
    Any,
}

/// Identifier extracted after the pattern has matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    None,
    /// The token right after the pattern.
    Identifier,
    /// `FROM` or `IN`, then the identifier token.
    FromIdentifier,
    /// Like `FromIdentifier`, but the whole clause may be absent.
    OptionalFromIdentifier,
    /// The token right after the pattern, located as a table token.
    TableReference,
}

impl Capture {
    fn width(self) -> usize {
        match self {
            Capture::None => 0,
            Capture::Identifier | Capture::TableReference => 1,
            Capture::FromIdentifier | Capture::OptionalFromIdentifier => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleId {
    Query,
    Insert,
    Replace,
    Update,
    Delete,
    TransactionControl,
    SessionSet,
    UseSchema,
    Describe,
    ShowDatabases,
    ShowTableStatus,
    ShowTables,
    ShowColumns,
    ShowIndex,
    ShowCreateTable,
    ShowOther,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub id: RuleId,
    pub steps: &'static [Step],
    pub capture: Capture,
}

impl Rule {
    pub const fn new(id: RuleId, steps: &'static [Step]) -> Self {
        Rule {
            id,
            steps,
            capture: Capture::None,
        }
    }

    pub const fn capturing(self, capture: Capture) -> Self {
        Rule { capture, ..self }
    }

    /// Number of keywords consumed when every step matches.
    pub fn match_steps(&self, keywords: &[Keyword<'_>]) -> Option<usize> {
        let mut consumed = 0;
        for step in self.steps {
            let current = keywords.get(consumed);
            match step {
                Step::Keyword(expected) => {
                    if !current.is_some_and(|k| k.is_any(expected)) {
                        return None;
                    }
                    consumed += 1;
                }
                Step::Optional(expected) => {
                    if current.is_some_and(|k| k.is_any(expected)) {
                        consumed += 1;
                    }
                }
                Step::Any => {
                    current?;
                    consumed += 1;
                }
            }
        }
        Some(consumed)
    }

    /// Tokens the rule may need to look at, capture included.
    pub fn depth(&self) -> usize {
        self.steps.len() + self.capture.width()
    }
}

/// A rule whose steps matched, and how many leading keywords it consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch {
    pub rule: Rule,
    pub consumed: usize,
}

/// Ordered rule list; the first rule whose steps match wins.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Concatenate layers, highest priority first.
    pub fn compose(layers: &[&[Rule]]) -> Self {
        RuleTable {
            rules: layers.iter().flat_map(|layer| layer.iter().copied()).collect(),
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// How many leading keywords the tokenizer must provide for this table.
    pub fn lookahead(&self) -> usize {
        self.rules.iter().map(Rule::depth).max().unwrap_or(0)
    }

    /// Whether `keyword` can start a statement: it opens some rule of this table,
    /// or it starts a statement no rule classifies.
    pub fn opens_statement(&self, keyword: &Keyword<'_>) -> bool {
        keyword.is_any(UNCLASSIFIED_STATEMENTS)
            || self.rules.iter().any(|rule| match rule.steps.first() {
                Some(Step::Keyword(expected)) => keyword.is_any(expected),
                _ => false,
            })
    }

    pub fn find(&self, keywords: &[Keyword<'_>]) -> Option<RuleMatch> {
        self.rules.iter().find_map(|rule| {
            rule.match_steps(keywords)
                .map(|consumed| RuleMatch {
                    rule: *rule,
                    consumed,
                })
        })
    }
}
