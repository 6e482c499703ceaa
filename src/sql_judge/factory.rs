use super::rules::{Capture, RuleId, RuleMatch};
use super::statement::{InsertMetadata, MutationKind, StatementCategory, TableToken};
use super::tokenizer::Keyword;

/// Build the statement for a matched rule.
///
/// `clean` is the preprocessed statement the keywords were split from. Returns
/// `None` when the rule's capture is missing (`USE` with nothing after it,
/// `SHOW INDEX` without `FROM <table>`), which the engine reports like a rule miss.
pub fn build(
    matched: &RuleMatch,
    clean: &str,
    keywords: &[Keyword<'_>],
) -> Option<StatementCategory> {
    let pattern = &keywords[..matched.consumed.min(keywords.len())];
    let target = capture(matched, keywords)?;
    let name = || target.map(|keyword| keyword.text.to_string());

    let statement = match matched.rule.id {
        RuleId::Query => StatementCategory::Query,
        RuleId::Insert | RuleId::Replace => StatementCategory::Mutation {
            kind: MutationKind::Insert(InsertMetadata {
                replace: matched.rule.id == RuleId::Replace,
                ignore: pattern.iter().any(|keyword| keyword.is("IGNORE")),
            }),
        },
        RuleId::Update => StatementCategory::Mutation {
            kind: MutationKind::Update,
        },
        RuleId::Delete => StatementCategory::Mutation {
            kind: MutationKind::Delete,
        },
        RuleId::TransactionControl => StatementCategory::TransactionControl,
        RuleId::SessionSet => StatementCategory::SessionSet,
        RuleId::UseSchema => StatementCategory::UseSchema { schema: name()? },
        RuleId::Describe => StatementCategory::Describe { table: name()? },
        RuleId::ShowDatabases => StatementCategory::ShowDatabases,
        RuleId::ShowTableStatus => StatementCategory::ShowTableStatus { database: name() },
        RuleId::ShowTables => StatementCategory::ShowTables,
        RuleId::ShowColumns => StatementCategory::ShowColumns { table: name()? },
        RuleId::ShowIndex => StatementCategory::ShowIndex { table: name()? },
        RuleId::ShowCreateTable => {
            let keyword = target?;
            let reference = clean.get(keyword.offset..keyword.offset + keyword.text.len())?;
            StatementCategory::ShowCreateTable {
                reference_token: TableToken::new(keyword.offset, reference),
            }
        }
        RuleId::ShowOther => StatementCategory::ShowOther,
    };
    Some(statement)
}

// Outer None: a required capture is absent. Inner None: the rule captures nothing.
fn capture<'k, 'a>(
    matched: &RuleMatch,
    keywords: &'k [Keyword<'a>],
) -> Option<Option<&'k Keyword<'a>>> {
    let at = matched.consumed;
    let identifier = |idx: usize| keywords.get(idx).filter(|keyword| keyword.is_identifier());

    match matched.rule.capture {
        Capture::None => Some(None),
        Capture::Identifier | Capture::TableReference => identifier(at).map(Some),
        Capture::FromIdentifier => {
            let from = keywords.get(at)?;
            if !from.is_any(&["FROM", "IN"]) {
                return None;
            }
            identifier(at + 1).map(Some)
        }
        Capture::OptionalFromIdentifier => match keywords.get(at) {
            Some(from) if from.is_any(&["FROM", "IN"]) => identifier(at + 1).map(Some),
            _ => Some(None),
        },
    }
}
