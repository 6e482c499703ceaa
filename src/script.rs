//! Splitting of multi-statement scripts.
//!
//! The delimiter only splits at top level: occurrences inside quoted runs and
//! comments are skipped with the same lexemes the judge's preprocessor uses.

use crate::sql_judge::common::{comment, quoted};
use crate::sql_judge::preprocessor::clean_with;
use crate::sql_judge::LexicalSyntax;

/// Split `script` on `delimiter`. Pieces are trimmed but keep their comments;
/// pieces with nothing but comments and whitespace are dropped.
pub fn split_statements<'a>(
    script: &'a str,
    delimiter: &str,
    syntax: LexicalSyntax,
) -> Vec<&'a str> {
    let mut statements = Vec::new();
    let mut start = 0;
    let mut input = script;

    while !input.is_empty() {
        if !delimiter.is_empty() && input.starts_with(delimiter) {
            let end = script.len() - input.len();
            push_statement(&mut statements, &script[start..end], syntax);
            input = &input[delimiter.len()..];
            start = script.len() - input.len();
        } else if let Ok((rest, _)) = comment(input, syntax) {
            input = rest;
        } else if let Ok((rest, _)) = quoted(input, syntax) {
            input = rest;
        } else {
            let width = input.chars().next().map_or(input.len(), char::len_utf8);
            input = &input[width..];
        }
    }
    push_statement(&mut statements, &script[start..], syntax);

    statements
}

fn push_statement<'a>(statements: &mut Vec<&'a str>, piece: &'a str, syntax: LexicalSyntax) {
    let piece = piece.trim();
    if !clean_with(piece, syntax).is_empty() {
        statements.push(piece);
    }
}
