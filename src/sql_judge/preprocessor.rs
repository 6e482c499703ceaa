//! Lexical preprocessing ahead of keyword matching.
//!
//! Comments of every kind are removed wherever they occur, each one replaced by a
//! single space so neighbouring tokens never fuse together. Quoted literals and
//! identifiers are copied through untouched, so a `--` or `/*` inside a string is
//! not mistaken for a comment. The result is trimmed of surrounding whitespace and
//! control characters. Case is never changed.

use nom::{bytes::complete::take_till1, IResult, Parser};

use super::common::{comment, is_blank, is_quote, quoted, LexicalSyntax};

/// Strip `--` and `/* */` comments plus surrounding blanks, with standard SQL
/// strings (backslash is not an escape).
///
/// Total: an input made only of comments and whitespace yields `""`.
pub fn clean(raw: &str) -> String {
    clean_with(raw, LexicalSyntax::default())
}

/// [`clean`] with dialect-specific comment and escape syntax.
pub fn clean_with(raw: &str, syntax: LexicalSyntax) -> String {
    let mut cleaned = String::with_capacity(raw.len());
    let mut input = raw;

    while !input.is_empty() {
        if let Ok((rest, _)) = comment(input, syntax) {
            cleaned.push(' ');
            input = rest;
        } else if let Ok((rest, literal)) = quoted(input, syntax) {
            cleaned.push_str(literal);
            input = rest;
        } else if let Ok((rest, text)) = plain_run(input, syntax) {
            cleaned.push_str(text);
            input = rest;
        } else {
            // lone `/`, `-` or `#` that does not open a comment
            let width = input.chars().next().map_or(input.len(), char::len_utf8);
            let (text, rest) = input.split_at(width);
            cleaned.push_str(text);
            input = rest;
        }
    }

    cleaned.trim_matches(is_blank).to_string()
}

// Text up to the next character that could open a comment or a quoted run.
fn plain_run(input: &str, syntax: LexicalSyntax) -> IResult<&str, &str> {
    take_till1(|c: char| {
        is_quote(c) || c == '/' || c == '-' || (syntax.hash_line_comments && c == '#')
    })
    .parse(input)
}
