use nom::{
    branch::alt,
    bytes::complete::{tag, take_till, take_till1, take_until},
    character::complete::{anychar, char, one_of},
    combinator::{opt, recognize, rest},
    error::Error,
    multi::many0_count,
    IResult, Parser,
};

/// Characters that always form a token of their own, even without surrounding whitespace.
pub(crate) const PUNCTUATION: &str = "(),;=*<>!+-/%|&^~";

/// Dialect-specific lexical rules for comments and quoted runs.
///
/// The default is standard SQL: only `--` and `/* */` comments, and a backslash is
/// an ordinary character inside quotes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexicalSyntax {
    /// `#` starts a line comment (MySQL).
    pub hash_line_comments: bool,
    /// `\` escapes the next character inside `'...'` and `"..."` (MySQL).
    pub backslash_escapes: bool,
}

pub(crate) fn is_blank(c: char) -> bool {
    c.is_whitespace() || c.is_control()
}

pub(crate) fn is_quote(c: char) -> bool {
    matches!(c, '\'' | '"' | '`')
}

pub(crate) fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(c)
}

/// Quoted run: string literal or quoted identifier, returned with its quotes.
/// Doubled quotes stay inside the run, as do backslash escapes when the syntax
/// allows them (never inside backticks). An unterminated run extends to the end
/// of input.
pub(crate) fn quoted(input: &str, syntax: LexicalSyntax) -> IResult<&str, &str> {
    let (_, quote) = one_of::<_, _, Error<&str>>("'\"`").parse(input)?;
    let escapes = syntax.backslash_escapes && quote != '`';

    let plain = take_till1(move |c: char| c == quote || (escapes && c == '\\'));
    let doubled_quote = recognize((char(quote), char(quote)));
    let escaped = recognize((char('\\'), opt(anychar)));

    recognize((
        char(quote),
        many0_count(alt((plain, doubled_quote, escaped))),
        opt(char(quote)),
    ))
    .parse(input)
}

fn is_line_end(c: char) -> bool {
    c == '\n' || c == '\r'
}

// `/* ... */`, including `/*+ hint */`. Unterminated comments run to end of input.
fn block_comment(input: &str) -> IResult<&str, &str> {
    alt((
        recognize((tag("/*"), take_until("*/"), tag("*/"))),
        recognize((tag("/*"), rest)),
    ))
    .parse(input)
}

fn dash_comment(input: &str) -> IResult<&str, &str> {
    recognize((tag("--"), take_till(is_line_end))).parse(input)
}

fn hash_comment(input: &str) -> IResult<&str, &str> {
    recognize((char('#'), take_till(is_line_end))).parse(input)
}

/// A single comment at the start of `input`, line terminator excluded.
pub(crate) fn comment(input: &str, syntax: LexicalSyntax) -> IResult<&str, &str> {
    if syntax.hash_line_comments {
        alt((block_comment, dash_comment, hash_comment)).parse(input)
    } else {
        alt((block_comment, dash_comment)).parse(input)
    }
}
