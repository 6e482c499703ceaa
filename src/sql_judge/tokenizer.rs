use nom::{
    branch::alt,
    bytes::complete::{take_till1, take_while},
    character::complete::one_of,
    combinator::recognize,
    multi::many1,
    sequence::preceded,
    IResult, Parser,
};

use super::common::{is_blank, is_punctuation, is_quote, quoted, LexicalSyntax, PUNCTUATION};

/// Leading token of a cleaned statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword<'a> {
    /// Token exactly as written, used for identifier capture.
    pub text: &'a str,
    /// ASCII-uppercased `text`, used for keyword comparison.
    pub folded: String,
    /// Byte offset of `text` within the cleaned statement.
    pub offset: usize,
}

impl Keyword<'_> {
    pub fn is(&self, keyword: &str) -> bool {
        self.folded == keyword
    }

    pub fn is_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|keyword| self.is(keyword))
    }

    /// Whether the token could name a schema or table (it is not a lone symbol).
    pub fn is_identifier(&self) -> bool {
        !self.text.starts_with(is_punctuation)
    }
}

/// Split up to `n` leading tokens off a cleaned statement, with standard SQL
/// quoting.
///
/// Tokens are separated by whitespace runs; each punctuation character is a token
/// of its own, and quoted runs never split. Returns fewer than `n` tokens when
/// the statement is shorter, and none for an empty statement.
pub fn leading_keywords(clean: &str, n: usize) -> Vec<Keyword<'_>> {
    leading_keywords_with(clean, n, LexicalSyntax::default())
}

/// [`leading_keywords`] with dialect-specific quoting.
pub fn leading_keywords_with(clean: &str, n: usize, syntax: LexicalSyntax) -> Vec<Keyword<'_>> {
    tokens(clean, syntax).take(n).collect()
}

/// Lazily split every token off a cleaned statement.
pub fn tokens(clean: &str, syntax: LexicalSyntax) -> impl Iterator<Item = Keyword<'_>> + '_ {
    let mut input = clean;
    std::iter::from_fn(move || {
        let (rest, text) = next_token(input, syntax).ok()?;
        input = rest;
        Some(Keyword {
            text,
            folded: text.to_ascii_uppercase(),
            offset: clean.len() - rest.len() - text.len(),
        })
    })
}

fn next_token(input: &str, syntax: LexicalSyntax) -> IResult<&str, &str> {
    preceded(take_while(is_blank), alt((punctuation, |i| word(i, syntax)))).parse(input)
}

fn punctuation(input: &str) -> IResult<&str, &str> {
    recognize(one_of(PUNCTUATION)).parse(input)
}

// e.g. `t_order`, `logic_db.t_order`, `` `logic db`.`t_order` ``, `@@autocommit`
fn word(input: &str, syntax: LexicalSyntax) -> IResult<&str, &str> {
    recognize(many1(alt((
        |i| quoted(i, syntax),
        take_till1(|c: char| is_blank(c) || is_punctuation(c) || is_quote(c)),
    ))))
    .parse(input)
}
