//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output before
//! conversion to the public `TokenKind`.

use logos::Logos;

/// Lexing failures reported through logos.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum RawError {
    /// No token starts with this character.
    #[default]
    Unrecognized,
    /// A quote with no closing partner before end of input.
    UnterminatedString,
}

/// Raw token from logos.
///
/// Keywords are plain `#[token]`s; logos prefers the longest match, so
/// `android` lexes as one identifier rather than `and` + `roid`.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(error = RawError)]
#[logos(skip r"[ \t\n\r]+")]
pub(crate) enum RawToken {
    // Keywords
    #[token("and")]
    And,
    #[token("or")]
    Or,
    #[token("not")]
    Not,
    #[token("in")]
    In,
    #[token("true")]
    True,
    #[token("false")]
    False,

    // Operators
    #[token("==")]
    EqEq,
    #[token("=")]
    Eq,
    #[token("!=")]
    NotEq,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,

    // Punctuation
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(".")]
    Dot,
    #[token(",")]
    Comma,
    #[token("?")]
    Question,
    #[token(":")]
    Colon,

    // Literals
    #[token("'", |lex| quoted_body(lex, '\''))]
    #[token("\"", |lex| quoted_body(lex, '"'))]
    Str(String),

    #[regex(r"[0-9]+", number)]
    Number(f64),

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

/// Consume a quoted string body and its closing quote.
///
/// The body is taken verbatim; there is no escape processing.
fn quoted_body(lex: &mut logos::Lexer<'_, RawToken>, quote: char) -> Result<String, RawError> {
    let rest = lex.remainder();
    if let Some(close) = rest.find(quote) {
        let body = rest[..close].to_string();
        lex.bump(close + quote.len_utf8());
        Ok(body)
    } else {
        lex.bump(rest.len());
        Err(RawError::UnterminatedString)
    }
}

/// Extend an integer part with an optional `.digits` fraction.
///
/// A `.` not followed by a digit is left for the next token, so `1.x`
/// lexes as `1`, `.`, `x`.
fn number(lex: &mut logos::Lexer<'_, RawToken>) -> Option<f64> {
    let rest = lex.remainder().as_bytes();
    if rest.len() >= 2 && rest[0] == b'.' && rest[1].is_ascii_digit() {
        let digits = rest[1..].iter().take_while(|b| b.is_ascii_digit()).count();
        lex.bump(1 + digits);
    }
    lex.slice().parse().ok()
}
