//! Public token types.

use std::fmt;

use exql_ir::Span;

/// The kind of a lexed token.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    // Keywords
    And,
    Or,
    Not,
    In,
    True,
    False,

    // Operators
    /// `==`
    EqEq,
    /// `=`, same meaning as `==`
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Plus,
    Minus,
    Star,
    Slash,

    // Punctuation
    LParen,
    RParen,
    LBracket,
    RBracket,
    Dot,
    Comma,
    Question,
    Colon,

    // Literals
    /// Raw string body, without quotes.
    Str(String),
    Number(f64),
    Ident(String),

    Eof,
}

impl fmt::Display for TokenKind {
    /// Canonical spelling: lexing it again yields the same kind.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenKind::Str(body) => {
                // Bodies cannot contain their own quote, so pick the other one.
                return if body.contains('\'') {
                    write!(f, "\"{body}\"")
                } else {
                    write!(f, "'{body}'")
                };
            }
            TokenKind::Number(n) => return write!(f, "{n}"),
            TokenKind::Ident(name) => return f.write_str(name),
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::Not => "not",
            TokenKind::In => "in",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::EqEq => "==",
            TokenKind::Eq => "=",
            TokenKind::NotEq => "!=",
            TokenKind::Lt => "<",
            TokenKind::LtEq => "<=",
            TokenKind::Gt => ">",
            TokenKind::GtEq => ">=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Dot => ".",
            TokenKind::Comma => ",",
            TokenKind::Question => "?",
            TokenKind::Colon => ":",
            TokenKind::Eof => "",
        };
        f.write_str(text)
    }
}

/// A token with its source span.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

#[cfg(test)]
mod tests;
