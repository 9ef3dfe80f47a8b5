//! Token Conversion
//!
//! Converts raw logos tokens to the public `TokenKind`.

use crate::raw_token::RawToken;
use crate::token::TokenKind;

/// Convert a raw token to a `TokenKind`.
///
/// `slice` is the source text the raw token covered; only identifiers
/// need it.
pub(crate) fn convert_token(raw: RawToken, slice: &str) -> TokenKind {
    match raw {
        // Literals
        RawToken::Str(body) => TokenKind::Str(body),
        RawToken::Number(n) => TokenKind::Number(n),
        RawToken::Ident => TokenKind::Ident(slice.to_string()),

        // Keywords
        RawToken::And => TokenKind::And,
        RawToken::Or => TokenKind::Or,
        RawToken::Not => TokenKind::Not,
        RawToken::In => TokenKind::In,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,

        // Operators
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::Eq => TokenKind::Eq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,

        // Punctuation
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Question => TokenKind::Question,
        RawToken::Colon => TokenKind::Colon,
    }
}
