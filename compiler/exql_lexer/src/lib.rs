//! Lexer for EXQL expressions.
//!
//! Single-pass scanner built on logos. [`Lexer`] produces tokens on
//! demand; [`lex`] collects the whole stream, always ending in
//! [`TokenKind::Eof`].
//!
//! # Architecture
//!
//! - `raw_token`: the logos-derived `RawToken` enum and its callbacks
//! - `convert`: `RawToken` + source slice to public `TokenKind`
//! - `token`: public `Token`/`TokenKind` with canonical `Display`
//! - `lexer`: the on-demand `Lexer` and error mapping

mod convert;
mod lexer;
mod raw_token;
mod token;

pub use lexer::{lex, Lexer};
pub use token::{Token, TokenKind};
