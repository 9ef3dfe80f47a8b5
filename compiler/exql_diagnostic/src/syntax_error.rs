//! Lex and parse errors.

use std::fmt;

use exql_ir::Span;
use thiserror::Error;

use crate::Snippet;

/// What kind of syntax error occurred.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum SyntaxErrorKind {
    // === Lexer ===
    /// Missing closing quote for a string literal.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// A character that starts no token.
    #[error("unrecognized character")]
    UnrecognizedCharacter,
    /// The source is too large to address with 32-bit spans.
    #[error("expression source exceeds u32::MAX bytes")]
    SourceTooLarge,

    // === Parser ===
    /// A token that the grammar does not allow here.
    #[error("unexpected token, expected {expected}")]
    UnexpectedToken { expected: &'static str },
    /// Input ended while the grammar still needed something.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },
}

/// A position-annotated syntax error.
///
/// Produced by the lexer and reused unchanged by the parser.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub struct SyntaxError {
    /// WHAT went wrong.
    pub kind: SyntaxErrorKind,
    /// The offending token text (empty at end of input).
    pub token: String,
    /// Byte offset where the error was detected.
    pub offset: usize,
    /// Context window around `offset`.
    pub snippet: Snippet,
}

impl SyntaxError {
    /// Build an error for the token covering `span` in `source`.
    pub fn new(kind: SyntaxErrorKind, source: &str, span: Span) -> Self {
        let token = source.get(span.to_range()).unwrap_or_default().to_string();
        let offset = span.start as usize;
        SyntaxError {
            kind,
            token,
            offset,
            snippet: Snippet::around(source, offset),
        }
    }

    /// Build an error at a byte offset with explicit token text.
    pub fn at_offset(kind: SyntaxErrorKind, source: &str, offset: usize, token: &str) -> Self {
        SyntaxError {
            kind,
            token: token.to_string(),
            offset,
            snippet: Snippet::around(source, offset),
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.token.is_empty() {
            writeln!(f, "{} at offset {}", self.kind, self.offset)?;
        } else {
            writeln!(f, "{} at offset {}: `{}`", self.kind, self.offset, self.token)?;
        }
        write!(f, "{}", self.snippet)
    }
}
