//! On-demand lexer over an expression source.

use exql_diagnostic::{SyntaxError, SyntaxErrorKind};
use exql_ir::Span;
use logos::Logos;

use crate::convert::convert_token;
use crate::raw_token::{RawError, RawToken};
use crate::token::{Token, TokenKind};

/// Single-pass scanner producing tokens on demand.
///
/// After the source is exhausted, [`Lexer::next_token`] keeps returning
/// [`TokenKind::Eof`]. As an iterator it yields the `Eof` token once and
/// then stops.
pub struct Lexer<'src> {
    source: &'src str,
    raw: logos::Lexer<'src, RawToken>,
    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            source,
            raw: RawToken::lexer(source),
            finished: false,
        }
    }

    /// Scan the next token.
    pub fn next_token(&mut self) -> Result<Token, SyntaxError> {
        let Some(result) = self.raw.next() else {
            let end = self.span_of(self.source.len()..self.source.len())?;
            return Ok(Token::new(TokenKind::Eof, end));
        };
        let range = self.raw.span();
        let slice = self.raw.slice();
        match result {
            Ok(raw) => {
                let span = self.span_of(range)?;
                Ok(Token::new(convert_token(raw, slice), span))
            }
            Err(RawError::UnterminatedString) => Err(SyntaxError::at_offset(
                SyntaxErrorKind::UnterminatedString,
                self.source,
                range.start,
                slice,
            )),
            Err(RawError::Unrecognized) => Err(SyntaxError::at_offset(
                SyntaxErrorKind::UnrecognizedCharacter,
                self.source,
                range.start,
                slice,
            )),
        }
    }

    fn span_of(&self, range: std::ops::Range<usize>) -> Result<Span, SyntaxError> {
        let start = range.start;
        Span::try_from_range(range).map_err(|_| {
            SyntaxError::at_offset(SyntaxErrorKind::SourceTooLarge, self.source, start, "")
        })
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, SyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let item = self.next_token();
        // Stop after Eof or the first error.
        self.finished = !matches!(&item, Ok(token) if !token.is_eof());
        Some(item)
    }
}

/// Lex a whole source into a token vector ending with `Eof`.
pub fn lex(source: &str) -> Result<Vec<Token>, SyntaxError> {
    Lexer::new(source).collect()
}
