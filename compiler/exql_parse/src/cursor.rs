//! Token cursor for navigating the token stream.

use std::mem::discriminant;

use exql_diagnostic::{SyntaxError, SyntaxErrorKind};
use exql_ir::Span;
use exql_lexer::{Token, TokenKind};
use tracing::trace;

/// Cursor over a lexed token stream.
///
/// The stream always ends with `Eof`, and the cursor never moves past
/// it, so `current()` is always valid.
pub(crate) struct Cursor<'a> {
    source: &'a str,
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str, tokens: &'a [Token]) -> Self {
        debug_assert!(
            tokens.last().is_some_and(Token::is_eof),
            "token stream must end with Eof"
        );
        Cursor {
            source,
            tokens,
            pos: 0,
        }
    }

    #[inline]
    pub(crate) fn current(&self) -> &'a Token {
        &self.tokens[self.pos]
    }

    #[inline]
    pub(crate) fn current_kind(&self) -> &'a TokenKind {
        &self.current().kind
    }

    #[inline]
    pub(crate) fn current_span(&self) -> Span {
        self.current().span
    }

    /// Kind of the token after the current one (`Eof` at the end).
    pub(crate) fn peek_next_kind(&self) -> &'a TokenKind {
        let next = (self.pos + 1).min(self.tokens.len() - 1);
        &self.tokens[next].kind
    }

    pub(crate) fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::DUMMY
        }
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.current().is_eof()
    }

    /// Whether the current token has the same kind as `kind`, ignoring payloads.
    #[inline]
    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        discriminant(self.current_kind()) == discriminant(kind)
    }

    /// Consume the current token. At `Eof` the cursor stays put.
    pub(crate) fn advance(&mut self) -> &'a Token {
        let token = self.current();
        trace!(
            pos = self.pos,
            kind = %token.kind,
            span_start = token.span.start,
            span_end = token.span.end,
            "advance"
        );
        if !token.is_eof() {
            self.pos += 1;
        }
        token
    }

    /// Consume a token of `kind`, or fail naming `expected`.
    pub(crate) fn expect(
        &mut self,
        kind: &TokenKind,
        expected: &'static str,
    ) -> Result<Span, SyntaxError> {
        if self.check(kind) {
            Ok(self.advance().span)
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Consume an identifier and return its name.
    pub(crate) fn expect_ident(&mut self) -> Result<String, SyntaxError> {
        if let TokenKind::Ident(name) = self.current_kind() {
            self.advance();
            Ok(name.clone())
        } else {
            Err(self.unexpected("identifier"))
        }
    }

    /// Error for the current token, which is not what the grammar needs.
    #[cold]
    pub(crate) fn unexpected(&self, expected: &'static str) -> SyntaxError {
        let kind = if self.is_at_end() {
            SyntaxErrorKind::UnexpectedEof { expected }
        } else {
            SyntaxErrorKind::UnexpectedToken { expected }
        };
        SyntaxError::new(kind, self.source, self.current_span())
    }
}

#[cfg(test)]
mod tests;
