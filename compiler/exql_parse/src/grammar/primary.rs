//! Primary Expression Parsing
//!
//! Literals, identifiers, unqualified calls, parentheses and list literals.

use exql_diagnostic::SyntaxError;
use exql_ir::{Expr, ExprId, ExprKind, ExprRange};
use exql_lexer::TokenKind;
use tracing::trace;

use crate::Parser;

impl Parser<'_> {
    pub(crate) fn parse_primary(&mut self) -> Result<ExprId, SyntaxError> {
        let token = self.cursor.current();
        trace!(kind = %token.kind, span_start = token.span.start, "parse_primary");

        let kind = match &token.kind {
            TokenKind::Number(n) => ExprKind::number(*n),
            TokenKind::Str(s) => ExprKind::Str(s.clone()),
            TokenKind::True => ExprKind::Bool(true),
            TokenKind::False => ExprKind::Bool(false),
            TokenKind::Ident(name) => {
                if matches!(self.cursor.peek_next_kind(), TokenKind::LParen) {
                    return self.parse_call(name.clone());
                }
                ExprKind::Ident(name.clone())
            }
            TokenKind::LParen => return self.parse_parenthesized(),
            TokenKind::LBracket => return self.parse_list(),
            _ => return Err(self.cursor.unexpected("expression")),
        };

        self.cursor.advance();
        Ok(self.arena.alloc_expr(Expr::new(kind, token.span)))
    }

    /// `name(args)` with no namespace.
    fn parse_call(&mut self, name: String) -> Result<ExprId, SyntaxError> {
        let start = self.cursor.advance().span;
        self.cursor.advance(); // (
        let args = self.parse_args()?;
        let span = start.merge(self.cursor.previous_span());
        Ok(self.arena.alloc_expr(Expr::new(
            ExprKind::Call {
                namespace: None,
                name,
                args,
            },
            span,
        )))
    }

    /// `( expr )`. Parentheses only group; no node is allocated for them.
    fn parse_parenthesized(&mut self) -> Result<ExprId, SyntaxError> {
        self.cursor.advance(); // (
        let inner = self.parse_expr()?;
        self.cursor.expect(&TokenKind::RParen, "`)`")?;
        Ok(inner)
    }

    /// `[ exprs? ]`.
    fn parse_list(&mut self) -> Result<ExprId, SyntaxError> {
        let start = self.cursor.advance().span;
        let items = self.parse_comma_separated(&TokenKind::RBracket, "`,` or `]`")?;
        let span = start.merge(self.cursor.previous_span());
        Ok(self.arena.alloc_expr(Expr::new(ExprKind::List(items), span)))
    }

    /// Call arguments after the opening `(`, through the closing `)`.
    pub(crate) fn parse_args(&mut self) -> Result<ExprRange, SyntaxError> {
        self.parse_comma_separated(&TokenKind::RParen, "`,` or `)`")
    }

    /// `expr (',' expr)*` up to and including `close`; may be empty.
    fn parse_comma_separated(
        &mut self,
        close: &TokenKind,
        expected: &'static str,
    ) -> Result<ExprRange, SyntaxError> {
        let mut items = Vec::new();
        if !self.cursor.check(close) {
            loop {
                items.push(self.parse_expr()?);
                if self.cursor.check(&TokenKind::Comma) {
                    self.cursor.advance();
                } else {
                    break;
                }
            }
        }
        self.cursor.expect(close, expected)?;
        Ok(self.arena.alloc_expr_list(items))
    }
}
