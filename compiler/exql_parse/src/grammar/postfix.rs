//! Postfix Expression Parsing
//!
//! Field access, qualified calls and index access.

use exql_diagnostic::SyntaxError;
use exql_ir::{Expr, ExprId, ExprKind};
use exql_lexer::TokenKind;

use crate::Parser;

impl Parser<'_> {
    /// Parse a primary expression followed by any postfix operators.
    pub(crate) fn parse_postfix(&mut self) -> Result<ExprId, SyntaxError> {
        let mut expr = self.parse_primary()?;

        loop {
            if self.cursor.check(&TokenKind::Dot) {
                self.cursor.advance();
                let name = self.cursor.expect_ident()?;

                if self.cursor.check(&TokenKind::LParen) {
                    // Qualified call: the receiver resolves the function.
                    self.cursor.advance();
                    let args = self.parse_args()?;
                    let span = self.arena.get_expr(expr).span.merge(self.cursor.previous_span());
                    expr = self.arena.alloc_expr(Expr::new(
                        ExprKind::Call {
                            namespace: Some(expr),
                            name,
                            args,
                        },
                        span,
                    ));
                } else {
                    let span = self.arena.get_expr(expr).span.merge(self.cursor.previous_span());
                    expr = self.arena.alloc_expr(Expr::new(
                        ExprKind::Field {
                            receiver: expr,
                            field: name,
                        },
                        span,
                    ));
                }
            } else if self.cursor.check(&TokenKind::LBracket) {
                self.cursor.advance();
                let index = self.parse_expr()?;
                self.cursor.expect(&TokenKind::RBracket, "`]`")?;

                let span = self.arena.get_expr(expr).span.merge(self.cursor.previous_span());
                expr = self.arena.alloc_expr(Expr::new(
                    ExprKind::Index {
                        receiver: expr,
                        index,
                    },
                    span,
                ));
            } else {
                return Ok(expr);
            }
        }
    }
}
