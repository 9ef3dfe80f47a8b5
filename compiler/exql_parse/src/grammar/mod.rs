//! Expression grammar.
//!
//! Precedence, lowest to highest:
//!
//! | Level | Operators |
//! |---|---|
//! | or | `or` |
//! | and | `and` |
//! | membership | `in`, `not in` |
//! | equality | `=`, `==`, `!=` |
//! | comparison | `<`, `<=`, `>`, `>=` |
//! | additive | `+`, `-` |
//! | multiplicative | `*`, `/` |
//! | unary | `not`, `-` |
//! | postfix | `.field`, `.name(args)`, `[index]` |

mod operators;
mod postfix;
mod primary;

use exql_diagnostic::SyntaxError;
use exql_ir::{Expr, ExprId, ExprKind};
use exql_stack::ensure_sufficient_stack;

use crate::Parser;

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// Every nested expression (parentheses, arguments, list elements,
    /// indices) re-enters here, so deep nesting grows the stack on demand.
    pub(crate) fn parse_expr(&mut self) -> Result<ExprId, SyntaxError> {
        ensure_sufficient_stack(|| self.parse_or())
    }

    /// Parse `or` (lowest precedence).
    fn parse_or(&mut self) -> Result<ExprId, SyntaxError> {
        let mut left = self.parse_and()?;

        while let Some(op) = self.match_or_op() {
            self.cursor.advance();
            let right = self.parse_and()?;
            left = self.alloc_binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse `and`.
    fn parse_and(&mut self) -> Result<ExprId, SyntaxError> {
        let mut left = self.parse_membership()?;

        while let Some(op) = self.match_and_op() {
            self.cursor.advance();
            let right = self.parse_membership()?;
            left = self.alloc_binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse `in` and `not in`.
    fn parse_membership(&mut self) -> Result<ExprId, SyntaxError> {
        let mut left = self.parse_equality()?;

        while let Some((op, width)) = self.match_membership_op() {
            for _ in 0..width {
                self.cursor.advance();
            }
            let right = self.parse_equality()?;
            left = self.alloc_binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse `=`, `==` and `!=`.
    fn parse_equality(&mut self) -> Result<ExprId, SyntaxError> {
        let mut left = self.parse_comparison()?;

        while let Some(op) = self.match_equality_op() {
            self.cursor.advance();
            let right = self.parse_comparison()?;
            left = self.alloc_binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse `<`, `<=`, `>` and `>=`.
    fn parse_comparison(&mut self) -> Result<ExprId, SyntaxError> {
        let mut left = self.parse_additive()?;

        while let Some(op) = self.match_comparison_op() {
            self.cursor.advance();
            let right = self.parse_additive()?;
            left = self.alloc_binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse `+` and `-`.
    fn parse_additive(&mut self) -> Result<ExprId, SyntaxError> {
        let mut left = self.parse_multiplicative()?;

        while let Some(op) = self.match_additive_op() {
            self.cursor.advance();
            let right = self.parse_multiplicative()?;
            left = self.alloc_binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse `*` and `/`.
    fn parse_multiplicative(&mut self) -> Result<ExprId, SyntaxError> {
        let mut left = self.parse_unary()?;

        while let Some(op) = self.match_multiplicative_op() {
            self.cursor.advance();
            let right = self.parse_unary()?;
            left = self.alloc_binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse prefix `not` and `-` (right-associative).
    ///
    /// A `not` directly followed by `in` is never unary here: that pair is
    /// the `not in` operator and is consumed at the membership level.
    fn parse_unary(&mut self) -> Result<ExprId, SyntaxError> {
        if let Some(op) = self.match_unary_op() {
            let start = self.cursor.current_span();
            self.cursor.advance();
            let operand = ensure_sufficient_stack(|| self.parse_unary())?;

            let span = start.merge(self.arena.get_expr(operand).span);
            return Ok(self
                .arena
                .alloc_expr(Expr::new(ExprKind::Unary { op, operand }, span)));
        }

        self.parse_postfix()
    }
}
