//! Parser for EXQL expressions.
//!
//! Recursive descent with one function per precedence level, lowest
//! first. All binary operators are left-associative.
//!
//! # Module Structure
//!
//! - `cursor`: token access, lookahead and error construction
//! - `grammar`: the precedence chain, postfix operators and primaries

mod cursor;
mod grammar;

use exql_diagnostic::SyntaxError;
use exql_ir::{Ast, BinaryOp, Expr, ExprArena, ExprId, ExprKind};
use exql_lexer::Token;

use crate::cursor::Cursor;

/// Parser state: the token cursor and the arena being filled.
pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: ExprArena,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str, tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(source, tokens),
            arena: ExprArena::new(),
        }
    }

    /// Parse one expression spanning the whole token stream.
    fn parse_root(mut self) -> Result<Ast, SyntaxError> {
        let root = self.parse_expr()?;
        if !self.cursor.is_at_end() {
            return Err(self.cursor.unexpected("end of input"));
        }
        Ok(Ast::new(self.arena, root))
    }

    /// Allocate `left op right` spanning both operands.
    fn alloc_binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        let span = self
            .arena
            .get_expr(left)
            .span
            .merge(self.arena.get_expr(right).span);
        self.arena
            .alloc_expr(Expr::new(ExprKind::Binary { op, left, right }, span))
    }
}

/// Parse an expression source into an [`Ast`].
///
/// Lex errors and grammar errors share the same [`SyntaxError`] shape.
pub fn parse(source: &str) -> Result<Ast, SyntaxError> {
    let tokens = exql_lexer::lex(source)?;
    tracing::debug!(tokens = tokens.len(), "parsing expression");
    Parser::new(source, &tokens).parse_root()
}
