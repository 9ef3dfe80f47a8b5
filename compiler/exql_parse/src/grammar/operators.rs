//! Operator Matching Helpers
//!
//! Map the current token to the operator of one precedence level.

use exql_ir::{BinaryOp, UnaryOp};
use exql_lexer::TokenKind;

use crate::Parser;

impl Parser<'_> {
    pub(crate) fn match_or_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::Or => Some(BinaryOp::Or),
            _ => None,
        }
    }

    pub(crate) fn match_and_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::And => Some(BinaryOp::And),
            _ => None,
        }
    }

    /// Returns the operator and how many tokens spell it.
    pub(crate) fn match_membership_op(&self) -> Option<(BinaryOp, usize)> {
        match (self.cursor.current_kind(), self.cursor.peek_next_kind()) {
            (TokenKind::In, _) => Some((BinaryOp::In, 1)),
            (TokenKind::Not, TokenKind::In) => Some((BinaryOp::NotIn, 2)),
            _ => None,
        }
    }

    pub(crate) fn match_equality_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::Eq | TokenKind::EqEq => Some(BinaryOp::Eq),
            TokenKind::NotEq => Some(BinaryOp::NotEq),
            _ => None,
        }
    }

    pub(crate) fn match_comparison_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::Lt => Some(BinaryOp::Lt),
            TokenKind::LtEq => Some(BinaryOp::LtEq),
            TokenKind::Gt => Some(BinaryOp::Gt),
            TokenKind::GtEq => Some(BinaryOp::GtEq),
            _ => None,
        }
    }

    pub(crate) fn match_additive_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            _ => None,
        }
    }

    pub(crate) fn match_multiplicative_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            _ => None,
        }
    }

    pub(crate) fn match_unary_op(&self) -> Option<UnaryOp> {
        match (self.cursor.current_kind(), self.cursor.peek_next_kind()) {
            (TokenKind::Not, TokenKind::In) => None,
            (TokenKind::Not, _) => Some(UnaryOp::Not),
            (TokenKind::Minus, _) => Some(UnaryOp::Neg),
            _ => None,
        }
    }
}
