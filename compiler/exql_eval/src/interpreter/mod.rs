//! The tree-walking evaluator.
//!
//! Children are evaluated in source order and the first error wins.
//! There is no local recovery: every error reaches the caller of
//! [`Evaluator::eval`].

mod access;
mod call;

use exql_ir::{ExprArena, ExprId, ExprKind};
use exql_stack::ensure_sufficient_stack;
use exql_value::{Context, EvalResult, Value};

use crate::{evaluate_binary, evaluate_unary};

/// Evaluates the nodes of one arena under one context.
///
/// Holds only shared borrows; creating one is free.
pub struct Evaluator<'a> {
    arena: &'a ExprArena,
    context: &'a dyn Context,
}

impl<'a> Evaluator<'a> {
    pub fn new(arena: &'a ExprArena, context: &'a dyn Context) -> Self {
        Evaluator { arena, context }
    }

    /// Evaluate the expression `id`.
    ///
    /// Runs under `ensure_sufficient_stack`, so deeply nested trees do not
    /// overflow the native stack.
    pub fn eval(&self, id: ExprId) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(id))
    }

    fn eval_inner(&self, id: ExprId) -> EvalResult {
        match &self.arena.get_expr(id).kind {
            ExprKind::Number(bits) => Ok(Value::Number(f64::from_bits(*bits))),
            ExprKind::Str(s) => Ok(Value::string(s.as_str())),
            ExprKind::Bool(b) => Ok(Value::Bool(*b)),
            ExprKind::Ident(name) => Ok(self.context.lookup_variable(name)),
            ExprKind::Binary { op, left, right } => {
                let left = self.eval(*left)?;
                let right = self.eval(*right)?;
                evaluate_binary(*op, &left, &right)
            }
            ExprKind::Unary { op, operand } => {
                let operand = self.eval(*operand)?;
                evaluate_unary(*op, &operand)
            }
            ExprKind::Field { receiver, field } => {
                let receiver = self.eval(*receiver)?;
                Ok(access::field(&receiver, field))
            }
            ExprKind::Index { receiver, index } => {
                let receiver = self.eval(*receiver)?;
                let index = self.eval(*index)?;
                access::index(&receiver, &index)
            }
            ExprKind::Call {
                namespace,
                name,
                args,
            } => self.eval_call(*namespace, name, *args),
            ExprKind::List(items) => self
                .arena
                .get_expr_list(*items)
                .iter()
                .map(|item| self.eval(*item))
                .collect(),
            ExprKind::Each => Ok(Value::Each),
        }
    }
}
