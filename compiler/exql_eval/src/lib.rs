//! Evaluator for EXQL expressions.
//!
//! Walks a parsed [`Ast`] under a [`Context`] and produces a [`Value`].
//! Evaluation never mutates the tree or the context, so one `Ast` can be
//! evaluated any number of times, including from several threads against
//! distinct contexts.
//!
//! # Module Structure
//!
//! - `interpreter`: the tree walk, field/index access and call dispatch
//! - `operators` / `unary_operators`: operator semantics on values
//! - `environment`: the default string-keyed [`Context`] and its builder

mod environment;
mod interpreter;
mod operators;
mod unary_operators;

use exql_ir::Ast;

pub use environment::{Environment, EnvironmentBuilder};
pub use exql_value::{Context, EvalError, EvalErrorKind, EvalResult, Function, Value};
pub use interpreter::Evaluator;
pub use operators::evaluate_binary;
pub use unary_operators::evaluate_unary;

/// Evaluate `ast` under `context`.
#[tracing::instrument(level = "debug", skip_all)]
pub fn evaluate(ast: &Ast, context: &dyn Context) -> EvalResult {
    Evaluator::new(ast.arena(), context).eval(ast.root())
}
