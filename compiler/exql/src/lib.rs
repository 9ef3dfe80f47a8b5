//! EXQL: a small expression language for querying request-shaped data.
//!
//! ```text
//! let env = exql::Options::new()
//!     .with_builtins()
//!     .with_variable("user", user)
//!     .build();
//! let ast = exql::parse("user.age > 18 and string.len(user.name) > 0")?;
//! let allowed = exql::evaluate(&ast, &env)?.to_bool();
//! ```
//!
//! The pipeline is `exql_lexer` → `exql_parse` → `exql_eval`, with values
//! and runtime errors in `exql_value` and the built-in namespaces in
//! `exql_lib`. This crate re-exports what a host needs and adds the
//! composed [`eval`] entry point.

mod options;

use std::sync::Once;

use thiserror::Error;

pub use exql_diagnostic::{Snippet, SyntaxError, SyntaxErrorKind};
pub use exql_eval::{evaluate, Environment, EnvironmentBuilder};
pub use exql_ir::{Ast, BinaryOp, Span, UnaryOp};
pub use exql_lib::NAMESPACES;
pub use exql_parse::parse;
pub use exql_value::{Context, EvalError, EvalErrorKind, EvalResult, Function, Value};
pub use options::Options;

/// Failure of [`eval`]: either the source did not parse or evaluation failed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Parse `source` and evaluate it under `context`.
///
/// Hosts evaluating one expression many times should [`parse`] once and
/// call [`evaluate`] per context instead.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn eval(source: &str, context: &dyn Context) -> Result<Value, Error> {
    let ast = parse(source)?;
    Ok(evaluate(&ast, context)?)
}

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
