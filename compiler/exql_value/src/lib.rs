//! Runtime values for EXQL.
//!
//! - [`Value`]: the dynamically typed value lattice and its coercions
//! - [`Context`] and [`Function`]: how the evaluator resolves names
//! - [`EvalError`]: structured runtime errors

mod context;
mod errors;
mod value;

pub use context::{Context, Function};
pub use errors::{
    arity_mismatch, cannot_index, coercion_failed, index_out_of_range, invalid_index,
    operator_not_supported, unexpected_identifier, unsupported_index_type, wrong_arg_type, EvalError, EvalErrorKind,
    EvalResult,
};
pub use value::{Heap, Value};
