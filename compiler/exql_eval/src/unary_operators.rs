//! Unary operator implementations for the evaluator.

use exql_ir::UnaryOp;
use exql_value::{operator_not_supported, EvalResult, Value};

/// Evaluate `op operand` on an already evaluated operand.
pub fn evaluate_unary(op: UnaryOp, operand: &Value) -> EvalResult {
    match op {
        UnaryOp::Not => Ok(Value::Bool(!operand.to_bool())),
        UnaryOp::Neg => match operand {
            Value::Namespace(_) | Value::Each => Err(operator_not_supported(op.as_symbol(), operand)),
            _ => Ok(Value::Number(-operand.to_number_lenient())),
        },
    }
}
