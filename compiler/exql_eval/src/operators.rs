//! Binary operator implementations for the evaluator.
//!
//! The operand coercions are fixed per operator family:
//!
//! - logic (`and`, `or`): both sides through `to_bool`, no short-circuit
//! - equality (`==`, `!=`): tag-distinguishing structural equality
//! - ordering and arithmetic: both sides through lenient `to_number`
//! - membership (`in`, `not in`): list search on the right operand

use exql_ir::BinaryOp;
use exql_value::{operator_not_supported, EvalError, EvalResult, Value};

/// Evaluate `left op right` on already evaluated operands.
pub fn evaluate_binary(op: BinaryOp, left: &Value, right: &Value) -> EvalResult {
    match op {
        BinaryOp::And => Ok(Value::Bool(left.to_bool() && right.to_bool())),
        BinaryOp::Or => Ok(Value::Bool(left.to_bool() || right.to_bool())),
        BinaryOp::Eq => Ok(Value::Bool(left.equals(right))),
        BinaryOp::NotEq => Ok(Value::Bool(!left.equals(right))),
        BinaryOp::In => Ok(Value::Bool(right.contains(left))),
        BinaryOp::NotIn => Ok(Value::Bool(!right.contains(left))),

        // NaN on either side makes every ordering false.
        BinaryOp::Lt => ordering(op, left, right, |a, b| a < b),
        BinaryOp::LtEq => ordering(op, left, right, |a, b| a <= b),
        BinaryOp::Gt => ordering(op, left, right, |a, b| a > b),
        BinaryOp::GtEq => ordering(op, left, right, |a, b| a >= b),

        // Division by zero yields the IEEE infinity or NaN.
        BinaryOp::Add => arithmetic(op, left, right, |a, b| a + b),
        BinaryOp::Sub => arithmetic(op, left, right, |a, b| a - b),
        BinaryOp::Mul => arithmetic(op, left, right, |a, b| a * b),
        BinaryOp::Div => arithmetic(op, left, right, |a, b| a / b),
    }
}

#[inline]
fn ordering(op: BinaryOp, left: &Value, right: &Value, cmp: fn(f64, f64) -> bool) -> EvalResult {
    let (a, b) = numeric_operands(op, left, right)?;
    Ok(Value::Bool(cmp(a, b)))
}

#[inline]
fn arithmetic(op: BinaryOp, left: &Value, right: &Value, apply: fn(f64, f64) -> f64) -> EvalResult {
    let (a, b) = numeric_operands(op, left, right)?;
    Ok(Value::Number(apply(a, b)))
}

/// Coerce both operands to numbers. Namespaces and `Each` have no
/// numeric reading, even a lenient one.
fn numeric_operands(op: BinaryOp, left: &Value, right: &Value) -> Result<(f64, f64), EvalError> {
    for operand in [left, right] {
        if matches!(operand, Value::Namespace(_) | Value::Each) {
            return Err(operator_not_supported(op.as_symbol(), operand));
        }
    }
    Ok((left.to_number_lenient(), right.to_number_lenient()))
}
