//! Field and index access.

use exql_stack::ensure_sufficient_stack;
use exql_value::{
    cannot_index, index_out_of_range, invalid_index, unsupported_index_type, EvalResult, Value,
};

/// `receiver.name`.
///
/// Maps yield the entry (or `Null`), lists broadcast the access over
/// their elements, namespaces resolve `name` as one of their variables.
/// Anything else yields `Null`.
pub(super) fn field(receiver: &Value, name: &str) -> Value {
    match receiver {
        Value::Map(map) => map.get(name).cloned().unwrap_or(Value::Null),
        Value::List(items) => broadcast(items, name),
        Value::Namespace(ns) => ns.lookup_variable(name),
        _ => Value::Null,
    }
}

/// Field access applied to every element; nested lists recurse.
fn broadcast(items: &[Value], name: &str) -> Value {
    items
        .iter()
        .map(|item| ensure_sufficient_stack(|| field(item, name)))
        .collect()
}

/// `receiver[index]`.
pub(super) fn index(receiver: &Value, index: &Value) -> EvalResult {
    match (receiver, index) {
        (Value::Map(_) | Value::List(_), Value::String(key)) => Ok(field(receiver, key)),
        (Value::Map(_), _) => Err(unsupported_index_type(receiver, index)),
        (Value::List(items), Value::Number(n)) => list_element(items, *n),
        // Reserved broadcast index: selects the whole list.
        (Value::List(_), Value::Each) => Ok(receiver.clone()),
        (Value::List(_), _) => Err(unsupported_index_type(receiver, index)),
        _ => Err(cannot_index(receiver)),
    }
}

/// `i64::MAX + 1` as a float; finite indices at or past it do not fit an `i64`.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Element at `position` truncated toward zero.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn list_element(items: &[Value], position: f64) -> EvalResult {
    let position = position.trunc();
    if !position.is_finite() || position.abs() >= I64_LIMIT {
        return Err(invalid_index(position));
    }
    if position >= 0.0 && position < items.len() as f64 {
        Ok(items[position as usize].clone())
    } else {
        Err(index_out_of_range(position as i64, items.len()))
    }
}
