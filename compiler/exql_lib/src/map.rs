//! `map` namespace.

use exql_eval::Environment;
use exql_value::{EvalResult, Value};

use crate::args::Args;

pub(crate) fn namespace() -> Environment {
    Environment::builder()
        .with_function("keys", keys)
        .with_function("values", values)
        .with_function("has", has)
        .with_function("get", get)
        .with_function("len", len)
        .build()
}

/// Keys in sorted order.
fn keys(values: &[Value]) -> EvalResult {
    let args = Args::exact("map.keys", values, 1)?;
    Ok(args.map(0)?.keys().map(String::as_str).map(Value::from).collect())
}

/// Values in key order.
fn values(values: &[Value]) -> EvalResult {
    let args = Args::exact("map.values", values, 1)?;
    Ok(args.map(0)?.values().cloned().collect())
}

fn has(values: &[Value]) -> EvalResult {
    let args = Args::exact("map.has", values, 2)?;
    Ok(Value::Bool(args.map(0)?.contains_key(args.string(1)?)))
}

/// `get(map, key)` or `get(map, key, default)`.
fn get(values: &[Value]) -> EvalResult {
    let args = Args::between("map.get", values, 2, 3)?;
    let found = args.map(0)?.get(args.string(1)?).cloned();
    Ok(match found {
        Some(value) => value,
        None if args.len() == 3 => args.value(2).clone(),
        None => Value::Null,
    })
}

fn len(values: &[Value]) -> EvalResult {
    let args = Args::exact("map.len", values, 1)?;
    Ok(Value::from(args.map(0)?.len()))
}
