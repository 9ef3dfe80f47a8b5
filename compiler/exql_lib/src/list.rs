//! `list` namespace.

use exql_eval::Environment;
use exql_value::{EvalResult, Value};

use crate::args::{plain_text, Args};

pub(crate) fn namespace() -> Environment {
    Environment::builder()
        .with_function("len", len)
        .with_function("first", first)
        .with_function("last", last)
        .with_function("contains", contains)
        .with_function("concat", concat)
        .with_function("reverse", reverse)
        .with_function("join", join)
        .with_function("sum", sum)
        .build()
}

fn len(values: &[Value]) -> EvalResult {
    let args = Args::exact("list.len", values, 1)?;
    Ok(Value::from(args.list(0)?.len()))
}

/// First element, or `Null` for an empty list.
fn first(values: &[Value]) -> EvalResult {
    let args = Args::exact("list.first", values, 1)?;
    Ok(args.list(0)?.first().cloned().unwrap_or(Value::Null))
}

/// Last element, or `Null` for an empty list.
fn last(values: &[Value]) -> EvalResult {
    let args = Args::exact("list.last", values, 1)?;
    Ok(args.list(0)?.last().cloned().unwrap_or(Value::Null))
}

fn contains(values: &[Value]) -> EvalResult {
    let args = Args::exact("list.contains", values, 2)?;
    args.list(0)?;
    Ok(Value::Bool(args.value(0).contains(args.value(1))))
}

/// Concatenate any number of lists.
fn concat(values: &[Value]) -> EvalResult {
    let args = Args::between("list.concat", values, 0, usize::MAX)?;
    let mut out = Vec::new();
    for position in 0..args.len() {
        out.extend_from_slice(args.list(position)?);
    }
    Ok(Value::list(out))
}

fn reverse(values: &[Value]) -> EvalResult {
    let args = Args::exact("list.reverse", values, 1)?;
    Ok(args.list(0)?.iter().rev().cloned().collect())
}

/// `join(list, sep)`; elements use their display form, strings unquoted.
fn join(values: &[Value]) -> EvalResult {
    let args = Args::exact("list.join", values, 2)?;
    let items = args.list(0)?;
    let sep = args.string(1)?;
    let parts: Vec<String> = items.iter().map(plain_text).collect();
    Ok(Value::string(parts.join(sep)))
}

/// Sum with strict coercion: a non-numeric element is an error.
fn sum(values: &[Value]) -> EvalResult {
    let args = Args::exact("list.sum", values, 1)?;
    let mut total = 0.0;
    for item in args.list(0)? {
        total += item.to_number()?;
    }
    Ok(Value::Number(total))
}
