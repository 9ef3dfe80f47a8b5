//! `http` namespace: status codes and methods.

use exql_eval::Environment;
use exql_value::{EvalResult, Value};
use http::{Method, StatusCode};

use crate::args::Args;

pub(crate) fn namespace() -> Environment {
    Environment::builder()
        .with_function("status_text", status_text)
        .with_function("is_success", is_success)
        .with_function("is_valid_method", is_valid_method)
        .with_function("is_safe_method", is_safe_method)
        .with_function("is_idempotent", is_idempotent)
        .build()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn status(args: &Args<'_>) -> Result<Option<StatusCode>, exql_value::EvalError> {
    let n = args.number(0)?;
    if n.fract() != 0.0 || !(100.0..1000.0).contains(&n) {
        return Ok(None);
    }
    Ok(StatusCode::from_u16(n as u16).ok())
}

/// Canonical reason phrase, or `Null` for an unknown code.
fn status_text(values: &[Value]) -> EvalResult {
    let args = Args::exact("http.status_text", values, 1)?;
    Ok(status(&args)?
        .and_then(|code| code.canonical_reason())
        .map_or(Value::Null, Value::from))
}

fn is_success(values: &[Value]) -> EvalResult {
    let args = Args::exact("http.is_success", values, 1)?;
    Ok(Value::Bool(
        status(&args)?.is_some_and(|code| code.is_success()),
    ))
}

fn method(args: &Args<'_>) -> Result<Option<Method>, exql_value::EvalError> {
    Ok(Method::from_bytes(args.string(0)?.as_bytes()).ok())
}

/// Any well-formed method token, extension methods included.
fn is_valid_method(values: &[Value]) -> EvalResult {
    let args = Args::exact("http.is_valid_method", values, 1)?;
    Ok(Value::Bool(method(&args)?.is_some()))
}

fn is_safe_method(values: &[Value]) -> EvalResult {
    let args = Args::exact("http.is_safe_method", values, 1)?;
    Ok(Value::Bool(method(&args)?.is_some_and(|m| m.is_safe())))
}

fn is_idempotent(values: &[Value]) -> EvalResult {
    let args = Args::exact("http.is_idempotent", values, 1)?;
    Ok(Value::Bool(
        method(&args)?.is_some_and(|m| m.is_idempotent()),
    ))
}
