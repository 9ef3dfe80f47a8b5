//! `util` namespace: coercions and defaults.

use exql_eval::Environment;
use exql_value::{EvalResult, Value};

use crate::args::{plain_text, Args};

pub(crate) fn namespace() -> Environment {
    Environment::builder()
        .with_function("default", default)
        .with_function("type", type_of)
        .with_function("to_number", to_number)
        .with_function("to_string", to_string)
        .with_function("to_bool", to_bool)
        .build()
}

/// First argument that is not `Null`.
fn default(values: &[Value]) -> EvalResult {
    let args = Args::between("util.default", values, 1, usize::MAX)?;
    Ok(args
        .iter()
        .find(|value| !value.is_null())
        .cloned()
        .unwrap_or(Value::Null))
}

fn type_of(values: &[Value]) -> EvalResult {
    let args = Args::exact("util.type", values, 1)?;
    Ok(Value::from(args.value(0).type_name()))
}

fn to_number(values: &[Value]) -> EvalResult {
    let args = Args::exact("util.to_number", values, 1)?;
    Ok(Value::Number(args.number(0)?))
}

fn to_string(values: &[Value]) -> EvalResult {
    let args = Args::exact("util.to_string", values, 1)?;
    Ok(Value::string(plain_text(args.value(0))))
}

fn to_bool(values: &[Value]) -> EvalResult {
    let args = Args::exact("util.to_bool", values, 1)?;
    Ok(Value::Bool(args.value(0).to_bool()))
}
