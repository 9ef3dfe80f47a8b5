//! `json` namespace and the conversions between [`Value`] and
//! [`serde_json::Value`].

use std::collections::BTreeMap;

use exql_eval::Environment;
use exql_stack::ensure_sufficient_stack;
use exql_value::{EvalError, EvalResult, Value};
use serde_json::{Map, Number};

use crate::args::Args;

/// Deepest container nesting `to_json` accepts, the same limit
/// `serde_json` applies when parsing.
pub const MAX_JSON_DEPTH: usize = 128;

/// Largest integer an `f64` holds exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

pub(crate) fn namespace() -> Environment {
    Environment::builder()
        .with_function("parse", parse)
        .with_function("stringify", stringify)
        .build()
}

fn parse(values: &[Value]) -> EvalResult {
    let args = Args::exact("json.parse", values, 1)?;
    let parsed: serde_json::Value = serde_json::from_str(args.string(0)?)
        .map_err(|e| EvalError::new(format!("json.parse: {e}")))?;
    Ok(from_json(&parsed))
}

fn stringify(values: &[Value]) -> EvalResult {
    let args = Args::exact("json.stringify", values, 1)?;
    let json = to_json(args.value(0))?;
    Ok(Value::string(json.to_string()))
}

/// Convert parsed JSON into a value. Numbers become `f64`.
pub fn from_json(json: &serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
        serde_json::Value::String(s) => Value::string(s.as_str()),
        serde_json::Value::Array(items) => items.iter().map(from_json).collect(),
        serde_json::Value::Object(entries) => Value::map(
            entries
                .iter()
                .map(|(k, v)| (k.clone(), from_json(v)))
                .collect::<BTreeMap<_, _>>(),
        ),
    }
}

/// Convert a value to JSON.
///
/// Integral numbers are written without a fraction. Non-finite numbers,
/// namespaces and the broadcast marker have no JSON form, and nesting
/// deeper than [`MAX_JSON_DEPTH`] is rejected.
pub fn to_json(value: &Value) -> Result<serde_json::Value, EvalError> {
    to_json_at(value, 0)
}

fn to_json_at(value: &Value, depth: usize) -> Result<serde_json::Value, EvalError> {
    if depth > MAX_JSON_DEPTH {
        return Err(EvalError::new(format!(
            "json.stringify: nesting deeper than {MAX_JSON_DEPTH} levels"
        )));
    }
    Ok(match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Number(n) => serde_json::Value::Number(json_number(*n)?),
        Value::String(s) => serde_json::Value::String(s.as_str().to_owned()),
        Value::List(items) => ensure_sufficient_stack(|| {
            items
                .iter()
                .map(|item| to_json_at(item, depth + 1))
                .collect::<Result<Vec<_>, _>>()
        })
        .map(serde_json::Value::Array)?,
        Value::Map(entries) => ensure_sufficient_stack(|| {
            let mut object = Map::new();
            for (key, item) in entries.iter() {
                object.insert(key.clone(), to_json_at(item, depth + 1)?);
            }
            Ok::<_, EvalError>(serde_json::Value::Object(object))
        })?,
        Value::Namespace(_) | Value::Each => {
            return Err(EvalError::new(format!(
                "json.stringify: cannot encode {}",
                value.type_name()
            )))
        }
    })
}

#[allow(clippy::cast_possible_truncation)]
fn json_number(n: f64) -> Result<Number, EvalError> {
    if n.fract() == 0.0 && n.abs() < MAX_SAFE_INTEGER {
        return Ok(Number::from(n as i64));
    }
    Number::from_f64(n)
        .ok_or_else(|| EvalError::new(format!("json.stringify: cannot encode {n}")))
}
