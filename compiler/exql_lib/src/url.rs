//! `url` namespace: percent-encoding and query strings.

use std::collections::BTreeMap;

use exql_eval::Environment;
use exql_value::{EvalError, EvalResult, Value};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::args::Args;

/// Everything but the RFC 3986 unreserved characters.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

pub(crate) fn namespace() -> Environment {
    Environment::builder()
        .with_function("encode", encode)
        .with_function("decode", decode)
        .with_function("query", query)
        .build()
}

fn encode(values: &[Value]) -> EvalResult {
    let args = Args::exact("url.encode", values, 1)?;
    Ok(Value::string(
        utf8_percent_encode(args.string(0)?, COMPONENT).to_string(),
    ))
}

fn decode(values: &[Value]) -> EvalResult {
    let args = Args::exact("url.decode", values, 1)?;
    Ok(Value::string(decode_component("url.decode", args.string(0)?)?))
}

/// Parse `a=1&b=two` into a map. Later keys overwrite earlier ones, a
/// leading `?` is ignored and `+` decodes to a space.
fn query(values: &[Value]) -> EvalResult {
    let args = Args::exact("url.query", values, 1)?;
    let raw = args.string(0)?;
    let raw = raw.strip_prefix('?').unwrap_or(raw);
    let mut entries = BTreeMap::new();
    for pair in raw.split('&').filter(|pair| !pair.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = decode_component("url.query", &key.replace('+', " "))?;
        let value = decode_component("url.query", &value.replace('+', " "))?;
        entries.insert(key, Value::string(value));
    }
    Ok(Value::map(entries))
}

fn decode_component(function: &str, raw: &str) -> Result<String, EvalError> {
    percent_decode_str(raw)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|e| EvalError::new(format!("{function}: {e}")))
}
