//! `time` namespace. Instants are Unix timestamps in seconds.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use exql_eval::Environment;
use exql_value::{EvalError, EvalResult, Value};

use crate::args::Args;

/// Format used when `time.format` is given no pattern.
const DEFAULT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

pub(crate) fn namespace() -> Environment {
    Environment::builder()
        .with_function("now", now)
        .with_function("format", format)
        .with_function("parse", parse)
        .build()
}

#[allow(clippy::cast_precision_loss)]
fn now(values: &[Value]) -> EvalResult {
    Args::exact("time.now", values, 0)?;
    let now = Utc::now();
    Ok(Value::Number(now.timestamp_millis() as f64 / 1000.0))
}

/// `format(seconds)` or `format(seconds, pattern)` with strftime patterns, in UTC.
#[allow(clippy::cast_possible_truncation)]
fn format(values: &[Value]) -> EvalResult {
    let args = Args::between("time.format", values, 1, 2)?;
    let seconds = args.number(0)?;
    let pattern = if args.len() == 2 {
        args.string(1)?
    } else {
        DEFAULT_FORMAT
    };
    let millis = (seconds * 1000.0).round();
    let instant = if millis.is_finite() {
        DateTime::<Utc>::from_timestamp_millis(millis as i64)
    } else {
        None
    };
    let instant =
        instant.ok_or_else(|| EvalError::new(format!("time.format: {seconds} is out of range")))?;
    let mut out = String::new();
    write!(out, "{}", instant.format(pattern))
        .map_err(|_| EvalError::new(format!("time.format: invalid pattern `{pattern}`")))?;
    Ok(Value::string(out))
}

/// Parse an RFC 3339 timestamp into seconds.
#[allow(clippy::cast_precision_loss)]
fn parse(values: &[Value]) -> EvalResult {
    let args = Args::exact("time.parse", values, 1)?;
    let raw = args.string(0)?;
    let instant = DateTime::parse_from_rfc3339(raw)
        .map_err(|e| EvalError::new(format!("time.parse: `{raw}`: {e}")))?;
    Ok(Value::Number(instant.timestamp_millis() as f64 / 1000.0))
}
