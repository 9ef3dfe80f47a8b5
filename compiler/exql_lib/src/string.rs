//! `string` namespace. Lengths and offsets count code points.

use exql_eval::Environment;
use exql_value::{EvalResult, Value};

use crate::args::{plain_text, Args};

pub(crate) fn namespace() -> Environment {
    Environment::builder()
        .with_function("len", len)
        .with_function("bytes", bytes)
        .with_function("upper", upper)
        .with_function("lower", lower)
        .with_function("trim", trim)
        .with_function("concat", concat)
        .with_function("contains", contains)
        .with_function("starts_with", starts_with)
        .with_function("ends_with", ends_with)
        .with_function("split", split)
        .with_function("replace", replace)
        .with_function("substr", substr)
        .build()
}

fn len(values: &[Value]) -> EvalResult {
    let args = Args::exact("string.len", values, 1)?;
    Ok(Value::from(args.string(0)?.chars().count()))
}

fn bytes(values: &[Value]) -> EvalResult {
    let args = Args::exact("string.bytes", values, 1)?;
    Ok(Value::from(args.string(0)?.len()))
}

fn upper(values: &[Value]) -> EvalResult {
    let args = Args::exact("string.upper", values, 1)?;
    Ok(Value::string(args.string(0)?.to_uppercase()))
}

fn lower(values: &[Value]) -> EvalResult {
    let args = Args::exact("string.lower", values, 1)?;
    Ok(Value::string(args.string(0)?.to_lowercase()))
}

fn trim(values: &[Value]) -> EvalResult {
    let args = Args::exact("string.trim", values, 1)?;
    Ok(Value::string(args.string(0)?.trim()))
}

/// Joins any number of values; non-strings use their display form.
fn concat(values: &[Value]) -> EvalResult {
    Ok(Value::string(values.iter().map(plain_text).collect::<String>()))
}

fn contains(values: &[Value]) -> EvalResult {
    let args = Args::exact("string.contains", values, 2)?;
    Ok(Value::Bool(args.string(0)?.contains(args.string(1)?)))
}

fn starts_with(values: &[Value]) -> EvalResult {
    let args = Args::exact("string.starts_with", values, 2)?;
    Ok(Value::Bool(args.string(0)?.starts_with(args.string(1)?)))
}

fn ends_with(values: &[Value]) -> EvalResult {
    let args = Args::exact("string.ends_with", values, 2)?;
    Ok(Value::Bool(args.string(0)?.ends_with(args.string(1)?)))
}

/// `split(s, sep)`; an empty separator splits into characters.
fn split(values: &[Value]) -> EvalResult {
    let args = Args::exact("string.split", values, 2)?;
    let (text, sep) = (args.string(0)?, args.string(1)?);
    if sep.is_empty() {
        return Ok(text.chars().map(|c| Value::string(c.to_string())).collect());
    }
    Ok(text.split(sep).map(Value::from).collect())
}

fn replace(values: &[Value]) -> EvalResult {
    let args = Args::exact("string.replace", values, 3)?;
    Ok(Value::string(
        args.string(0)?.replace(args.string(1)?, args.string(2)?),
    ))
}

/// `substr(s, start)` or `substr(s, start, count)`, clamped to the string.
fn substr(values: &[Value]) -> EvalResult {
    let args = Args::between("string.substr", values, 2, 3)?;
    let text = args.string(0)?;
    let start = args.count(1)?;
    let count = if args.len() == 3 { args.count(2)? } else { usize::MAX };
    Ok(Value::string(
        text.chars().skip(start).take(count).collect::<String>(),
    ))
}
