//! `crypt` namespace: digests and base64. Digests are lowercase hex.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use exql_eval::Environment;
use exql_value::{EvalError, EvalResult, Value};
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256};

use crate::args::Args;

pub(crate) fn namespace() -> Environment {
    Environment::builder()
        .with_function("md5", md5)
        .with_function("sha1", sha1)
        .with_function("sha256", sha256)
        .with_function("base64_encode", base64_encode)
        .with_function("base64_decode", base64_decode)
        .build()
}

fn hex_digest<D: Digest>(input: &str) -> Value {
    Value::string(hex::encode(D::digest(input.as_bytes())))
}

fn md5(values: &[Value]) -> EvalResult {
    let args = Args::exact("crypt.md5", values, 1)?;
    Ok(hex_digest::<Md5>(args.string(0)?))
}

fn sha1(values: &[Value]) -> EvalResult {
    let args = Args::exact("crypt.sha1", values, 1)?;
    Ok(hex_digest::<Sha1>(args.string(0)?))
}

fn sha256(values: &[Value]) -> EvalResult {
    let args = Args::exact("crypt.sha256", values, 1)?;
    Ok(hex_digest::<Sha256>(args.string(0)?))
}

fn base64_encode(values: &[Value]) -> EvalResult {
    let args = Args::exact("crypt.base64_encode", values, 1)?;
    Ok(Value::string(STANDARD.encode(args.string(0)?)))
}

/// Decoded bytes must be UTF-8.
fn base64_decode(values: &[Value]) -> EvalResult {
    let args = Args::exact("crypt.base64_decode", values, 1)?;
    let bytes = STANDARD
        .decode(args.string(0)?)
        .map_err(|e| EvalError::new(format!("crypt.base64_decode: {e}")))?;
    let text = String::from_utf8(bytes)
        .map_err(|_| EvalError::new("crypt.base64_decode: decoded bytes are not valid UTF-8"))?;
    Ok(Value::string(text))
}
