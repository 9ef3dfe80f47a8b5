//! `ip` namespace. Addresses are strings; anything unparsable answers `false`.

use std::net::IpAddr;

use exql_eval::Environment;
use exql_value::{EvalResult, Value};

use crate::args::Args;

pub(crate) fn namespace() -> Environment {
    Environment::builder()
        .with_function("is_valid", is_valid)
        .with_function("is_v4", is_v4)
        .with_function("is_v6", is_v6)
        .with_function("is_private", is_private)
        .with_function("is_loopback", is_loopback)
        .build()
}

fn check(
    function: &'static str,
    values: &[Value],
    predicate: impl Fn(IpAddr) -> bool,
) -> EvalResult {
    let args = Args::exact(function, values, 1)?;
    let addr = args.string(0)?.trim().parse::<IpAddr>().ok();
    Ok(Value::Bool(addr.is_some_and(predicate)))
}

fn is_valid(values: &[Value]) -> EvalResult {
    check("ip.is_valid", values, |_| true)
}

fn is_v4(values: &[Value]) -> EvalResult {
    check("ip.is_v4", values, |addr| addr.is_ipv4())
}

fn is_v6(values: &[Value]) -> EvalResult {
    check("ip.is_v6", values, |addr| addr.is_ipv6())
}

/// RFC 1918 for v4, unique local `fc00::/7` for v6.
fn is_private(values: &[Value]) -> EvalResult {
    check("ip.is_private", values, |addr| match addr {
        IpAddr::V4(v4) => v4.is_private(),
        IpAddr::V6(v6) => v6.segments()[0] & 0xfe00 == 0xfc00,
    })
}

fn is_loopback(values: &[Value]) -> EvalResult {
    check("ip.is_loopback", values, |addr| addr.is_loopback())
}
