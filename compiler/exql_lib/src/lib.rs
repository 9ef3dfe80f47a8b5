//! Built-in function namespaces.
//!
//! Each namespace is an [`Environment`] holding plain functions, meant to
//! be bound as a namespace value so expressions call them qualified:
//! `string.upper(name)`, `crypt.sha256(body)`, `json.parse(raw)`.
//!
//! Library functions check their own arity and argument types and use
//! the strict numeric coercion, so `string.substr(s, 'x')` is an error
//! rather than a silent zero.

mod args;
mod crypt;
mod http;
mod ip;
mod json;
mod list;
mod map;
mod string;
mod time;
mod url;
mod util;

use exql_eval::{Environment, EnvironmentBuilder};

pub use json::{from_json, to_json, MAX_JSON_DEPTH};

/// Names of the built-in namespaces, sorted.
pub const NAMESPACES: [&str; 10] = [
    "crypt", "http", "ip", "json", "list", "map", "string", "time", "url", "util",
];

/// The function table of one built-in namespace.
pub fn namespace(name: &str) -> Option<Environment> {
    let env = match name {
        "crypt" => crypt::namespace(),
        "http" => http::namespace(),
        "ip" => ip::namespace(),
        "json" => json::namespace(),
        "list" => list::namespace(),
        "map" => map::namespace(),
        "string" => string::namespace(),
        "time" => time::namespace(),
        "url" => url::namespace(),
        "util" => util::namespace(),
        _ => return None,
    };
    Some(env)
}

/// Bind every built-in namespace into `builder` under its own name.
pub fn install(builder: EnvironmentBuilder) -> EnvironmentBuilder {
    NAMESPACES.iter().fold(builder, |builder, name| match namespace(name) {
        Some(env) => builder.with_namespace(*name, env),
        None => builder,
    })
}
