use super::*;
use exql_value::EvalError;
use pretty_assertions::assert_eq;

#[test]
fn missing_names() {
    let env = Environment::new();
    assert_eq!(env.lookup_variable("x"), Value::Null);
    assert!(env.lookup_function("f").is_none());
}

#[test]
fn set_and_replace() {
    let mut env = Environment::new();
    env.set_variable("x", 1);
    env.set_variable("x", "two");
    assert_eq!(env.lookup_variable("x"), Value::from("two"));
    assert_eq!(env.remove_variable("x"), Some(Value::from("two")));
    assert_eq!(env.variable("x"), None);
}

#[test]
fn builder_installs_everything() {
    let inner = Environment::builder()
        .with_variable("pi", 3.5)
        .with_function("one", |_| Ok(Value::from(1)))
        .build();
    let env = Environment::builder()
        .with_variables([("a", Value::from(1)), ("b", Value::from(true))])
        .with_function("fail", |_| Err(EvalError::new("nope")))
        .with_functions([("id", Function::new(|args| Ok(args.first().cloned().unwrap_or(Value::Null))))])
        .with_namespace("ns", inner)
        .build();

    assert_eq!(env.lookup_variable("a"), Value::from(1));
    assert_eq!(env.lookup_variable("b"), Value::Bool(true));
    assert!(env.has_function("fail"));
    assert_eq!(env.function_names(), vec!["fail", "id"]);

    let id = env.lookup_function("id").map(|f| f.call(&[Value::from("x")]));
    assert_eq!(id, Some(Ok(Value::from("x"))));

    let ns = env.lookup_variable("ns");
    let Value::Namespace(ns) = &ns else {
        panic!("ns is a namespace");
    };
    assert_eq!(ns.lookup_variable("pi"), Value::from(3.5));
    assert!(ns.lookup_function("one").is_some());
}

#[test]
fn debug_lists_names() {
    let env = Environment::builder()
        .with_variable("b", 1)
        .with_variable("a", 2)
        .with_function("f", |_| Ok(Value::Null))
        .build();
    assert_eq!(
        format!("{env:?}"),
        r#"Environment { variables: ["a", "b"], functions: ["f"] }"#
    );
}
