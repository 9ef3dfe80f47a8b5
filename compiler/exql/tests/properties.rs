//! Property suites over generated expressions: parser stability under
//! evaluation and evaluation purity.

use std::collections::BTreeMap;

use exql::{evaluate, parse, Environment, Options, Value};
use proptest::prelude::*;

const KEYWORDS: [&str; 6] = ["and", "or", "not", "in", "true", "false"];

fn bindings() -> Environment {
    let user = Value::map(BTreeMap::from([
        ("age".to_string(), Value::from(25)),
        ("name".to_string(), Value::from("ann")),
    ]));
    Options::new()
        .with_builtins()
        .with_variable("a", 3)
        .with_variable("b", "7")
        .with_variable("xs", Value::list(vec![Value::from(1), Value::from("b")]))
        .with_variable("user", user)
        .with_function("add", |args| {
            Ok(Value::Number(args.iter().map(Value::to_number_lenient).sum()))
        })
        .build()
}

fn leaf() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec!["a", "b", "xs", "user", "missing"]).prop_map(str::to_string),
        any::<u8>().prop_map(|n| n.to_string()),
        "[a-z ]{0,4}".prop_map(|s| format!("'{s}'")),
        prop::sample::select(vec!["true", "false"]).prop_map(str::to_string),
    ]
}

fn field() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec!["age", "name"]).prop_map(str::to_string),
        "[a-z]{1,4}".prop_filter("keyword", |s| !KEYWORDS.contains(&s.as_str())),
    ]
}

fn binary_op() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "and", "or", "in", "not in", "==", "!=", "<", "<=", ">", ">=", "+", "-", "*", "/",
    ])
}

fn expression() -> impl Strategy<Value = String> {
    leaf().prop_recursive(4, 40, 4, |inner| {
        prop_oneof![
            (inner.clone(), binary_op(), inner.clone()).prop_map(|(l, op, r)| format!("{l} {op} {r}")),
            (prop::sample::select(vec!["not ", "-"]), inner.clone()).prop_map(|(op, e)| format!("{op}{e}")),
            inner.clone().prop_map(|e| format!("({e})")),
            (inner.clone(), field()).prop_map(|(e, f)| format!("({e}).{f}")),
            (inner.clone(), inner.clone()).prop_map(|(e, i)| format!("({e})[{i}]")),
            prop::collection::vec(inner.clone(), 0..3).prop_map(|xs| format!("[{}]", xs.join(", "))),
            prop::collection::vec(inner.clone(), 0..3).prop_map(|xs| format!("add({})", xs.join(", "))),
            inner.prop_map(|e| format!("util.type({e})")),
        ]
    })
}

/// Result rendered for comparison; `NaN` never equals itself as a value.
fn outcome(result: &Result<Value, exql::EvalError>) -> String {
    match result {
        Ok(value) => format!("ok {value}"),
        Err(err) => format!("err {err}"),
    }
}

proptest! {
    #[test]
    fn reparsed_canonical_form_evaluates_the_same(source in expression()) {
        let env = bindings();
        let ast = parse(&source).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let reparsed = parse(&ast.to_source()).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(
            outcome(&evaluate(&reparsed, &env)),
            outcome(&evaluate(&ast, &env))
        );
    }

    #[test]
    fn evaluation_is_pure(source in expression()) {
        let env = bindings();
        let ast = parse(&source).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let first = outcome(&evaluate(&ast, &env));
        for _ in 0..3 {
            prop_assert_eq!(outcome(&evaluate(&ast, &env)), first.clone());
        }
    }

    #[test]
    fn keyword_prefixed_identifiers_are_variables(suffix in "[a-z0-9_]{1,6}") {
        for keyword in KEYWORDS {
            let name = format!("{keyword}{suffix}");
            let env = Options::new().with_variable(name.as_str(), 1).build();
            prop_assert_eq!(exql::eval(&name, &env), Ok(Value::from(1)));
        }
    }

    #[test]
    fn arbitrary_input_never_panics(source in "\\PC{0,40}") {
        let _ = exql::eval(&source, &bindings());
    }
}
