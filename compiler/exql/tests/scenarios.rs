//! End-to-end scenarios and the documented evaluation laws.

use std::collections::BTreeMap;

use exql::{eval, Environment, Error, EvalErrorKind, Options, Value};
use pretty_assertions::assert_eq;
use test_case::test_case;

fn map(entries: &[(&str, Value)]) -> Value {
    Value::map(
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect::<BTreeMap<_, _>>(),
    )
}

fn strings(items: &[&str]) -> Value {
    items.iter().copied().map(Value::from).collect()
}

fn fixture() -> Environment {
    Options::new()
        .with_builtins()
        .with_variable(
            "user",
            map(&[
                ("age", Value::from(25)),
                ("active", Value::Bool(true)),
                ("name", Value::from("Alice")),
            ]),
        )
        .with_variable("x", 10)
        .with_variable("fruits", strings(&["apple", "banana"]))
        .with_variable(
            "users",
            Value::list(vec![
                map(&[("name", Value::from("Alice"))]),
                map(&[("name", Value::from("Bob"))]),
            ]),
        )
        .with_variable("arr", strings(&["only", "two"]))
        .with_variable(
            "request",
            map(&[
                ("method", Value::from("POST")),
                ("path", Value::from("/api/v1/users")),
                ("headers", map(&[("content-type", Value::from("application/json"))])),
                ("body", Value::from(r#"{"role": "admin", "tags": ["a", "b"]}"#)),
            ]),
        )
        .with_function("add", |args| {
            let sum: f64 = args.iter().map(Value::to_number_lenient).sum();
            Ok(Value::Number(sum))
        })
        .build()
}

fn run(source: &str) -> Result<Value, Error> {
    eval(source, &fixture())
}

#[test_case("user.age > 18 and user.active", Value::Bool(true); "s1 nested fields")]
#[test_case("(x + 5) * 2", Value::from(30); "s2 grouping")]
#[test_case("'apple' in fruits", Value::Bool(true); "s3 membership")]
#[test_case("users.name", strings(&["Alice", "Bob"]); "s4 broadcast")]
#[test_case("add(10, 20)", Value::from(30); "s5 host function")]
fn scenarios(source: &str, expected: Value) {
    assert_eq!(run(source), Ok(expected));
}

#[test]
fn s6_index_out_of_range() {
    let Err(Error::Eval(err)) = run("arr[10]") else {
        panic!("expected an evaluation error");
    };
    assert_eq!(err.kind, EvalErrorKind::IndexOutOfRange { index: 10, len: 2 });
}

#[test_case("3 + 5 * 2", Value::from(13); "precedence")]
#[test_case("10 - 3 - 2", Value::from(5); "left associativity")]
#[test_case("android", Value::Null; "keyword prefix is an identifier")]
#[test_case("undefined_var", Value::Null; "undefined variable")]
#[test_case("undefined_func(1)", Value::Bool(false); "undefined function")]
#[test_case("'apple' in ['apple', 'banana']", Value::Bool(true); "in literal list")]
#[test_case("'grape' not in ['apple', 'banana']", Value::Bool(true); "not in")]
#[test_case("42 == '42'", Value::Bool(false); "equality distinguishes tags")]
#[test_case("'3' + 5", Value::from(8); "string coerced in arithmetic")]
fn laws(source: &str, expected: Value) {
    assert_eq!(run(source), Ok(expected));
}

#[test_case("request.method == 'POST' and string.starts_with(request.path, '/api/')", Value::Bool(true); "route guard")]
#[test_case("json.parse(request.body).role", Value::from("admin"); "field of parsed body")]
#[test_case("'b' in json.parse(request.body).tags", Value::Bool(true); "membership in parsed body")]
#[test_case("request.headers['content-type']", Value::from("application/json"); "header by index")]
#[test_case("list.len(string.split(request.path, '/'))", Value::from(4); "split path")]
#[test_case("string.concat(string.upper(user.name), '!')", Value::from("ALICE!"); "string concatenation")]
#[test_case("'abc' + 1", Value::from(1); "plus is numeric only")]
#[test_case("list.join(users.name, ', ')", Value::from("Alice, Bob"); "join broadcast")]
#[test_case("http.is_success(200) and not ip.is_private('8.8.8.8')", Value::Bool(true); "library predicates")]
#[test_case("util.default(user.nickname, user.name)", Value::from("Alice"); "default for missing field")]
fn request_rules(source: &str, expected: Value) {
    assert_eq!(run(source), Ok(expected));
}

#[test]
fn syntax_errors_carry_position_and_context() {
    let Err(Error::Syntax(err)) = run("user.age > > 18") else {
        panic!("expected a syntax error");
    };
    assert_eq!(err.offset, 11);
    assert_eq!(err.token, ">");
    assert!(err.to_string().contains("user.age > > 18"), "{err}");
}

#[test]
fn one_ast_many_contexts() {
    let ast = exql::parse("x * 2").unwrap_or_else(|err| panic!("{err}"));
    for n in 0..5 {
        let env = Options::new().with_variable("x", n).build();
        assert_eq!(exql::evaluate(&ast, &env), Ok(Value::from(n * 2)));
    }
}

#[test]
fn evaluation_across_threads() {
    let ast = std::sync::Arc::new(
        exql::parse("string.len(name) + n").unwrap_or_else(|err| panic!("{err}")),
    );
    let handles: Vec<_> = (0..4)
        .map(|n| {
            let ast = std::sync::Arc::clone(&ast);
            std::thread::spawn(move || {
                let env = Options::new()
                    .with_builtins()
                    .with_variable("name", "abc")
                    .with_variable("n", n)
                    .build();
                exql::evaluate(&ast, &env)
            })
        })
        .collect();
    for (n, handle) in handles.into_iter().enumerate() {
        let result = handle.join().unwrap_or_else(|_| panic!("thread panicked"));
        assert_eq!(result, Ok(Value::from(3 + n)));
    }
}

#[test]
fn deeply_nested_list_literal() {
    const DEPTH: usize = 10_000;
    let source = format!("{}1{}", "[".repeat(DEPTH), "]".repeat(DEPTH));
    let env = Options::new().with_builtins().build();

    let first = eval(&source, &env).unwrap_or_else(|err| panic!("{err}"));
    let second = eval(&source, &env).unwrap_or_else(|err| panic!("{err}"));
    assert!(first == second);
    assert_eq!(first.to_string(), source);

    let env = Options::new().with_builtins().with_variable("deep", first).build();
    assert_eq!(eval("deep == deep", &env), Ok(Value::Bool(true)));
    assert_eq!(eval("deep in [deep]", &env), Ok(Value::Bool(true)));
    assert!(matches!(
        eval("json.stringify(deep)", &env),
        Err(Error::Eval(err)) if matches!(err.kind, EvalErrorKind::Custom { .. })
    ));
    drop(env);
    drop(second);
}
