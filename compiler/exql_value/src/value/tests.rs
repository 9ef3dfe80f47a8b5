use std::collections::BTreeMap;

use super::*;
use crate::{EvalErrorKind, Function};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use test_case::test_case;

struct Empty;

impl Context for Empty {
    fn lookup_variable(&self, _name: &str) -> Value {
        Value::Null
    }

    fn lookup_function(&self, _name: &str) -> Option<Function> {
        None
    }
}

fn map(entries: &[(&str, Value)]) -> Value {
    Value::map(
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect(),
    )
}

#[test_case(Value::Null, false; "null")]
#[test_case(Value::Bool(true), true; "true")]
#[test_case(Value::Bool(false), false; "false")]
#[test_case(Value::Number(0.0), false; "zero")]
#[test_case(Value::Number(-2.5), true; "non-zero")]
#[test_case(Value::string(""), false; "empty string")]
#[test_case(Value::string("0"), true; "string zero")]
#[test_case(Value::list(vec![]), true; "empty list")]
#[test_case(Value::map(BTreeMap::new()), true; "empty map")]
#[test_case(Value::namespace(Empty), true; "namespace")]
#[test_case(Value::Each, true; "each")]
fn to_bool(value: Value, expected: bool) {
    assert_eq!(value.to_bool(), expected);
}

#[test_case(Value::Null, 0.0; "null")]
#[test_case(Value::Bool(true), 1.0; "true")]
#[test_case(Value::Bool(false), 0.0; "false")]
#[test_case(Value::Number(4.5), 4.5; "number")]
#[test_case(Value::string("3"), 3.0; "integer string")]
#[test_case(Value::string("-0.25"), -0.25; "fractional string")]
fn to_number_accepts(value: Value, expected: f64) {
    assert_eq!(value.to_number(), Ok(expected));
    assert_eq!(value.to_number_lenient(), expected);
}

#[test_case(Value::string("abc"); "non-numeric string")]
#[test_case(Value::string(""); "empty string")]
#[test_case(Value::list(vec![]); "list")]
#[test_case(Value::namespace(Empty); "namespace")]
#[test_case(Value::Each; "each")]
fn to_number_rejects(value: Value) {
    let err = value.to_number().unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::Coercion { target: "number", .. }));
    assert_eq!(value.to_number_lenient(), 0.0);
}

#[test]
fn equality_distinguishes_tags() {
    assert!(!Value::Number(42.0).equals(&Value::string("42")));
    assert!(!Value::Bool(true).equals(&Value::Number(1.0)));
    assert!(!Value::Null.equals(&Value::Bool(false)));
    assert!(Value::Null.equals(&Value::Null));
    assert!(Value::Each.equals(&Value::Each));
}

#[test]
fn equality_is_structural_for_containers() {
    let a = Value::list(vec![Value::from(1), map(&[("k", Value::from("v"))])]);
    let b = Value::list(vec![Value::from(1), map(&[("k", Value::from("v"))])]);
    let c = Value::list(vec![Value::from(1), map(&[("k", Value::from("w"))])]);
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(Value::list(vec![Value::from(1)]), Value::list(vec![]));
    assert_ne!(map(&[("a", Value::Null)]), map(&[("b", Value::Null)]));
}

#[test]
fn namespaces_compare_by_identity() {
    let ns = Value::namespace(Empty);
    assert_eq!(ns.clone(), ns);
    assert_ne!(Value::namespace(Empty), Value::namespace(Empty));
}

#[test]
fn nan_equals_nothing() {
    assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
}

#[test]
fn contains_only_searches_lists() {
    let fruits = Value::list(vec![Value::from("apple"), Value::from("banana")]);
    assert!(fruits.contains(&Value::from("apple")));
    assert!(!fruits.contains(&Value::from("grape")));
    assert!(!Value::list(vec![Value::from(42)]).contains(&Value::from("42")));
    assert!(!Value::from("apple pie").contains(&Value::from("apple")));
    assert!(!map(&[("apple", Value::Null)]).contains(&Value::from("apple")));
}

#[test]
fn string_lengths() {
    let s = Value::from("héllo");
    assert_eq!(s.byte_len(), Some(6));
    assert_eq!(s.char_len(), Some(5));
    assert_eq!(Value::from(1).char_len(), None);
}

#[test]
fn accessors_match_only_their_variant() {
    assert_eq!(Value::Bool(true).as_bool(), Some(true));
    assert_eq!(Value::from(1).as_bool(), None);
    assert_eq!(Value::from(2.5).as_number(), Some(2.5));
    assert_eq!(Value::from("x").as_str(), Some("x"));
    assert_eq!(Value::from("x").as_list(), None);
    assert_eq!(Value::list(vec![Value::Null]).as_list(), Some(&[Value::Null][..]));
    assert!(map(&[]).as_map().is_some_and(BTreeMap::is_empty));

    let ns = Value::namespace(Empty);
    assert!(ns.as_namespace().is_some_and(|ctx| ctx.lookup_function("f").is_none()));
    assert!(Value::Null.as_namespace().is_none());
}

#[test]
fn type_names() {
    let names: Vec<_> = [
        Value::Null,
        Value::Bool(true),
        Value::Number(1.0),
        Value::from("s"),
        Value::list(vec![]),
        Value::map(BTreeMap::new()),
        Value::namespace(Empty),
        Value::Each,
    ]
    .iter()
    .map(Value::type_name)
    .collect();
    assert_eq!(
        names,
        vec!["null", "bool", "number", "string", "list", "map", "namespace", "each"]
    );
}

#[test]
fn display_is_canonical() {
    let value = Value::list(vec![
        Value::from(30),
        Value::from(2.5),
        Value::from("Alice"),
        Value::Null,
        map(&[("b", Value::Bool(false)), ("a", Value::list(vec![]))]),
    ]);
    assert_eq!(value.to_string(), r#"[30, 2.5, "Alice", null, {"a": [], "b": false}]"#);
    assert_eq!(Value::namespace(Empty).to_string(), "<namespace>");
    assert_eq!(Value::Each.to_string(), "<each>");
}

#[test]
fn debug_names_variants() {
    assert_eq!(format!("{:?}", Value::from("x")), r#"String("x")"#);
    assert_eq!(format!("{:?}", Value::from(3)), "Number(3.0)");
    assert_eq!(
        format!("{:?}", Value::list(vec![Value::Bool(true)])),
        "List([Bool(true)])"
    );
}

#[test]
fn conversions() {
    assert_eq!(Value::from(Some(1)), Value::Number(1.0));
    assert_eq!(Value::from(None::<i32>), Value::Null);
    assert_eq!(Value::from(7_i64), Value::Number(7.0));
    assert_eq!(Value::from(3_usize), Value::Number(3.0));
    assert_eq!(
        [1, 2].into_iter().map(Value::from).collect::<Value>(),
        Value::list(vec![Value::from(1), Value::from(2)])
    );
}

#[test]
fn heap_payload_is_shared_on_clone() {
    let list = Value::list(vec![Value::Null]);
    let Value::List(a) = &list else {
        unreachable!()
    };
    let b = a.clone();
    assert!(Heap::ptr_eq(a, &b));
    assert_eq!(b.into_inner(), vec![Value::Null]);
}

const DEEP: usize = 10_000;

fn nested_list(depth: usize) -> Value {
    (0..depth).fold(Value::from(1), |inner, _| Value::list(vec![inner]))
}

fn nested_map(depth: usize) -> Value {
    (0..depth).fold(Value::from(1), |inner, _| {
        Value::map(BTreeMap::from([("k".to_string(), inner)]))
    })
}

#[test]
fn deep_values_compare_format_and_drop() {
    let a = nested_list(DEEP);
    let b = nested_list(DEEP);
    assert!(a.equals(&b));
    assert!(!a.equals(&nested_list(DEEP - 1)));
    assert!(Value::list(vec![a.clone()]).contains(&b));

    let text = a.to_string();
    assert_eq!(text.len(), 2 * DEEP + 1);
    assert!(format!("{a:?}").starts_with("List([List(["));

    drop(a);
    drop(b);
}

#[test]
fn deep_maps_compare_and_drop() {
    let a = nested_map(DEEP);
    assert!(a.equals(&nested_map(DEEP)));
    assert!(a.to_string().starts_with("{\"k\": {\"k\": "));
}

#[test]
fn dropping_a_shared_child_keeps_it_alive() {
    let child = nested_list(3);
    let parent = Value::list(vec![child.clone(), child.clone()]);
    drop(parent);
    assert_eq!(child, nested_list(3));
}

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1000i32..1000).prop_map(Value::from),
        "[a-z0-9]{0,6}".prop_map(Value::string),
    ]
}

fn value() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::list),
            prop::collection::btree_map("[a-z]{1,3}", inner, 0..4).prop_map(Value::map),
        ]
    })
}

proptest! {
    #[test]
    fn equality_is_reflexive_and_symmetric(a in value(), b in value()) {
        prop_assert!(a.equals(&a.clone()));
        prop_assert_eq!(a.equals(&b), b.equals(&a));
    }

    #[test]
    fn string_coercion_matches_number(n in -1_000_000i32..1_000_000) {
        let s = Value::string(n.to_string());
        prop_assert_eq!(s.to_number(), Ok(f64::from(n)));
        prop_assert!(!s.equals(&Value::from(n)));
    }
}
