use super::*;
use pretty_assertions::assert_eq;

#[test]
fn messages() {
    assert_eq!(
        index_out_of_range(10, 2).to_string(),
        "index out of range: 10 (length 2)"
    );
    assert_eq!(
        unsupported_index_type(&Value::list(vec![]), &Value::Bool(true)).to_string(),
        "unsupported index type: cannot index list with bool"
    );
    assert_eq!(invalid_index(f64::NAN).to_string(), "invalid list index: NaN");
    assert_eq!(invalid_index(f64::INFINITY).to_string(), "invalid list index: inf");
    assert_eq!(cannot_index(&Value::from(1)).to_string(), "cannot index into number");
    assert_eq!(
        unexpected_identifier("upper", &Value::from("s")).to_string(),
        "unexpected identifier: `upper` called on string, expected a namespace"
    );
    assert_eq!(
        operator_not_supported("+", &Value::Each).to_string(),
        "operator not supported: `+` on each"
    );
    assert_eq!(
        arity_mismatch("string.upper", 1, 3).to_string(),
        "string.upper expects 1 argument(s), got 3"
    );
    assert_eq!(
        wrong_arg_type("list.join", 1, "string", &Value::Null).to_string(),
        "list.join: argument 1 must be string, got null"
    );
    assert_eq!(
        coercion_failed(&Value::from("abc"), "number").to_string(),
        "cannot convert \"abc\" to number"
    );
}

#[test]
fn custom_errors_keep_message() {
    let err = EvalError::new("boom");
    assert_eq!(
        err.kind,
        EvalErrorKind::Custom {
            message: "boom".to_string()
        }
    );
    assert_eq!(err.message(), "boom");
}
