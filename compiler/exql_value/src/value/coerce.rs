//! Coercions and comparisons.

use exql_stack::ensure_sufficient_stack;

use crate::{coercion_failed, EvalError, Value};

impl Value {
    /// Truthiness.
    ///
    /// `Null`, `false`, `0` and `""` are false. Lists, maps, namespaces
    /// and `Each` are always true, even when empty.
    pub fn to_bool(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0,
            Value::String(s) => !s.is_empty(),
            Value::List(_) | Value::Map(_) | Value::Namespace(_) | Value::Each => true,
        }
    }

    /// Strict numeric coercion.
    ///
    /// Strings must parse as a double. Containers, namespaces and `Each`
    /// have no numeric value.
    pub fn to_number(&self) -> Result<f64, EvalError> {
        match self {
            Value::Null => Ok(0.0),
            Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            Value::Number(n) => Ok(*n),
            Value::String(s) => s.parse().map_err(|_| coercion_failed(self, "number")),
            Value::List(_) | Value::Map(_) | Value::Namespace(_) | Value::Each => {
                Err(coercion_failed(self, "number"))
            }
        }
    }

    /// Lenient numeric coercion used by operators: anything that
    /// [`to_number`](Value::to_number) rejects becomes `0`.
    pub fn to_number_lenient(&self) -> f64 {
        self.to_number().unwrap_or(0.0)
    }

    /// Structural equality that distinguishes tags.
    ///
    /// `Number(42)` and `String("42")` are different. Lists compare
    /// element-wise, maps entry-wise, namespaces by identity. Numbers
    /// follow IEEE rules, so `NaN` equals nothing.
    #[allow(clippy::float_cmp)]
    pub fn equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) | (Value::Each, Value::Each) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => **a == **b,
            (Value::List(a), Value::List(b)) => ensure_sufficient_stack(|| {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.equals(y))
            }),
            (Value::Map(a), Value::Map(b)) => ensure_sufficient_stack(|| {
                a.len() == b.len()
                    && a.iter()
                        .zip(b.iter())
                        .all(|((ka, va), (kb, vb))| ka == kb && va.equals(vb))
            }),
            (Value::Namespace(a), Value::Namespace(b)) => super::Heap::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Membership: whether `self` is a list holding an element equal to
    /// `item`. Any other container holds nothing.
    pub fn contains(&self, item: &Value) -> bool {
        match self {
            Value::List(items) => {
                ensure_sufficient_stack(|| items.iter().any(|x| x.equals(item)))
            }
            _ => false,
        }
    }
}
