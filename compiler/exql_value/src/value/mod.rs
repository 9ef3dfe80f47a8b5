//! Runtime values.
//!
//! Heap-backed variants hold a [`Heap`], whose constructor is private to
//! this module; build them with the factory methods:
//!
//! ```text
//! let s = Value::string("hello");
//! let xs = Value::list(vec![Value::from(1), Value::from(2)]);
//! let ns = Value::namespace(environment);
//! ```
//!
//! Values are immutable once built. Cloning is cheap and shares heap
//! payloads, so the evaluator can hand out lists and maps it received
//! from a context without copying them.

mod coerce;
mod heap;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use exql_stack::ensure_sufficient_stack;

pub use heap::Heap;

use crate::Context;

/// A dynamically typed EXQL value.
#[derive(Clone)]
pub enum Value {
    /// Explicit absence. Undefined variables and missing map keys read as `Null`.
    Null,
    Bool(bool),
    /// The only numeric type.
    Number(f64),
    String(Heap<String>),
    /// Heterogeneous, zero-indexed.
    List(Heap<Vec<Value>>),
    /// String keys; iteration is in key order.
    Map(Heap<BTreeMap<String, Value>>),
    /// A context embedded as a value, used to resolve qualified calls.
    Namespace(Heap<dyn Context>),
    /// Broadcast marker. As an index it selects the whole list.
    Each,
}

// Factory methods
impl Value {
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(Heap::new(s.into()))
    }

    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    #[inline]
    pub fn map(entries: BTreeMap<String, Value>) -> Self {
        Value::Map(Heap::new(entries))
    }

    /// Wrap a context as a namespace value.
    pub fn namespace(context: impl Context + 'static) -> Self {
        let shared: Arc<dyn Context> = Arc::new(context);
        Value::Namespace(Heap::from_arc(shared))
    }
}

// Accessors
impl Value {
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_namespace(&self) -> Option<&dyn Context> {
        match self {
            Value::Namespace(ns) => Some(&**ns),
            _ => None,
        }
    }

    /// Lowercase type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Namespace(_) => "namespace",
            Value::Each => "each",
        }
    }

    /// Length of a string in bytes.
    pub fn byte_len(&self) -> Option<usize> {
        self.as_str().map(str::len)
    }

    /// Length of a string in Unicode code points.
    pub fn char_len(&self) -> Option<usize> {
        self.as_str().map(|s| s.chars().count())
    }
}

impl PartialEq for Value {
    /// Same as [`Value::equals`].
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Number(n) => write!(f, "Number({n:?})"),
            Value::String(s) => write!(f, "String({:?})", &**s),
            Value::List(items) => {
                ensure_sufficient_stack(|| f.debug_tuple("List").field(&**items).finish())
            }
            Value::Map(map) => {
                ensure_sufficient_stack(|| f.debug_tuple("Map").field(&**map).finish())
            }
            Value::Namespace(_) => write!(f, "Namespace(<context>)"),
            Value::Each => write!(f, "Each"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{:?}", &**s),
            Value::List(items) => ensure_sufficient_stack(|| {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }),
            Value::Map(map) => ensure_sufficient_stack(|| {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key:?}: {value}")?;
                }
                write!(f, "}}")
            }),
            Value::Namespace(_) => write!(f, "<namespace>"),
            Value::Each => write!(f, "<each>"),
        }
    }
}

impl Drop for Value {
    /// Tears nested containers down iteratively.
    ///
    /// Children of uniquely owned lists and maps are moved onto a work
    /// list before the container itself is freed, so dropping a deeply
    /// nested value never recurses.
    fn drop(&mut self) {
        if !has_nested_containers(self) {
            return;
        }
        let mut pending = Vec::new();
        take_children(self, &mut pending);
        while let Some(mut value) = pending.pop() {
            take_children(&mut value, &mut pending);
        }
    }
}

fn is_container(value: &Value) -> bool {
    matches!(value, Value::List(_) | Value::Map(_))
}

fn has_nested_containers(value: &Value) -> bool {
    match value {
        Value::List(items) => items.iter().any(is_container),
        Value::Map(map) => map.values().any(is_container),
        _ => false,
    }
}

/// Move the children of `value` onto `pending` if `value` is their only owner.
fn take_children(value: &mut Value, pending: &mut Vec<Value>) {
    match value {
        Value::List(items) => {
            if let Some(items) = Heap::get_mut(items) {
                pending.append(items);
            }
        }
        Value::Map(map) => {
            if let Some(map) = Heap::get_mut(map) {
                pending.extend(std::mem::take(map).into_values());
            }
        }
        _ => {}
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    #[expect(
        clippy::cast_precision_loss,
        reason = "EXQL numbers are doubles; integers beyond 2^53 round like any other input"
    )]
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<usize> for Value {
    #[expect(
        clippy::cast_precision_loss,
        reason = "lengths and counts stay far below 2^53"
    )]
    fn from(n: usize) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::list(items)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        Value::map(entries)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::list(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests;
