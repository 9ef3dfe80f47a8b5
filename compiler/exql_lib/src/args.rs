//! Argument checking shared by the library functions.

use std::collections::BTreeMap;

use exql_value::{arity_mismatch, wrong_arg_type, EvalError, Value};

/// Arguments of one call, tagged with the qualified function name for
/// error messages.
pub(crate) struct Args<'a> {
    function: &'static str,
    values: &'a [Value],
}

impl<'a> Args<'a> {
    /// Require exactly `arity` arguments.
    pub(crate) fn exact(
        function: &'static str,
        values: &'a [Value],
        arity: usize,
    ) -> Result<Self, EvalError> {
        Self::between(function, values, arity, arity)
    }

    /// Require between `min` and `max` arguments, inclusive.
    pub(crate) fn between(
        function: &'static str,
        values: &'a [Value],
        min: usize,
        max: usize,
    ) -> Result<Self, EvalError> {
        if values.len() < min {
            return Err(arity_mismatch(function, min, values.len()));
        }
        if values.len() > max {
            return Err(arity_mismatch(function, max, values.len()));
        }
        Ok(Args { function, values })
    }

    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    pub(crate) fn value(&self, position: usize) -> &'a Value {
        &self.values[position]
    }

    pub(crate) fn string(&self, position: usize) -> Result<&'a str, EvalError> {
        let value = self.value(position);
        value
            .as_str()
            .ok_or_else(|| wrong_arg_type(self.function, position, "string", value))
    }

    /// Strict numeric reading: numeric strings are accepted, anything
    /// else that is not a number is an error.
    pub(crate) fn number(&self, position: usize) -> Result<f64, EvalError> {
        let value = self.value(position);
        match value {
            Value::List(_) | Value::Map(_) | Value::Namespace(_) | Value::Each => {
                Err(wrong_arg_type(self.function, position, "number", value))
            }
            _ => value.to_number(),
        }
    }

    /// A number that must be a non-negative integer, such as a count or offset.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(crate) fn count(&self, position: usize) -> Result<usize, EvalError> {
        let n = self.number(position)?;
        if n.is_finite() && n >= 0.0 {
            Ok(n.trunc() as usize)
        } else {
            Err(wrong_arg_type(
                self.function,
                position,
                "non-negative number",
                self.value(position),
            ))
        }
    }

    pub(crate) fn list(&self, position: usize) -> Result<&'a [Value], EvalError> {
        let value = self.value(position);
        value
            .as_list()
            .ok_or_else(|| wrong_arg_type(self.function, position, "list", value))
    }

    pub(crate) fn map(&self, position: usize) -> Result<&'a BTreeMap<String, Value>, EvalError> {
        let value = self.value(position);
        value
            .as_map()
            .ok_or_else(|| wrong_arg_type(self.function, position, "map", value))
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'a, Value> {
        self.values.iter()
    }
}

/// Text of a value as a user would write it: strings without quotes,
/// everything else in canonical display form.
pub(crate) fn plain_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.as_str().to_owned(),
        other => other.to_string(),
    }
}
