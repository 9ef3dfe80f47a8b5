//! The default context: two string-keyed tables.
//!
//! Namespaces are ordinary variables whose value is a
//! [`Value::Namespace`], so `string.upper(x)` looks up the variable
//! `string` and then the function `upper` inside it.

use std::fmt;

use exql_value::{Context, EvalResult, Function, Value};
use rustc_hash::FxHashMap;

/// String-keyed variables and functions.
///
/// Writes take `&mut self`; a shared environment is read-only, which is
/// all the evaluator needs.
#[derive(Clone, Default)]
pub struct Environment {
    variables: FxHashMap<String, Value>,
    functions: FxHashMap<String, Function>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> EnvironmentBuilder {
        EnvironmentBuilder::new()
    }

    /// Bind `name` to `value`, replacing any previous binding.
    pub fn set_variable(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.variables.insert(name.into(), value.into());
    }

    /// Bind `name` to `function`, replacing any previous binding.
    pub fn set_function(&mut self, name: impl Into<String>, function: Function) {
        self.functions.insert(name.into(), function);
    }

    /// Remove a variable binding, returning its value.
    pub fn remove_variable(&mut self, name: &str) -> Option<Value> {
        self.variables.remove(name)
    }

    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Names of the bound functions, sorted.
    pub fn function_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Context for Environment {
    fn lookup_variable(&self, name: &str) -> Value {
        self.variables.get(name).cloned().unwrap_or(Value::Null)
    }

    fn lookup_function(&self, name: &str) -> Option<Function> {
        self.functions.get(name).cloned()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut variables: Vec<_> = self.variables.keys().collect();
        variables.sort_unstable();
        f.debug_struct("Environment")
            .field("variables", &variables)
            .field("functions", &self.function_names())
            .finish()
    }
}

/// Builder for an [`Environment`].
///
/// ```text
/// let env = Environment::builder()
///     .with_variable("x", 10)
///     .with_function("add", |args| ...)
///     .with_namespace("string", string_namespace())
///     .build();
/// ```
#[derive(Default)]
#[must_use]
pub struct EnvironmentBuilder {
    env: Environment,
}

impl EnvironmentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.env.set_variable(name, value);
        self
    }

    pub fn with_variables<K, V>(mut self, variables: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        for (name, value) in variables {
            self.env.set_variable(name, value);
        }
        self
    }

    pub fn with_function(
        mut self,
        name: impl Into<String>,
        f: impl Fn(&[Value]) -> EvalResult + Send + Sync + 'static,
    ) -> Self {
        self.env.set_function(name, Function::new(f));
        self
    }

    pub fn with_functions<K: Into<String>>(
        mut self,
        functions: impl IntoIterator<Item = (K, Function)>,
    ) -> Self {
        for (name, function) in functions {
            self.env.set_function(name, function);
        }
        self
    }

    /// Bind `name` to a namespace value wrapping `context`.
    pub fn with_namespace(self, name: impl Into<String>, context: impl Context + 'static) -> Self {
        self.with_variable(name, Value::namespace(context))
    }

    pub fn build(self) -> Environment {
        self.env
    }
}

#[cfg(test)]
mod tests;
