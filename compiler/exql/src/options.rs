//! Construction options for the default context.

use exql_eval::Environment;
use exql_value::{EvalResult, Function, Value};

/// Options for building an [`Environment`].
///
/// Built-in namespaces are bound first, so a host variable of the same
/// name (say `string`) shadows the library.
#[derive(Default)]
#[must_use]
pub struct Options {
    builtins: bool,
    variables: Vec<(String, Value)>,
    functions: Vec<(String, Function)>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the built-in library namespaces (`string`, `json`, `crypt`, ...).
    pub fn with_builtins(mut self) -> Self {
        self.builtins = true;
        self
    }

    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.variables.push((name.into(), value.into()));
        self
    }

    pub fn with_variables<K, V>(mut self, variables: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.variables
            .extend(variables.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn with_function(
        mut self,
        name: impl Into<String>,
        f: impl Fn(&[Value]) -> EvalResult + Send + Sync + 'static,
    ) -> Self {
        self.functions.push((name.into(), Function::new(f)));
        self
    }

    pub fn with_functions<K: Into<String>>(
        mut self,
        functions: impl IntoIterator<Item = (K, Function)>,
    ) -> Self {
        self.functions
            .extend(functions.into_iter().map(|(k, f)| (k.into(), f)));
        self
    }

    pub fn build(self) -> Environment {
        let mut builder = Environment::builder();
        if self.builtins {
            builder = exql_lib::install(builder);
        }
        builder
            .with_variables(self.variables)
            .with_functions(self.functions)
            .build()
    }
}
