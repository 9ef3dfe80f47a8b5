//! Name resolution interface used by the evaluator.

use std::fmt;
use std::sync::Arc;

use crate::{EvalResult, Value};

/// Resolves variables and functions by name.
///
/// The evaluator only reads through this trait. Implementations may
/// support writes of their own, but a context must not change while an
/// evaluation against it is running.
pub trait Context: Send + Sync {
    /// Value bound to `name`, or [`Value::Null`] if there is none.
    fn lookup_variable(&self, name: &str) -> Value;

    /// Function bound to `name`, if any.
    fn lookup_function(&self, name: &str) -> Option<Function>;
}

impl<C: Context + ?Sized> Context for Arc<C> {
    fn lookup_variable(&self, name: &str) -> Value {
        (**self).lookup_variable(name)
    }

    fn lookup_function(&self, name: &str) -> Option<Function> {
        (**self).lookup_function(name)
    }
}

type NativeFn = dyn Fn(&[Value]) -> EvalResult + Send + Sync;

/// A host-supplied callable.
///
/// Takes its arguments in order and returns a value or an error. Arity
/// and argument types are checked by the function itself.
#[derive(Clone)]
pub struct Function(Arc<NativeFn>);

impl Function {
    pub fn new(f: impl Fn(&[Value]) -> EvalResult + Send + Sync + 'static) -> Self {
        Function(Arc::new(f))
    }

    #[inline]
    pub fn call(&self, args: &[Value]) -> EvalResult {
        (self.0)(args)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<function>")
    }
}
