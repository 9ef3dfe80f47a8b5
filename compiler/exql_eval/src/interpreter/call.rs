//! Function call evaluation.

use exql_ir::{ExprId, ExprRange};
use exql_value::{unexpected_identifier, EvalResult, Value};
use smallvec::SmallVec;
use tracing::debug;

use super::Evaluator;

impl Evaluator<'_> {
    /// Evaluate `name(args)` or `namespace.name(args)`.
    ///
    /// A name that resolves to no function evaluates to `false` without
    /// evaluating the arguments.
    #[tracing::instrument(level = "debug", skip_all, fields(function = name))]
    pub(super) fn eval_call(
        &self,
        namespace: Option<ExprId>,
        name: &str,
        args: ExprRange,
    ) -> EvalResult {
        let function = match namespace {
            None => self.context.lookup_function(name),
            Some(ns) => {
                let receiver = self.eval(ns)?;
                let Some(context) = receiver.as_namespace() else {
                    return Err(unexpected_identifier(name, &receiver));
                };
                debug!("resolving in namespace");
                context.lookup_function(name)
            }
        };

        let Some(function) = function else {
            debug!("function not found, evaluating to false");
            return Ok(Value::Bool(false));
        };

        let args = self
            .arena
            .get_expr_list(args)
            .iter()
            .map(|arg| self.eval(*arg))
            .collect::<Result<SmallVec<[Value; 4]>, _>>()?;
        function.call(&args)
    }
}
