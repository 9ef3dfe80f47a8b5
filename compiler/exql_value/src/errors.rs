//! Runtime error types.
//!
//! `EvalErrorKind` carries structured data for each failure. The factory
//! functions below are the public way to build errors; host functions
//! with nothing more specific to say use [`EvalError::new`].

use thiserror::Error;

use crate::Value;

/// Result of evaluating an expression or calling a function.
pub type EvalResult = Result<Value, EvalError>;

/// Typed runtime error category.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    // Coercion
    #[error("cannot convert {value} to {target}")]
    Coercion { value: String, target: &'static str },

    // Access
    #[error("index out of range: {index} (length {len})")]
    IndexOutOfRange { index: i64, len: usize },
    /// A number that names no position at all: NaN, infinite, or beyond `i64`.
    #[error("invalid list index: {index}")]
    InvalidIndex { index: String },
    #[error("unsupported index type: cannot index {container} with {index}")]
    UnsupportedIndexType {
        container: &'static str,
        index: &'static str,
    },
    #[error("cannot index into {type_name}")]
    CannotIndex { type_name: &'static str },

    // Dispatch
    #[error("unexpected identifier: `{function}` called on {type_name}, expected a namespace")]
    UnexpectedIdentifier {
        function: String,
        type_name: &'static str,
    },

    // Operators
    #[error("operator not supported: `{op}` on {type_name}")]
    OperatorNotSupported {
        op: &'static str,
        type_name: &'static str,
    },

    // Function arguments
    #[error("{function} expects {expected} argument(s), got {got}")]
    ArityMismatch {
        function: String,
        expected: usize,
        got: usize,
    },
    #[error("{function}: argument {position} must be {expected}, got {got}")]
    WrongArgType {
        function: String,
        position: usize,
        expected: &'static str,
        got: &'static str,
    },

    /// Anything a host function reports without a structured kind.
    #[error("{message}")]
    Custom { message: String },
}

/// Evaluation error. Carries a message only; there is no call stack.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
}

impl EvalError {
    /// Create an error with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self::from_kind(EvalErrorKind::Custom {
            message: message.into(),
        })
    }

    fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError { kind }
    }

    /// Human-readable message.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// A value that cannot be converted to `target`.
#[cold]
pub fn coercion_failed(value: &Value, target: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Coercion {
        value: value.to_string(),
        target,
    })
}

/// List index outside `[0, len)`.
#[cold]
pub fn index_out_of_range(index: i64, len: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexOutOfRange { index, len })
}

/// Numeric index that is not a representable position.
#[cold]
pub fn invalid_index(index: f64) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidIndex {
        index: index.to_string(),
    })
}

/// Index value of a type the container does not accept.
#[cold]
pub fn unsupported_index_type(container: &Value, index: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnsupportedIndexType {
        container: container.type_name(),
        index: index.type_name(),
    })
}

/// Indexing a value that is neither a list nor a map.
#[cold]
pub fn cannot_index(receiver: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::CannotIndex {
        type_name: receiver.type_name(),
    })
}

/// Qualified call whose receiver is not a namespace.
#[cold]
pub fn unexpected_identifier(function: &str, receiver: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnexpectedIdentifier {
        function: function.to_string(),
        type_name: receiver.type_name(),
    })
}

/// Operator applied to an operand type it has no rule for.
#[cold]
pub fn operator_not_supported(op: &'static str, operand: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::OperatorNotSupported {
        op,
        type_name: operand.type_name(),
    })
}

/// Wrong number of arguments.
#[cold]
pub fn arity_mismatch(function: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        function: function.to_string(),
        expected,
        got,
    })
}

/// Argument of the wrong type. `position` is zero-based.
#[cold]
pub fn wrong_arg_type(
    function: &str,
    position: usize,
    expected: &'static str,
    got: &Value,
) -> EvalError {
    EvalError::from_kind(EvalErrorKind::WrongArgType {
        function: function.to_string(),
        position,
        expected,
        got: got.type_name(),
    })
}

#[cfg(test)]
mod tests;
