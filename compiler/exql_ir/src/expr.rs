//! Expression nodes, IDs and ranges for the flat AST.
//!
//! Children are referenced by `ExprId(u32)` into an `ExprArena` instead
//! of `Box<Expr>`, and argument/element lists by `ExprRange` into the
//! arena's shared list storage.

use std::fmt;

use crate::{BinaryOp, Span, UnaryOp};

/// Index into the expression arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    /// Create a new `ExprId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}

/// Range of expressions in the arena's flattened list storage.
///
/// Used for call arguments and list literal elements.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ExprRange {
    pub start: u32,
    pub len: u32,
}

impl ExprRange {
    /// Create a new range.
    #[inline]
    pub const fn new(start: u32, len: u32) -> Self {
        ExprRange { start, len }
    }

    /// Check if the range is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the number of expressions.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }
}

/// Expression node kinds.
///
/// Every variant has exactly one evaluation rule; see `exql_eval`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    // Literals
    /// Number literal, stored as `f64::to_bits` for `Eq + Hash`.
    Number(u64),
    /// String literal (raw bytes between the quotes).
    Str(String),
    /// `true` / `false`
    Bool(bool),

    /// Variable reference.
    Ident(String),

    /// `left op right`
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
    /// `op operand`
    Unary { op: UnaryOp, operand: ExprId },

    /// `receiver.field`
    Field { receiver: ExprId, field: String },
    /// `receiver[index]`
    Index { receiver: ExprId, index: ExprId },

    /// `name(args)` or `namespace.name(args)`.
    Call {
        namespace: Option<ExprId>,
        name: String,
        args: ExprRange,
    },

    /// `[a, b, c]`
    List(ExprRange),

    /// Broadcast-index marker. No surface syntax produces it yet.
    Each,
}

impl ExprKind {
    /// Build a number literal node from a float.
    #[inline]
    pub fn number(value: f64) -> Self {
        ExprKind::Number(value.to_bits())
    }

    /// Read back the float of a number literal.
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ExprKind::Number(bits) => Some(f64::from_bits(*bits)),
            _ => None,
        }
    }
}

/// An expression node: kind plus source span.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}
