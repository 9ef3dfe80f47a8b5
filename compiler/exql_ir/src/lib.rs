//! EXQL IR - Expression Representation Types
//!
//! This crate contains the data structures shared by every phase of the
//! expression pipeline:
//! - Spans for source locations
//! - Binary and unary operators
//! - Expression nodes stored in a flat arena (`ExprArena`)
//! - `Ast`, the immutable result of parsing one expression
//!
//! # Design
//!
//! - **Flatten Everything**: No `Box<Expr>`, children are `ExprId(u32)` indices
//! - **Immutable After Parse**: an `Ast` is never mutated by evaluation, so one
//!   tree can be evaluated against many contexts in sequence or in parallel
//!
//! Number literals store their float as `u64` bits so that every node type
//! can derive `Eq` and `Hash`.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
mod expr;
mod operators;
mod printer;
mod span;

pub use arena::{Ast, ExprArena};
pub use expr::{Expr, ExprId, ExprKind, ExprRange};
pub use operators::{BinaryOp, UnaryOp};
pub use span::{Span, SpanError};
