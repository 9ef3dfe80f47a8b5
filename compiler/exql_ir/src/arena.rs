//! Expression arena and the parsed `Ast`.
//!
//! All nodes of one parsed expression live in a single contiguous
//! `Vec<Expr>`; list-shaped children live in a parallel `Vec<ExprId>`.

use crate::{Expr, ExprId, ExprRange};

/// Contiguous storage for the nodes of one expression.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    expr_lists: Vec<ExprId>,
}

/// Convert an arena length to a `u32` index.
///
/// # Panics
/// Panics if the arena holds more than `u32::MAX` entries.
#[inline]
fn to_u32(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("{what} arena exceeds u32::MAX entries"))
}

impl ExprArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an expression and return its ID.
    #[inline]
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(to_u32(self.exprs.len(), "expression"));
        self.exprs.push(expr);
        id
    }

    /// Store a list of expression IDs and return the range covering them.
    pub fn alloc_expr_list(&mut self, ids: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = to_u32(self.expr_lists.len(), "expression list");
        self.expr_lists.extend(ids);
        let end = to_u32(self.expr_lists.len(), "expression list");
        ExprRange::new(start, end - start)
    }

    /// Get an expression by ID.
    ///
    /// # Panics
    /// Panics if the ID was not allocated by this arena.
    #[inline]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// Get the expression IDs covered by a range.
    #[inline]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        let start = range.start as usize;
        &self.expr_lists[start..start + range.len()]
    }

    /// Number of expressions stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    /// Whether no expressions are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }
}

/// A parsed expression: its arena plus the root node.
///
/// Built once by the parser and never mutated afterwards. `Ast` is
/// `Send + Sync`, so the same tree may be evaluated from several
/// threads against distinct contexts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ast {
    arena: ExprArena,
    root: ExprId,
}

impl Ast {
    /// Wrap a finished arena and its root node.
    pub fn new(arena: ExprArena, root: ExprId) -> Self {
        Ast { arena, root }
    }

    /// The arena holding every node of this expression.
    #[inline]
    pub fn arena(&self) -> &ExprArena {
        &self.arena
    }

    /// The root node ID.
    #[inline]
    pub fn root(&self) -> ExprId {
        self.root
    }

    /// The root node.
    #[inline]
    pub fn root_expr(&self) -> &Expr {
        self.arena.get_expr(self.root)
    }
}
