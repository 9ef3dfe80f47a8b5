//! Canonical printer.
//!
//! Renders an `Ast` back to source with every binary and unary operation
//! parenthesised, so the output re-parses to a tree with the same shape
//! regardless of precedence rules.

use std::fmt::{self, Write};

use exql_stack::ensure_sufficient_stack;

use crate::{Ast, ExprArena, ExprId, ExprKind, ExprRange};

impl Ast {
    /// Render this expression in canonical source form.
    pub fn to_source(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_expr(f, self.arena(), self.root())
    }
}

fn write_expr<W: Write>(out: &mut W, arena: &ExprArena, id: ExprId) -> fmt::Result {
    ensure_sufficient_stack(|| write_expr_inner(out, arena, id))
}

fn write_expr_inner<W: Write>(out: &mut W, arena: &ExprArena, id: ExprId) -> fmt::Result {
    match &arena.get_expr(id).kind {
        ExprKind::Number(bits) => write!(out, "{}", f64::from_bits(*bits)),
        ExprKind::Str(s) => write_string(out, s),
        ExprKind::Bool(b) => write!(out, "{b}"),
        ExprKind::Ident(name) => out.write_str(name),
        ExprKind::Binary { op, left, right } => {
            out.write_char('(')?;
            write_expr(out, arena, *left)?;
            write!(out, " {} ", op.as_symbol())?;
            write_expr(out, arena, *right)?;
            out.write_char(')')
        }
        ExprKind::Unary { op, operand } => {
            out.write_char('(')?;
            out.write_str(op.as_symbol())?;
            if matches!(op, crate::UnaryOp::Not) {
                out.write_char(' ')?;
            }
            write_expr(out, arena, *operand)?;
            out.write_char(')')
        }
        ExprKind::Field { receiver, field } => {
            write_expr(out, arena, *receiver)?;
            write!(out, ".{field}")
        }
        ExprKind::Index { receiver, index } => {
            write_expr(out, arena, *receiver)?;
            out.write_char('[')?;
            write_expr(out, arena, *index)?;
            out.write_char(']')
        }
        ExprKind::Call {
            namespace,
            name,
            args,
        } => {
            if let Some(ns) = namespace {
                write_expr(out, arena, *ns)?;
                out.write_char('.')?;
            }
            out.write_str(name)?;
            out.write_char('(')?;
            write_list(out, arena, *args)?;
            out.write_char(')')
        }
        ExprKind::List(items) => {
            out.write_char('[')?;
            write_list(out, arena, *items)?;
            out.write_char(']')
        }
        // Reserved: the grammar has no spelling for Each yet.
        ExprKind::Each => out.write_char('?'),
    }
}

fn write_list<W: Write>(out: &mut W, arena: &ExprArena, range: ExprRange) -> fmt::Result {
    for (i, item) in arena.get_expr_list(range).iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        write_expr(out, arena, *item)?;
    }
    Ok(())
}

/// String literals have no escapes, so pick the quote the body does not use.
fn write_string<W: Write>(out: &mut W, s: &str) -> fmt::Result {
    if s.contains('\'') {
        write!(out, "\"{s}\"")
    } else {
        write!(out, "'{s}'")
    }
}
