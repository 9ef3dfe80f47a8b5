//! Binary and Unary Operators
//!
//! All operator types used in expressions.
//!
//! Precedence, lowest to highest:
//! `or` < `and` < `in`/`not in` < `==`/`!=` < `<` `<=` `>` `>=` < `+` `-`
//! < `*` `/` < unary `not`/`-` < postfix `.` and `[`.

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Logical
    And,
    Or,

    // Equality (`=` and `==` both parse to `Eq`)
    Eq,
    NotEq,

    // Relational
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Membership
    In,
    NotIn,

    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// Returns the canonical source-level symbol for this operator.
    ///
    /// Used in error messages and by the canonical printer.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::In => "in",
            Self::NotIn => "not in",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// Logical negation: `not x`
    Not,
    /// Arithmetic negation: `-x`
    Neg,
}

impl UnaryOp {
    /// Returns the canonical source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Not => "not",
            Self::Neg => "-",
        }
    }
}
