//! Binary, unary and assignment operators.

use crate::token::Operator;

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    FloorDiv,
    Mod,
    Pow,

    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Logical
    And,
    Or,
}

impl BinaryOp {
    /// Source-level symbol, used in error messages.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::FloorDiv => "//",
            Self::Mod => "%",
            Self::Pow => "**",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::And => "and",
            Self::Or => "or",
        }
    }

    pub const fn is_comparison(self) -> bool {
        matches!(
            self,
            Self::Eq | Self::NotEq | Self::Lt | Self::LtEq | Self::Gt | Self::GtEq
        )
    }

    /// Map a comparison operator token.
    pub const fn comparison_from(op: Operator) -> Option<BinaryOp> {
        match op {
            Operator::EqEq => Some(Self::Eq),
            Operator::NotEq => Some(Self::NotEq),
            Operator::Lt => Some(Self::Lt),
            Operator::LtEq => Some(Self::LtEq),
            Operator::Gt => Some(Self::Gt),
            Operator::GtEq => Some(Self::GtEq),
            _ => None,
        }
    }

    /// Map an additive operator token.
    pub const fn additive_from(op: Operator) -> Option<BinaryOp> {
        match op {
            Operator::Plus => Some(Self::Add),
            Operator::Minus => Some(Self::Sub),
            _ => None,
        }
    }

    /// Map a multiplicative operator token.
    pub const fn multiplicative_from(op: Operator) -> Option<BinaryOp> {
        match op {
            Operator::Star => Some(Self::Mul),
            Operator::Slash => Some(Self::Div),
            Operator::DoubleSlash => Some(Self::FloorDiv),
            Operator::Percent => Some(Self::Mod),
            _ => None,
        }
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// Arithmetic negation: `-x`
    Neg,
    /// Logical not: `not x`
    Not,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Not => "not",
        }
    }
}

/// Assignment operators. Compound forms read the target before writing it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AssignOp {
    Assign,
    Add,
    Sub,
    Mul,
    Div,
}

impl AssignOp {
    pub const fn from_operator(op: Operator) -> Option<AssignOp> {
        match op {
            Operator::Assign => Some(Self::Assign),
            Operator::PlusAssign => Some(Self::Add),
            Operator::MinusAssign => Some(Self::Sub),
            Operator::StarAssign => Some(Self::Mul),
            Operator::SlashAssign => Some(Self::Div),
            _ => None,
        }
    }

    /// The binary operator a compound assignment applies, `None` for `=`.
    pub const fn binary_op(self) -> Option<BinaryOp> {
        match self {
            Self::Assign => None,
            Self::Add => Some(BinaryOp::Add),
            Self::Sub => Some(BinaryOp::Sub),
            Self::Mul => Some(BinaryOp::Mul),
            Self::Div => Some(BinaryOp::Div),
        }
    }
}
