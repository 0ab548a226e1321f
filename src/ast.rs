/// Represents a numeric literal in a parameter expression.
///
/// Integer syntax produces `Integer`; anything with a fraction or exponent
/// produces `Real`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(f64),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

/// An abstract syntax tree node for an arithmetic parameter expression.
///
/// By the time an expression reaches the arithmetic parser every function call
/// has been replaced by its result and every bound parameter by its value, so
/// the tree only has to model literals, leftover names, and the four basic
/// operators.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Literal {
        /// The constant value.
        value: LiteralValue,
    },
    /// A bare name. Names have no value in arithmetic context; evaluating one
    /// is an error that reports the name.
    Name {
        /// The name as written.
        name: String,
    },
    /// A unary operation.
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `-x`
    Negate,
    /// `+x`
    Plus,
}

/// Binary operators, all left-associative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}
