use crate::{
    error::{Error, EvaluationError},
    value::Value,
};

/// The lexer turns an arithmetic parameter expression into tokens.
///
/// It recognizes decimal literals, the four basic operators, parentheses and
/// bare names, and inserts the implicit multiplication between a number and an
/// opening parenthesis.
pub mod lexer;
/// The parser builds an expression tree from the token stream.
///
/// It is a recursive-descent parser with the usual precedence: `*` and `/`
/// bind tighter than `+` and `-`, and unary signs bind tightest.
pub mod parser;
/// The evaluator computes a value from an expression tree.
///
/// Integer arithmetic is checked for overflow; mixed operands are promoted to
/// reals; division by zero is reported rather than producing infinities.
pub mod evaluator;

/// Computes a pure arithmetic expression.
///
/// This is the entry point used once every function call in a parameter
/// expression has been replaced by its result.
///
/// # Errors
/// Returns a `ParseError` for malformed syntax and an `EvaluationError` for
/// names in arithmetic context, division by zero, overflow, or non-finite
/// results.
///
/// # Example
/// ```
/// use lsystem::{arithmetic::compute, value::Value};
///
/// assert_eq!(compute("2(3+4)").unwrap(), Value::Integer(14));
/// assert_eq!(compute("1 / 4").unwrap(), Value::from(0.25));
/// assert!(compute("1 / 0").is_err());
/// ```
pub fn compute(source: &str) -> Result<Value, Error> {
    let tokens = lexer::lex(source)?;
    let expr = parser::parse(&tokens, source)?;
    let value = evaluator::eval(&expr, source)?;

    if let Value::Real(r) = &value
       && !r.into_inner().is_finite()
    {
        return Err(EvaluationError::NotFinite { expression: source.to_string() }.into());
    }

    Ok(value)
}
