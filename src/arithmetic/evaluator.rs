use crate::{
    ast::{BinaryOperator, Expr, LiteralValue, UnaryOperator},
    error::EvaluationError,
    util::num::i64_to_f64_checked,
    value::Value,
};

pub type EvalResult<T> = Result<T, EvaluationError>;

/// Evaluates an arithmetic expression tree.
///
/// # Parameters
/// - `expr`: The parsed expression.
/// - `source`: The original text, used in error messages.
///
/// # Returns
/// `Value::Integer` or `Value::Real`; never `Value::Text`.
///
/// # Example
/// ```
/// use lsystem::{
///     ast::{BinaryOperator, Expr},
///     arithmetic::evaluator::eval,
///     value::Value,
/// };
///
/// let expr = Expr::BinaryOp { left:  Box::new(Expr::Literal { value: 7.into() }),
///                             op:    BinaryOperator::Div,
///                             right: Box::new(Expr::Literal { value: 2.into() }), };
/// assert_eq!(eval(&expr, "7/2").unwrap(), Value::from(3.5));
/// ```
pub fn eval(expr: &Expr, source: &str) -> EvalResult<Value> {
    match expr {
        Expr::Literal { value } => Ok(match value {
                                          LiteralValue::Integer(n) => Value::Integer(*n),
                                          LiteralValue::Real(r) => Value::from(*r),
                                      }),
        Expr::Name { name } => {
            Err(EvaluationError::NonNumericLiteral { literal:    name.clone(),
                                                     expression: source.to_string(), })
        },
        Expr::UnaryOp { op, expr } => {
            let value = eval(expr, source)?;
            eval_unary(*op, &value, source)
        },
        Expr::BinaryOp { left, op, right } => {
            let left = eval(left, source)?;
            let right = eval(right, source)?;
            eval_scalar_op(*op, &left, &right, source)
        },
    }
}

fn eval_unary(op: UnaryOperator, value: &Value, source: &str) -> EvalResult<Value> {
    match (op, value) {
        (UnaryOperator::Plus, _) => Ok(value.clone()),
        (UnaryOperator::Negate, Value::Integer(n)) => {
            n.checked_neg()
             .map(Value::Integer)
             .ok_or_else(|| EvaluationError::Overflow { expression: source.to_string() })
        },
        (UnaryOperator::Negate, Value::Real(r)) => Ok(Value::from(-r.into_inner())),
        (UnaryOperator::Negate, Value::Text(t)) => {
            Err(EvaluationError::NonNumericLiteral { literal:    t.clone(),
                                                     expression: source.to_string(), })
        },
    }
}

/// Evaluates a scalar arithmetic operation.
///
/// Two integers stay integral under `+`, `-` and `*` (with overflow checks);
/// `/` produces an integer only when the division is exact. If either operand
/// is real, both are promoted to reals. Division by zero is checked explicitly
/// for both numeric categories.
///
/// # Example
/// ```
/// use lsystem::{ast::BinaryOperator, arithmetic::evaluator::eval_scalar_op, value::Value};
///
/// let result = eval_scalar_op(BinaryOperator::Div,
///                             &Value::Integer(8),
///                             &Value::Integer(2),
///                             "8/2").unwrap();
/// assert_eq!(result, Value::Integer(4));
/// ```
pub fn eval_scalar_op(op: BinaryOperator,
                      left: &Value,
                      right: &Value,
                      source: &str)
                      -> EvalResult<Value> {
    use BinaryOperator::{Add, Div, Mul, Sub};

    let overflow = || EvaluationError::Overflow { expression: source.to_string() };

    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => {
            let (l, r) = (*l, *r);
            match op {
                Add => l.checked_add(r).map(Value::Integer).ok_or_else(overflow),
                Sub => l.checked_sub(r).map(Value::Integer).ok_or_else(overflow),
                Mul => l.checked_mul(r).map(Value::Integer).ok_or_else(overflow),
                Div => {
                    if r == 0 {
                        return Err(EvaluationError::DivisionByZero { expression:
                                                                         source.to_string() });
                    }
                    if l.checked_rem(r).ok_or_else(overflow)? == 0 {
                        return l.checked_div(r).map(Value::Integer).ok_or_else(overflow);
                    }
                    let l = i64_to_f64_checked(l, overflow())?;
                    let r = i64_to_f64_checked(r, overflow())?;
                    finite(l / r, source)
                },
            }
        },
        (Value::Text(t), _) | (_, Value::Text(t)) => {
            Err(EvaluationError::NonNumericLiteral { literal:    t.clone(),
                                                     expression: source.to_string(), })
        },
        _ => {
            let l = promote(left, source)?;
            let r = promote(right, source)?;
            match op {
                Add => finite(l + r, source),
                Sub => finite(l - r, source),
                Mul => finite(l * r, source),
                Div => {
                    if r == 0.0 {
                        return Err(EvaluationError::DivisionByZero { expression:
                                                                         source.to_string() });
                    }
                    finite(l / r, source)
                },
            }
        },
    }
}

fn promote(value: &Value, source: &str) -> EvalResult<f64> {
    match value {
        Value::Integer(n) => {
            i64_to_f64_checked(*n, EvaluationError::Overflow { expression: source.to_string() })
        },
        Value::Real(r) => Ok(r.into_inner()),
        Value::Text(t) => Err(EvaluationError::NonNumericLiteral { literal:    t.clone(),
                                                                   expression: source.to_string(), }),
    }
}

fn finite(value: f64, source: &str) -> EvalResult<Value> {
    if value.is_finite() {
        Ok(Value::from(value))
    } else {
        Err(EvaluationError::NotFinite { expression: source.to_string() })
    }
}
