use std::fmt;

use ordered_float::OrderedFloat;

use crate::{
    error::EvaluationError,
    util::num::{f64_to_i64_checked, i64_to_f64_checked},
};

/// Represents a literal value exchanged between the engine and the
/// interpreter's capabilities.
///
/// Grammars carry every parameter as text. Arithmetic produces `Integer` or
/// `Real` values, and capabilities receive and return values of this type
/// after their arguments have been coerced to the declared parameter kinds.
/// Reals are wrapped in [`OrderedFloat`] so that values, and call traces built
/// from them, can be compared and hashed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Value {
    /// A 64 bit integer.
    Integer(i64),
    /// A double precision floating-point number.
    Real(OrderedFloat<f64>),
    /// Uninterpreted text.
    Text(String),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(OrderedFloat(v))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl Value {
    /// Parses a numeric literal.
    ///
    /// Integer syntax is tried first so that `"3"` stays an integer, then
    /// decimal syntax (`"2.5"`, `"-1e3"`). Surrounding whitespace is ignored.
    /// Returns `None` if the text is not a finite number.
    ///
    /// # Example
    /// ```
    /// use lsystem::value::Value;
    ///
    /// assert_eq!(Value::parse_number(" 3 "), Some(Value::Integer(3)));
    /// assert_eq!(Value::parse_number("2.5"), Some(Value::from(2.5)));
    /// assert_eq!(Value::parse_number("abc"), None);
    /// ```
    #[must_use]
    pub fn parse_number(text: &str) -> Option<Self> {
        let text = text.trim();
        if let Ok(n) = text.parse::<i64>() {
            return Some(Self::Integer(n));
        }
        match text.parse::<f64>() {
            Ok(r) if r.is_finite() => Some(Self::from(r)),
            _ => None,
        }
    }

    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// For integers, conversion fails if the value is too large to be
    /// represented as `f64` exactly.
    ///
    /// # Example
    /// ```
    /// use lsystem::value::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_real().unwrap(), 10.0);
    /// assert!(Value::from("ten").as_real().is_err());
    /// ```
    pub fn as_real(&self) -> Result<f64, EvaluationError> {
        match self {
            Self::Real(r) => Ok(r.into_inner()),
            Self::Integer(n) => i64_to_f64_checked(*n,
                                                   EvaluationError::InvalidArgument { details: format!("{n} cannot be represented exactly as a real") }),
            Self::Text(t) => Err(EvaluationError::InvalidArgument { details: format!("expected a number, found '{t}'") }),
        }
    }

    /// Converts the value to an `i64`.
    ///
    /// Reals are accepted when they hold a whole number.
    ///
    /// # Example
    /// ```
    /// use lsystem::value::Value;
    ///
    /// assert_eq!(Value::from(4.0).as_integer().unwrap(), 4);
    /// assert!(Value::from(4.5).as_integer().is_err());
    /// ```
    pub fn as_integer(&self) -> Result<i64, EvaluationError> {
        match self {
            Self::Integer(n) => Ok(*n),
            Self::Real(r) => f64_to_i64_checked(r.into_inner()),
            Self::Text(t) => Err(EvaluationError::InvalidArgument { details: format!("expected an integer, found '{t}'") }),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{}", r.into_inner()),
            Self::Text(t) => write!(f, "{t}"),
        }
    }
}
