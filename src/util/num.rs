use crate::error::EvaluationError;

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_U64_INT` in absolute
/// value.
///
/// ## Parameters
/// - `value`: The integer to convert.
/// - `error`: The error to return if conversion is not lossless.
///
/// ## Example
/// ```
/// use lsystem::util::num::{MAX_SAFE_U64_INT, i64_to_f64_checked};
///
/// let result = i64_to_f64_checked(42, "too big!");
/// assert_eq!(result.unwrap(), 42.0);
///
/// let big = MAX_SAFE_U64_INT as i64 + 1;
/// assert!(i64_to_f64_checked(big, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_U64_INT {
        return Err(error);
    }
    Ok(value as f64)
}

/// Safely converts an `f64` to `i64` if the value is finite, within range, and
/// not fractional.
///
/// ## Errors
/// Returns `EvaluationError::InvalidArgument` for non-finite, out-of-range, or
/// fractional values.
///
/// ## Example
/// ```
/// use lsystem::{error::EvaluationError, util::num::f64_to_i64_checked};
///
/// assert_eq!(f64_to_i64_checked(1000.0).unwrap(), 1000);
///
/// let err = f64_to_i64_checked(1.5).unwrap_err();
/// assert!(matches!(err, EvaluationError::InvalidArgument { .. }));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_checked(value: f64) -> Result<i64, EvaluationError> {
    if !value.is_finite() {
        return Err(EvaluationError::InvalidArgument { details: format!("cannot convert non-finite value {value} to an integer") });
    }
    if value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return Err(EvaluationError::InvalidArgument { details: format!("{value} is out of integer range") });
    }
    if value.fract() != 0.0 {
        return Err(EvaluationError::InvalidArgument { details: format!("{value} is fractional where an integer is required") });
    }
    Ok(value as i64)
}
