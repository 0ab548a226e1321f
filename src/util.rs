/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without risking silent data loss or rounding errors.
/// Arithmetic promotes integers to reals and capabilities that take whole
/// numbers demote reals back to integers; both directions go through here.
pub mod num;
