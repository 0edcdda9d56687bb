//! Field-level validation rules.
//!
//! Each rule is a pure function: it either returns the normalized value or
//! an `InvalidParameter` error naming the offending field, without touching
//! any builder state.

use crate::error::{Error, Result};

use super::types::Span;

/// Integer fields that must not be negative (prices, bed counts).
pub(crate) fn non_negative(field: &'static str, value: i64) -> Result<i64> {
    if value < 0 {
        return Err(Error::invalid(
            field,
            format!("must be non-negative, got {value}"),
        ));
    }
    Ok(value)
}

/// Normalizes a range-or-scalar input into ordered `(lower, upper)` bounds.
///
/// A scalar collapses to equal bounds. Both bounds must be non-negative and
/// the lower must not exceed the upper.
pub(crate) fn bounds(field: &'static str, span: Span) -> Result<(i64, i64)> {
    let (lower, upper) = match span {
        Span::Single(value) => (value, value),
        Span::Range(lower, upper) => (lower, upper),
    };
    let lower = non_negative(field, lower)?;
    let upper = non_negative(field, upper)?;
    if lower > upper {
        return Err(Error::invalid(
            field,
            format!("lower bound {lower} exceeds upper bound {upper}"),
        ));
    }
    Ok((lower, upper))
}
