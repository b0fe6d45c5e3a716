//! Overflow-checked decimal arithmetic.
//!
//! `Decimal`'s operators panic when a result leaves the representable range.
//! Figures derived from request input go through these helpers instead, so
//! an oversized amount surfaces as [`EngineError::ArithmeticOverflow`].

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

pub(crate) fn add(lhs: Decimal, rhs: Decimal, quantity: &str) -> EngineResult<Decimal> {
    lhs.checked_add(rhs).ok_or_else(|| EngineError::overflow(quantity))
}

pub(crate) fn sub(lhs: Decimal, rhs: Decimal, quantity: &str) -> EngineResult<Decimal> {
    lhs.checked_sub(rhs).ok_or_else(|| EngineError::overflow(quantity))
}

pub(crate) fn mul(lhs: Decimal, rhs: Decimal, quantity: &str) -> EngineResult<Decimal> {
    lhs.checked_mul(rhs).ok_or_else(|| EngineError::overflow(quantity))
}

/// Callers guarantee a non-zero divisor; `None` from `checked_div` is then
/// always an overflow.
pub(crate) fn div(lhs: Decimal, rhs: Decimal, quantity: &str) -> EngineResult<Decimal> {
    lhs.checked_div(rhs).ok_or_else(|| EngineError::overflow(quantity))
}
