//! This module defines the errors returned by the checked
//! and slice-level entry points.
//!
//! The primitive engines themselves are total and never fail.

use thiserror::Error;

use crate::width::{Limb, Width};

/// Errors that may occur.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimbError {
    /// A carry or borrow input was neither `0` nor `1`.
    #[error("carry/borrow flag must be 0 or 1, got {flag} for a {width} limb")]
    InvalidFlag {
        /// The rejected flag value.
        flag: u128,
        /// The width of the limb it was passed with.
        width: Width,
    },
    /// Two limb slices that must line up have different lengths.
    #[error("limb slices differ in length: {lhs} != {rhs}")]
    LengthMismatch {
        /// Length of the left operand.
        lhs: usize,
        /// Length of the right operand.
        rhs: usize,
    },
}

/// Returns `flag` unchanged if it is `0` or `1`.
#[inline]
pub(crate) fn ensure_flag<T: Limb>(flag: T) -> Result<T, LimbError> {
    if flag.is_flag() {
        Ok(flag)
    } else {
        Err(LimbError::InvalidFlag {
            flag: flag.to_u128().unwrap_or(u128::MAX),
            width: T::WIDTH,
        })
    }
}
