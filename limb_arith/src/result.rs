//! Result pairs returned by the carry and borrow engines.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Truncated sum of `a + b + carry_in` together with its carry-out.
///
/// `carry` is `0` or `1` whenever the incoming carry was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SumCarry<T> {
    /// The sum, wrapped at the limb width.
    pub sum: T,
    /// The carry-out to feed into the next limb.
    pub carry: T,
}

impl<T> SumCarry<T> {
    /// Creates a new [`SumCarry`].
    #[inline]
    pub const fn new(sum: T, carry: T) -> Self {
        Self { sum, carry }
    }

    /// Returns `(sum, carry)`.
    #[inline]
    pub fn into_tuple(self) -> (T, T) {
        (self.sum, self.carry)
    }
}

impl<T> From<SumCarry<T>> for (T, T) {
    #[inline]
    fn from(value: SumCarry<T>) -> Self {
        value.into_tuple()
    }
}

/// Truncated difference of `a - b - borrow_in` together with its borrow-out.
///
/// `borrow` is `0` or `1` whenever the incoming borrow was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiffBorrow<T> {
    /// The difference, wrapped at the limb width.
    pub diff: T,
    /// The borrow-out to feed into the next limb.
    pub borrow: T,
}

impl<T> DiffBorrow<T> {
    /// Creates a new [`DiffBorrow`].
    #[inline]
    pub const fn new(diff: T, borrow: T) -> Self {
        Self { diff, borrow }
    }

    /// Returns `(diff, borrow)`.
    #[inline]
    pub fn into_tuple(self) -> (T, T) {
        (self.diff, self.borrow)
    }
}

impl<T> From<DiffBorrow<T>> for (T, T) {
    #[inline]
    fn from(value: DiffBorrow<T>) -> Self {
        value.into_tuple()
    }
}
