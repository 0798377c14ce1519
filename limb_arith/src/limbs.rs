//! Carry and borrow chains over little-endian limb slices.
//!
//! Index `0` holds the least significant limb. The slices are owned by the
//! caller; these helpers only walk them, feeding each limb's flag into the next.

use crate::error::{ensure_flag, LimbError};
use crate::result::{DiffBorrow, SumCarry};
use crate::width::Limb;

#[inline]
fn ensure_same_len<T>(lhs: &[T], rhs: &[T]) -> Result<(), LimbError> {
    if lhs.len() == rhs.len() {
        Ok(())
    } else {
        Err(LimbError::LengthMismatch {
            lhs: lhs.len(),
            rhs: rhs.len(),
        })
    }
}

/// Computes `lhs += rhs + carry_in` limb by limb and returns the final carry-out.
///
/// An empty pair of slices returns `carry_in` unchanged.
pub fn add_limbs<T: Limb>(lhs: &mut [T], rhs: &[T], carry_in: T) -> Result<T, LimbError> {
    let mut carry = ensure_flag(carry_in)?;
    ensure_same_len(lhs, rhs)?;

    for (l, &r) in lhs.iter_mut().zip(rhs) {
        let SumCarry { sum, carry: next } = l.add_with_carry(r, carry);
        *l = sum;
        carry = next;
    }
    Ok(carry)
}

/// Computes `lhs -= rhs + borrow_in` limb by limb and returns the final borrow-out.
///
/// An empty pair of slices returns `borrow_in` unchanged.
pub fn sub_limbs<T: Limb>(lhs: &mut [T], rhs: &[T], borrow_in: T) -> Result<T, LimbError> {
    let mut borrow = ensure_flag(borrow_in)?;
    ensure_same_len(lhs, rhs)?;

    for (l, &r) in lhs.iter_mut().zip(rhs) {
        let DiffBorrow { diff, borrow: next } = l.sub_with_borrow(r, borrow);
        *l = diff;
        borrow = next;
    }
    Ok(borrow)
}
