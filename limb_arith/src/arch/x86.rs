//! `adc`/`sbb` through the 32-bit x86 carry intrinsics.

use core::arch::x86::{_addcarry_u32, _subborrow_u32};

use super::{NativeAdd, NativeSub};
use crate::result::{DiffBorrow, SumCarry};

impl NativeAdd for u32 {
    // the intrinsics are `unsafe fn` on older compilers
    #[allow(unused_unsafe)]
    #[inline(always)]
    fn native_add_with_carry(a: Self, b: Self, carry_in: Self) -> SumCarry<Self> {
        let mut sum = 0;
        // SAFETY: `_addcarry_u32` needs no target feature and only writes `sum`.
        let carry = unsafe { _addcarry_u32(carry_in as u8, a, b, &mut sum) };
        SumCarry::new(sum, carry as u32)
    }
}

impl NativeSub for u32 {
    #[allow(unused_unsafe)]
    #[inline(always)]
    fn native_sub_with_borrow(a: Self, b: Self, borrow_in: Self) -> DiffBorrow<Self> {
        let mut diff = 0;
        // SAFETY: `_subborrow_u32` needs no target feature and only writes `diff`.
        let borrow = unsafe { _subborrow_u32(borrow_in as u8, a, b, &mut diff) };
        DiffBorrow::new(diff, borrow as u32)
    }
}

impl NativeAdd for usize {
    #[inline(always)]
    fn native_add_with_carry(a: Self, b: Self, carry_in: Self) -> SumCarry<Self> {
        let res = <u32 as NativeAdd>::native_add_with_carry(a as u32, b as u32, carry_in as u32);
        SumCarry::new(res.sum as usize, res.carry as usize)
    }
}

impl NativeSub for usize {
    #[inline(always)]
    fn native_sub_with_borrow(a: Self, b: Self, borrow_in: Self) -> DiffBorrow<Self> {
        let res = <u32 as NativeSub>::native_sub_with_borrow(a as u32, b as u32, borrow_in as u32);
        DiffBorrow::new(res.diff as usize, res.borrow as usize)
    }
}
