//! `adc`/`sbb` through the x86_64 carry intrinsics.

use core::arch::x86_64::{_addcarry_u32, _addcarry_u64, _subborrow_u32, _subborrow_u64};

use super::{NativeAdd, NativeSub};
use crate::result::{DiffBorrow, SumCarry};

macro_rules! impl_native {
    ($($T:ty => $addcarry:ident, $subborrow:ident);* $(;)?) => {
        $(
            impl NativeAdd for $T {
                // the intrinsics are `unsafe fn` on older compilers
                #[allow(unused_unsafe)]
                #[inline(always)]
                fn native_add_with_carry(a: Self, b: Self, carry_in: Self) -> SumCarry<Self> {
                    let mut sum = 0;
                    // SAFETY: the intrinsic is part of the x86_64 baseline and only writes `sum`.
                    let carry = unsafe { $addcarry(carry_in as u8, a, b, &mut sum) };
                    SumCarry::new(sum, carry as $T)
                }
            }

            impl NativeSub for $T {
                #[allow(unused_unsafe)]
                #[inline(always)]
                fn native_sub_with_borrow(a: Self, b: Self, borrow_in: Self) -> DiffBorrow<Self> {
                    let mut diff = 0;
                    // SAFETY: the intrinsic is part of the x86_64 baseline and only writes `diff`.
                    let borrow = unsafe { $subborrow(borrow_in as u8, a, b, &mut diff) };
                    DiffBorrow::new(diff, borrow as $T)
                }
            }
        )*
    };
}

impl_native! {
    u32 => _addcarry_u32, _subborrow_u32;
    u64 => _addcarry_u64, _subborrow_u64;
}

#[cfg(target_pointer_width = "64")]
type Word = u64;

// x32 ABI
#[cfg(target_pointer_width = "32")]
type Word = u32;

impl NativeAdd for usize {
    #[inline(always)]
    fn native_add_with_carry(a: Self, b: Self, carry_in: Self) -> SumCarry<Self> {
        let res =
            <Word as NativeAdd>::native_add_with_carry(a as Word, b as Word, carry_in as Word);
        SumCarry::new(res.sum as usize, res.carry as usize)
    }
}

impl NativeSub for usize {
    #[inline(always)]
    fn native_sub_with_borrow(a: Self, b: Self, borrow_in: Self) -> DiffBorrow<Self> {
        let res =
            <Word as NativeSub>::native_sub_with_borrow(a as Word, b as Word, borrow_in as Word);
        DiffBorrow::new(res.diff as usize, res.borrow as usize)
    }
}
