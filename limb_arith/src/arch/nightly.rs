//! Carry chains through the inherent `carrying_add` / `borrowing_sub` methods.
//!
//! These are stable on current toolchains, so no feature gate is needed.

use super::{NativeAdd, NativeSub};
use crate::result::{DiffBorrow, SumCarry};

macro_rules! impl_native {
    ($($T:ty),* $(,)?) => {
        $(
            impl NativeAdd for $T {
                #[inline(always)]
                fn native_add_with_carry(a: Self, b: Self, carry_in: Self) -> SumCarry<Self> {
                    let (sum, carry) = a.carrying_add(b, carry_in != 0);
                    SumCarry::new(sum, carry as $T)
                }
            }

            impl NativeSub for $T {
                #[inline(always)]
                fn native_sub_with_borrow(a: Self, b: Self, borrow_in: Self) -> DiffBorrow<Self> {
                    let (diff, borrow) = a.borrowing_sub(b, borrow_in != 0);
                    DiffBorrow::new(diff, borrow as $T)
                }
            }
        )*
    };
}

impl_native!(u8, u16, u32, u64, u128, usize);
