//! Build-time binding of every width to its add and sub strategy.
//!
//! The `cfg_if!` block at the bottom is the one capability table of the crate:
//! each branch names a backend and lists, per width, whether the add and sub
//! engines use the backend's native primitive or the portable body. The
//! engines themselves carry no target or feature cfgs.

use crate::capability::{Backend, Strategy};
use crate::result::{DiffBorrow, SumCarry};

/// The strategy binding of one width.
pub(crate) trait Dispatch: Sized {
    const ADD: Strategy;
    const SUB: Strategy;

    fn add_with_carry(a: Self, b: Self, carry_in: Self) -> SumCarry<Self>;

    fn sub_with_borrow(a: Self, b: Self, borrow_in: Self) -> DiffBorrow<Self>;
}

/// Native add-with-carry provided by a backend.
///
/// Implementations must return a carry of exactly `0` or `1`.
// no backend implements it on portable-only targets
#[allow(dead_code)]
pub(crate) trait NativeAdd: Sized {
    fn native_add_with_carry(a: Self, b: Self, carry_in: Self) -> SumCarry<Self>;
}

/// Native subtract-with-borrow provided by a backend.
///
/// Implementations must return a borrow of exactly `0` or `1`.
#[allow(dead_code)]
pub(crate) trait NativeSub: Sized {
    fn native_sub_with_borrow(a: Self, b: Self, borrow_in: Self) -> DiffBorrow<Self>;
}

macro_rules! capability_table {
    (@add Portable, $a:ident, $b:ident, $c:ident) => {
        $crate::AddWithCarry::add_with_carry_portable($a, $b, $c)
    };
    (@add Accelerated, $a:ident, $b:ident, $c:ident) => {
        NativeAdd::native_add_with_carry($a, $b, $c)
    };
    (@sub Portable, $a:ident, $b:ident, $c:ident) => {
        $crate::SubWithBorrow::sub_with_borrow_portable($a, $b, $c)
    };
    (@sub Accelerated, $a:ident, $b:ident, $c:ident) => {
        NativeSub::native_sub_with_borrow($a, $b, $c)
    };
    (backend: $backend:ident; $($T:ty => { add: $add:ident, sub: $sub:ident }),* $(,)?) => {
        pub(crate) const BACKEND: Backend = Backend::$backend;

        $(
            impl Dispatch for $T {
                const ADD: Strategy = Strategy::$add;
                const SUB: Strategy = Strategy::$sub;

                #[inline(always)]
                fn add_with_carry(a: Self, b: Self, carry_in: Self) -> SumCarry<Self> {
                    capability_table!(@add $add, a, b, carry_in)
                }

                #[inline(always)]
                fn sub_with_borrow(a: Self, b: Self, borrow_in: Self) -> DiffBorrow<Self> {
                    capability_table!(@sub $sub, a, b, borrow_in)
                }
            }
        )*
    };
}

cfg_if::cfg_if! {
    if #[cfg(feature = "portable-only")] {
        capability_table! {
            backend: Portable;
            u8 => { add: Portable, sub: Portable },
            u16 => { add: Portable, sub: Portable },
            u32 => { add: Portable, sub: Portable },
            u64 => { add: Portable, sub: Portable },
            u128 => { add: Portable, sub: Portable },
            usize => { add: Portable, sub: Portable },
        }
    } else if #[cfg(feature = "nightly")] {
        mod nightly;

        capability_table! {
            backend: Nightly;
            u8 => { add: Accelerated, sub: Accelerated },
            u16 => { add: Accelerated, sub: Accelerated },
            u32 => { add: Accelerated, sub: Accelerated },
            u64 => { add: Accelerated, sub: Accelerated },
            u128 => { add: Accelerated, sub: Accelerated },
            usize => { add: Accelerated, sub: Accelerated },
        }
    } else if #[cfg(target_arch = "x86_64")] {
        mod x86_64;

        capability_table! {
            backend: X86_64;
            u8 => { add: Portable, sub: Portable },
            u16 => { add: Portable, sub: Portable },
            u32 => { add: Accelerated, sub: Accelerated },
            u64 => { add: Accelerated, sub: Accelerated },
            u128 => { add: Portable, sub: Portable },
            usize => { add: Accelerated, sub: Accelerated },
        }
    } else if #[cfg(target_arch = "x86")] {
        mod x86;

        capability_table! {
            backend: X86;
            u8 => { add: Portable, sub: Portable },
            u16 => { add: Portable, sub: Portable },
            u32 => { add: Accelerated, sub: Accelerated },
            u64 => { add: Portable, sub: Portable },
            u128 => { add: Portable, sub: Portable },
            usize => { add: Accelerated, sub: Accelerated },
        }
    } else {
        capability_table! {
            backend: Portable;
            u8 => { add: Portable, sub: Portable },
            u16 => { add: Portable, sub: Portable },
            u32 => { add: Portable, sub: Portable },
            u64 => { add: Portable, sub: Portable },
            u128 => { add: Portable, sub: Portable },
            usize => { add: Portable, sub: Portable },
        }
    }
}
