use crate::arch::Dispatch;
use crate::capability::Strategy;
use crate::error::{ensure_flag, LimbError};
use crate::result::SumCarry;
use crate::width::Limb;

/// Add-with-carry operation trait.
pub trait AddWithCarry: Sized + Copy {
    /// The strategy backing [`AddWithCarry::add_with_carry`] for this width.
    const ADD_STRATEGY: Strategy;

    /// Calculates `self + rhs + carry_in` and returns the truncated sum with the carry-out.
    ///
    /// Performs "ternary addition" of two limbs and a carry-in, which allows chaining
    /// together several additions to build a wider one. `carry_in` must be `0` or `1`,
    /// in which case the carry-out is `0` or `1` too. Any other `carry_in` yields an
    /// unspecified result.
    fn add_with_carry(self, rhs: Self, carry_in: Self) -> SumCarry<Self>;

    /// Same as [`AddWithCarry::add_with_carry`] but always runs the portable body.
    fn add_with_carry_portable(self, rhs: Self, carry_in: Self) -> SumCarry<Self>;
}

macro_rules! impl_add_with_carry {
    ($($const_fn:ident => $T:ty),* $(,)?) => {
        $(
            #[doc = concat!("Portable add-with-carry for `", stringify!($T), "`, valid in constant evaluation.")]
            ///
            /// With `carry_in` in `{0, 1}` the carry-out is in `{0, 1}`. Larger `carry_in`
            /// values still satisfy `a + b + carry_in == sum + carry * 2^BITS` but the
            /// carry may then reach `2`.
            #[inline]
            pub const fn $const_fn(a: $T, b: $T, carry_in: $T) -> SumCarry<$T> {
                let tmp = a.wrapping_add(carry_in);
                let sum = b.wrapping_add(tmp);
                let carry = (sum < b) as $T + (tmp < a) as $T;
                SumCarry::new(sum, carry)
            }

            impl AddWithCarry for $T {
                const ADD_STRATEGY: Strategy = <$T as Dispatch>::ADD;

                #[inline(always)]
                fn add_with_carry(self, rhs: Self, carry_in: Self) -> SumCarry<Self> {
                    <$T as Dispatch>::add_with_carry(self, rhs, carry_in)
                }

                #[inline(always)]
                fn add_with_carry_portable(self, rhs: Self, carry_in: Self) -> SumCarry<Self> {
                    $const_fn(self, rhs, carry_in)
                }
            }
        )*
    };
}

impl_add_with_carry! {
    add_with_carry_const_u8 => u8,
    add_with_carry_const_u16 => u16,
    add_with_carry_const_u32 => u32,
    add_with_carry_const_u64 => u64,
    add_with_carry_const_u128 => u128,
    add_with_carry_const_usize => usize,
}

/// Computes `a + b + carry_in` through the strategy bound to `T`.
#[inline(always)]
pub fn add_with_carry<T: AddWithCarry>(a: T, b: T, carry_in: T) -> SumCarry<T> {
    a.add_with_carry(b, carry_in)
}

/// Computes `a + b + carry_in` through the portable body, whatever `T` is bound to.
#[inline(always)]
pub fn add_with_carry_portable<T: AddWithCarry>(a: T, b: T, carry_in: T) -> SumCarry<T> {
    a.add_with_carry_portable(b, carry_in)
}

/// Like [`add_with_carry`] but rejects a `carry_in` other than `0` or `1`.
#[inline]
pub fn try_add_with_carry<T: Limb>(a: T, b: T, carry_in: T) -> Result<SumCarry<T>, LimbError> {
    let carry_in = ensure_flag(carry_in)?;
    Ok(a.add_with_carry(b, carry_in))
}
