use crate::arch::Dispatch;
use crate::capability::Strategy;
use crate::error::{ensure_flag, LimbError};
use crate::result::DiffBorrow;
use crate::width::Limb;

/// Subtract-with-borrow operation trait.
pub trait SubWithBorrow: Sized + Copy {
    /// The strategy backing [`SubWithBorrow::sub_with_borrow`] for this width.
    const SUB_STRATEGY: Strategy;

    /// Calculates `self - rhs - borrow_in` and returns the truncated difference with the
    /// borrow-out.
    ///
    /// Performs "ternary subtraction" of a limb and a borrow-in from `self`, which allows
    /// chaining together several subtractions to build a wider one. `borrow_in` must be
    /// `0` or `1`; any other value yields an unspecified result.
    fn sub_with_borrow(self, rhs: Self, borrow_in: Self) -> DiffBorrow<Self>;

    /// Same as [`SubWithBorrow::sub_with_borrow`] but always runs the portable body.
    fn sub_with_borrow_portable(self, rhs: Self, borrow_in: Self) -> DiffBorrow<Self>;
}

macro_rules! impl_sub_with_borrow {
    ($($const_fn:ident => $T:ty),* $(,)?) => {
        $(
            #[doc = concat!("Portable subtract-with-borrow for `", stringify!($T), "`, valid in constant evaluation.")]
            ///
            /// A wraparound in either stage shows up as a result larger than the minuend of
            /// that stage and contributes one unit of borrow.
            #[inline]
            pub const fn $const_fn(a: $T, b: $T, borrow_in: $T) -> DiffBorrow<$T> {
                let tmp = a.wrapping_sub(b);
                let diff = tmp.wrapping_sub(borrow_in);
                let borrow = (diff > tmp) as $T + (tmp > a) as $T;
                DiffBorrow::new(diff, borrow)
            }

            impl SubWithBorrow for $T {
                const SUB_STRATEGY: Strategy = <$T as Dispatch>::SUB;

                #[inline(always)]
                fn sub_with_borrow(self, rhs: Self, borrow_in: Self) -> DiffBorrow<Self> {
                    <$T as Dispatch>::sub_with_borrow(self, rhs, borrow_in)
                }

                #[inline(always)]
                fn sub_with_borrow_portable(self, rhs: Self, borrow_in: Self) -> DiffBorrow<Self> {
                    $const_fn(self, rhs, borrow_in)
                }
            }
        )*
    };
}

impl_sub_with_borrow! {
    sub_with_borrow_const_u8 => u8,
    sub_with_borrow_const_u16 => u16,
    sub_with_borrow_const_u32 => u32,
    sub_with_borrow_const_u64 => u64,
    sub_with_borrow_const_u128 => u128,
    sub_with_borrow_const_usize => usize,
}

/// Computes `a - b - borrow_in` through the strategy bound to `T`.
#[inline(always)]
pub fn sub_with_borrow<T: SubWithBorrow>(a: T, b: T, borrow_in: T) -> DiffBorrow<T> {
    a.sub_with_borrow(b, borrow_in)
}

/// Computes `a - b - borrow_in` through the portable body, whatever `T` is bound to.
#[inline(always)]
pub fn sub_with_borrow_portable<T: SubWithBorrow>(a: T, b: T, borrow_in: T) -> DiffBorrow<T> {
    a.sub_with_borrow_portable(b, borrow_in)
}

/// Like [`sub_with_borrow`] but rejects a `borrow_in` other than `0` or `1`.
#[inline]
pub fn try_sub_with_borrow<T: Limb>(
    a: T,
    b: T,
    borrow_in: T,
) -> Result<DiffBorrow<T>, LimbError> {
    let borrow_in = ensure_flag(borrow_in)?;
    Ok(a.sub_with_borrow(b, borrow_in))
}
