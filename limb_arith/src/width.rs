//! The unsigned widths a limb can have.

use core::fmt::{self, Debug, Display};

use num_traits::{ConstOne, ConstZero, PrimInt, Unsigned};

use crate::{AddWithCarry, SubWithBorrow};

/// A supported limb width.
///
/// Each variant stands for one unsigned primitive type; `Size` is the platform
/// word (`usize`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Width {
    /// `u8`
    W8,
    /// `u16`
    W16,
    /// `u32`
    W32,
    /// `u64`
    W64,
    /// `u128`
    W128,
    /// `usize`
    Size,
}

impl Width {
    /// Every supported width, narrowest first with the platform word last.
    pub const ALL: [Width; 6] = [
        Width::W8,
        Width::W16,
        Width::W32,
        Width::W64,
        Width::W128,
        Width::Size,
    ];

    /// Returns the number of bits of this width.
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            Width::W8 => u8::BITS,
            Width::W16 => u16::BITS,
            Width::W32 => u32::BITS,
            Width::W64 => u64::BITS,
            Width::W128 => u128::BITS,
            Width::Size => usize::BITS,
        }
    }

    /// Returns the name of the primitive type backing this width.
    #[inline]
    pub const fn type_name(self) -> &'static str {
        match self {
            Width::W8 => "u8",
            Width::W16 => "u16",
            Width::W32 => "u32",
            Width::W64 => "u64",
            Width::W128 => "u128",
            Width::Size => "usize",
        }
    }
}

impl Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.type_name())
    }
}

mod sealed {
    pub trait Sealed {}
}

/// An unsigned primitive usable as one limb of a wide integer.
///
/// Implemented for `u8`, `u16`, `u32`, `u64`, `u128` and `usize` only.
pub trait Limb:
    'static
    + PrimInt
    + Unsigned
    + ConstZero
    + ConstOne
    + Debug
    + AddWithCarry
    + SubWithBorrow
    + sealed::Sealed
{
    /// The width class of this limb.
    const WIDTH: Width;

    /// Returns `true` if `self` is a well formed carry or borrow flag.
    #[inline]
    fn is_flag(self) -> bool {
        self <= Self::ONE
    }
}

macro_rules! impl_limb {
    ($($T:ty => $W:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $T {}

            impl Limb for $T {
                const WIDTH: Width = Width::$W;
            }
        )*
    };
}

impl_limb! {
    u8 => W8,
    u16 => W16,
    u32 => W32,
    u64 => W64,
    u128 => W128,
    usize => Size,
}
