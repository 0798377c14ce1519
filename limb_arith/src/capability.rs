//! Build-time capability query.
//!
//! Reports which widths are bound to a native carry primitive in the current
//! build. Correctness never depends on it: accelerated and portable strategies
//! agree on every input with a `0`/`1` flag.

use core::fmt::{self, Display};

use crate::arch;
use crate::width::{Limb, Width};

/// How an engine computes its result for one width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Pure wrapping arithmetic, the correctness reference.
    Portable,
    /// A native instruction or compiler intrinsic.
    Accelerated,
}

impl Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Strategy::Portable => "portable",
            Strategy::Accelerated => "accelerated",
        })
    }
}

/// The backend that provides the accelerated strategies of this build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// No native primitive, either forced by the `portable-only` feature or
    /// because the target has none.
    Portable,
    /// The inherent `carrying_add` / `borrowing_sub` methods, enabled by the
    /// `nightly` feature.
    Nightly,
    /// 32-bit x86 `_addcarry_u32` / `_subborrow_u32`.
    X86,
    /// x86_64 `_addcarry_u{32,64}` / `_subborrow_u{32,64}`.
    X86_64,
}

impl Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Backend::Portable => "portable",
            Backend::Nightly => "nightly",
            Backend::X86 => "x86",
            Backend::X86_64 => "x86_64",
        })
    }
}

/// The backend selected for this build.
pub const BACKEND: Backend = arch::BACKEND;

/// The strategies bound to one width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capability {
    /// The width this entry describes.
    pub width: Width,
    /// Strategy of the add-with-carry engine.
    pub add: Strategy,
    /// Strategy of the subtract-with-borrow engine.
    pub sub: Strategy,
}

impl Capability {
    /// Returns the capability of `width`.
    pub const fn of(width: Width) -> Self {
        match width {
            Width::W8 => capability::<u8>(),
            Width::W16 => capability::<u16>(),
            Width::W32 => capability::<u32>(),
            Width::W64 => capability::<u64>(),
            Width::W128 => capability::<u128>(),
            Width::Size => capability::<usize>(),
        }
    }

    /// Returns `true` if either engine of this width is accelerated.
    #[inline]
    pub const fn is_accelerated(&self) -> bool {
        matches!(self.add, Strategy::Accelerated) || matches!(self.sub, Strategy::Accelerated)
    }
}

/// Returns the capability of the limb type `T`.
#[inline]
pub const fn capability<T: Limb>() -> Capability {
    Capability {
        width: T::WIDTH,
        add: T::ADD_STRATEGY,
        sub: T::SUB_STRATEGY,
    }
}

/// Returns the capability table of this build, in [`Width::ALL`] order.
pub const fn capabilities() -> [Capability; 6] {
    [
        capability::<u8>(),
        capability::<u16>(),
        capability::<u32>(),
        capability::<u64>(),
        capability::<u128>(),
        capability::<usize>(),
    ]
}

/// Writes the capability table to the `debug` log.
pub fn log_capabilities() {
    log::debug!("limb arithmetic backend: {}", BACKEND);
    for cap in capabilities() {
        log::debug!("{:>5}: add {}, sub {}", cap.width, cap.add, cap.sub);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AddWithCarry, SubWithBorrow};

    #[test]
    fn test_table_order() {
        let widths: Vec<Width> = capabilities().iter().map(|cap| cap.width).collect();
        assert_eq!(widths, Width::ALL);
        for width in Width::ALL {
            assert_eq!(Capability::of(width).width, width);
        }
    }

    #[test]
    fn test_backend_matches_table() {
        let accelerated = capabilities().iter().filter(|cap| cap.is_accelerated()).count();
        match BACKEND {
            Backend::Portable => assert_eq!(accelerated, 0),
            Backend::Nightly => assert_eq!(accelerated, Width::ALL.len()),
            Backend::X86 | Backend::X86_64 => {
                assert!(Capability::of(Width::W32).is_accelerated());
                assert!(Capability::of(Width::Size).is_accelerated());
                assert!(!Capability::of(Width::W8).is_accelerated());
                assert!(!Capability::of(Width::W128).is_accelerated());
            }
        }
    }

    #[cfg(feature = "portable-only")]
    #[test]
    fn test_portable_only() {
        assert_eq!(BACKEND, Backend::Portable);
        assert!(capabilities().iter().all(|cap| !cap.is_accelerated()));
    }

    #[cfg(all(target_arch = "x86_64", not(any(feature = "portable-only", feature = "nightly"))))]
    #[test]
    fn test_x86_64_table() {
        assert_eq!(BACKEND, Backend::X86_64);
        assert_eq!(
            capability::<u64>(),
            Capability {
                width: Width::W64,
                add: Strategy::Accelerated,
                sub: Strategy::Accelerated,
            }
        );
        assert_eq!(Capability::of(Width::W16).add, Strategy::Portable);
    }

    #[cfg(all(feature = "nightly", not(feature = "portable-only")))]
    #[test]
    fn test_nightly_table() {
        assert_eq!(BACKEND, Backend::Nightly);
        assert!(capabilities().iter().all(Capability::is_accelerated));
        for a in 0..=u8::MAX {
            for b in 0..=u8::MAX {
                for c in 0..=1u8 {
                    assert_eq!(a.add_with_carry(b, c), a.add_with_carry_portable(b, c));
                    assert_eq!(a.sub_with_borrow(b, c), a.sub_with_borrow_portable(b, c));
                }
            }
        }
    }

    #[test]
    fn test_display() {
        let cap = Capability {
            width: Width::W128,
            add: Strategy::Portable,
            sub: Strategy::Accelerated,
        };
        assert_eq!(
            format!("{}: add {}, sub {}", cap.width, cap.add, cap.sub),
            "u128: add portable, sub accelerated"
        );
        assert!(cap.is_accelerated());
        assert_eq!(Backend::X86_64.to_string(), "x86_64");
    }
}
