#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! Add-with-carry and subtract-with-borrow primitives over unsigned limbs.
//!
//! Every unsigned width gets one dispatched entry point, bound at build time to
//! either a native carry instruction or the portable body, plus a `*_const`
//! portable variant usable in constant evaluation. Both produce identical
//! `(value, flag)` pairs on every input.
//!
//! Carry and borrow inputs must be `0` or `1`. Other values are a caller
//! contract violation: the result stays well typed but is unspecified, and
//! accelerated widths may disagree with the portable body on it.

mod add;
mod arch;
mod sub;

pub mod capability;
pub mod error;
pub mod limbs;
pub mod result;
pub mod width;

pub use add::*;
pub use capability::{capabilities, capability, Backend, Capability, Strategy, BACKEND};
pub use error::LimbError;
pub use limbs::{add_limbs, sub_limbs};
pub use result::{DiffBorrow, SumCarry};
pub use sub::*;
pub use width::{Limb, Width};
