//! Domain types shared across the crate.
//!
//! Currently this is the symbolic [`BoundarySide`] enumeration; keeping it in
//! its own module lets mesh- and patch-level code name faces without pulling
//! in the function-space machinery.

mod sides;

pub use sides::BoundarySide;
