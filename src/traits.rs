//! Traits provided by this crate.

use crate::Bit;

/// Two-way selection between same-shaped values, i.e. a multiplexer.
pub trait Select: Sized {
    /// Return `self` if `sel` is zero, otherwise return `other`.
    fn select(&self, other: &Self, sel: Bit) -> Self;
}
