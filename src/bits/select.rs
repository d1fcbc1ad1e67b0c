//! Multiplexing of whole bit vectors.

use super::Bits;
use crate::{Bit, Select};

impl Select for Bits {
    /// Bitwise select between two vectors.
    ///
    /// # Panics
    /// - if the widths of `self` and `other` differ.
    #[inline]
    fn select(&self, other: &Self, sel: Bit) -> Self {
        assert_eq!(self.width(), other.width(), "select operands differ in width");

        self.bits
            .iter()
            .zip(other.bits.iter())
            .map(|(a, b)| a.select(b, sel))
            .collect()
    }
}
