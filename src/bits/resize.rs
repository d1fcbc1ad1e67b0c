//! Width changes, splitting and concatenation.

use super::Bits;
use crate::Bit;
use alloc::vec::Vec;

impl Bits {
    /// Widen to `width` bits by adding leading zeros.
    ///
    /// Values already at least `width` bits wide are returned unchanged.
    #[must_use]
    pub fn zero_extend(&self, width: usize) -> Self {
        if width <= self.width() {
            return self.clone();
        }

        let mut bits = Vec::with_capacity(width);
        bits.extend_from_slice(&self.bits);
        bits.resize(width, Bit::ZERO);
        bits.into_iter().collect()
    }

    /// Widen with leading zeros until the width is a multiple of `multiple`.
    #[must_use]
    pub fn zero_extend_to_multiple(&self, multiple: usize) -> Self {
        self.zero_extend(self.width().next_multiple_of(multiple))
    }

    /// Keep only the low `width` bits.
    ///
    /// Values already at most `width` bits wide are returned unchanged.
    #[must_use]
    pub fn truncate(&self, width: usize) -> Self {
        self.bits.iter().take(width).copied().collect()
    }

    /// The bits in positions `start..end`, counting from the least significant bit.
    ///
    /// Panics if the range is out of bounds.
    #[must_use]
    pub fn slice(&self, start: usize, end: usize) -> Self {
        self.bits[start..end].iter().copied().collect()
    }

    /// Split an even-width value into its `(high, low)` halves.
    ///
    /// Panics if the width is odd.
    pub fn split_halves(&self) -> (Self, Self) {
        assert!(self.width() % 2 == 0, "cannot split an odd width in half");
        let half = self.width() / 2;
        (self.slice(half, self.width()), self.slice(0, half))
    }

    /// The value `high << low.width() | low`.
    pub fn concat(high: &Self, low: &Self) -> Self {
        low.bits.iter().chain(high.bits.iter()).copied().collect()
    }
}
