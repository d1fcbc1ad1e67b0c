//! Heap-allocated fixed-width bit vectors.

mod encoding;
mod resize;
mod select;

#[cfg(feature = "rand_core")]
mod rand;

use crate::Bit;
use alloc::{boxed::Box, vec};

/// Fixed-width unsigned binary value.
///
/// The width is chosen at runtime and never changes implicitly: every widening or narrowing
/// is an explicit call which returns a new value.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Bits {
    /// Boxed slice containing bits.
    ///
    /// Stored from least significant to most significant.
    pub(crate) bits: Box<[Bit]>,
}

impl Bits {
    /// A value with no bits, the identity for [`Bits::concat`].
    pub fn empty() -> Self {
        Self { bits: Box::new([]) }
    }

    /// The value `0` with the given width.
    pub fn zero(width: usize) -> Self {
        Self {
            bits: vec![Bit::ZERO; width].into(),
        }
    }

    /// Create a [`Bits`] holding the low `width` bits of `value`.
    pub fn from_u64(value: u64, width: usize) -> Self {
        (0..width)
            .map(|i| match u32::try_from(i) {
                Ok(shift) if shift < u64::BITS => Bit::from_u64_lsb(value >> shift),
                _ => Bit::ZERO,
            })
            .collect()
    }

    /// Number of bits, including leading zeros.
    #[inline]
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    /// The bit at position `i`, counting from the least significant bit.
    ///
    /// Positions at or past the width read as zero, as if the value were zero-extended.
    #[inline]
    pub fn bit(&self, i: usize) -> Bit {
        self.bits.get(i).copied().unwrap_or(Bit::ZERO)
    }

    /// Borrow the bits, least significant first.
    #[inline]
    pub fn as_bits(&self) -> &[Bit] {
        &self.bits
    }

    /// Is every bit zero?
    pub fn is_zero(&self) -> bool {
        self.bits.iter().all(|bit| bit.is_zero())
    }

    /// Number of significant bits, i.e. the width without leading zeros.
    pub fn significant_bits(&self) -> usize {
        self.bits
            .iter()
            .rposition(|bit| bit.is_one())
            .map_or(0, |i| i + 1)
    }

    /// Numeric value, if it fits in a `u64`.
    pub fn to_u64(&self) -> Option<u64> {
        if self.significant_bits() > u64::BITS as usize {
            return None;
        }

        Some(
            self.bits
                .iter()
                .take(u64::BITS as usize)
                .enumerate()
                .fold(0, |acc, (i, bit)| acc | (u64::from(bit.to_u8()) << i)),
        )
    }
}

impl FromIterator<Bit> for Bits {
    /// Collect bits given least significant first.
    fn from_iter<I: IntoIterator<Item = Bit>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl From<Box<[Bit]>> for Bits {
    fn from(bits: Box<[Bit]>) -> Self {
        Self { bits }
    }
}

impl AsRef<[Bit]> for Bits {
    fn as_ref(&self) -> &[Bit] {
        self.as_bits()
    }
}
