//! Common functionality shared between tests.

// Different tests may use only a subset of the available functionality
#![allow(dead_code)]

use cla_multiplier::{Bit, Bits};
use num_bigint::BigUint;
use proptest::prelude::*;

/// `Bits` to `num_bigint::BigUint`
pub fn to_biguint(bits: &Bits) -> BigUint {
    bits.as_bits()
        .iter()
        .rev()
        .fold(BigUint::ZERO, |acc, bit| (acc << 1u8) + u32::from(bit.to_u8()))
}

/// `num_bigint::BigUint` to `Bits` of the given width, keeping only the low `width` bits.
pub fn to_bits(value: &BigUint, width: usize) -> Bits {
    (0..width).map(|i| Bit::from(value.bit(i as u64))).collect()
}

/// Strategy producing a value of exactly `width` bits.
pub fn bits(width: usize) -> impl Strategy<Value = Bits> {
    prop::collection::vec(any::<bool>(), width)
        .prop_map(|bools| bools.into_iter().map(Bit::from).collect())
}

prop_compose! {
    /// Two operands of the same width, between 1 and `max_width` bits.
    pub fn operands(max_width: usize)
        (width in 1..=max_width)
        (a in bits(width), b in bits(width)) -> (Bits, Bits) {
        (a, b)
    }
}
