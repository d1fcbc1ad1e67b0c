//! Random number generator support.

use super::Bits;
use crate::Bit;
use rand_core::RngCore;

impl Bits {
    /// Generate a uniformly random value of the given width.
    pub fn random<R: RngCore + ?Sized>(rng: &mut R, width: usize) -> Self {
        let mut word = 0;

        (0..width)
            .map(|i| {
                if i % 32 == 0 {
                    word = rng.next_u32();
                }
                Bit::from_u64_lsb(u64::from(word >> (i % 32)))
            })
            .collect()
    }
}
