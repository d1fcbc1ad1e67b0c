//! Gate-level adders built from 4-bit carry-lookahead blocks.
//!
//! The least significant block of an addition is a plain carry-lookahead adder
//! ([`lookahead_add`]). Every block above it is a carry-select stage
//! ([`carry_select_add`]): both possible carry-ins are evaluated up front and the real one
//! picks the answer through a multiplexer once it arrives. [`add_middle`] uses the pair to
//! merge a half-width value into the middle of a wider one.

mod carry_select;
mod combine;
mod lookahead;

pub use self::{carry_select::carry_select_add, combine::add_middle, lookahead::lookahead_add};

use crate::{Bits, Signal};

/// Number of bits handled by one carry-lookahead block.
pub const BLOCK_BITS: usize = 4;

/// Ticks for a lone carry-lookahead block to produce its sum and carry-out.
pub const BLOCK_LATENCY: u64 = 6;

/// One 4-bit slice of two addends with its propagate and generate signals.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Block {
    a: [Signal; BLOCK_BITS],
    b: [Signal; BLOCK_BITS],
    /// Propagate: `a | b`.
    q: [Signal; BLOCK_BITS],
    /// Generate: `a & b`.
    g: [Signal; BLOCK_BITS],
}

/// Sum bits and carry-out of a block under one carry-in.
#[derive(Copy, Clone, Debug)]
pub(crate) struct BlockSum {
    pub(crate) sum: [Signal; BLOCK_BITS],
    pub(crate) carry_out: Signal,
}

impl Block {
    /// Slice block `index` out of `a` and `b`, reading missing high bits as zero.
    pub(crate) fn new(a: &Bits, b: &Bits, index: usize) -> Self {
        let base = index * BLOCK_BITS;
        let a: [Signal; BLOCK_BITS] = core::array::from_fn(|i| Signal::input(a.bit(base + i)));
        let b: [Signal; BLOCK_BITS] = core::array::from_fn(|i| Signal::input(b.bit(base + i)));

        Self {
            a,
            b,
            q: core::array::from_fn(|i| a[i].or(b[i])),
            g: core::array::from_fn(|i| a[i].and(b[i])),
        }
    }

    /// Evaluate the block given the carry into every bit position, `carries[0]` being the
    /// block's carry-in.
    fn finish(&self, carries: [Signal; BLOCK_BITS]) -> BlockSum {
        let sum = core::array::from_fn(|i| self.a[i].xor(self.b[i]).xor(carries[i]));
        let carry_out = self.g[3].or(self.q[3].and(carries[3]));
        BlockSum { sum, carry_out }
    }
}

/// Number of blocks needed for `width` bits, never fewer than one.
fn block_count(width: usize) -> usize {
    width.div_ceil(BLOCK_BITS).max(1)
}

#[cfg(test)]
mod tests {
    use super::{Block, block_count};
    use crate::{Bit, Bits, Tick};

    #[test]
    fn propagate_generate_settle_at_one() {
        let a = Bits::from_u64(0b1100, 4);
        let b = Bits::from_u64(0b1010, 4);
        let block = Block::new(&a, &b, 0);

        let q: [Bit; 4] = core::array::from_fn(|i| block.q[i].bit());
        let g: [Bit; 4] = core::array::from_fn(|i| block.g[i].bit());
        assert_eq!(q, [Bit::ZERO, Bit::ONE, Bit::ONE, Bit::ONE]);
        assert_eq!(g, [Bit::ZERO, Bit::ZERO, Bit::ZERO, Bit::ONE]);
        assert!(block.q.iter().chain(&block.g).all(|s| s.tick() == Tick::new(1)));
    }

    #[test]
    fn block_reads_past_width_as_zero() {
        let a = Bits::from_u64(0b1_0000, 5);
        let b = Bits::zero(5);
        let block = Block::new(&a, &b, 1);

        assert_eq!(block.a[0].bit(), Bit::ONE);
        assert!(block.a[1..].iter().all(|s| s.bit() == Bit::ZERO));
    }

    #[test]
    fn block_counts() {
        assert_eq!(block_count(0), 1);
        assert_eq!(block_count(4), 1);
        assert_eq!(block_count(5), 2);
        assert_eq!(block_count(12), 3);
    }
}
