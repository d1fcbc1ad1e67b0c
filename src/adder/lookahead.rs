//! The least significant carry-lookahead block.

use super::{BLOCK_BITS, Block, BlockSum, block_count, carry_select_add};
use crate::{Bits, Signal, Tick};

impl Block {
    /// Carries into each bit position when the block's carry-in is zero.
    ///
    /// ```text
    /// C1 = G0
    /// C2 = G1 + Q1·G0
    /// C3 = G2 + Q2·G1 + Q2·Q1·G0
    /// ```
    pub(crate) fn carries_without_carry_in(&self) -> [Signal; BLOCK_BITS] {
        let Self { q, g, .. } = self;

        let c1 = g[0];
        let c2 = g[1].or(q[1].and(g[0]));
        let c3 = g[2].or(q[2].and(g[1])).or(q[2].and(q[1]).and(g[0]));

        [Signal::ZERO, c1, c2, c3]
    }

    /// Sum and carry-out when the block's carry-in is zero.
    pub(crate) fn add_without_carry_in(&self) -> BlockSum {
        self.finish(self.carries_without_carry_in())
    }
}

/// Add `a` and `b` with no carry-in.
///
/// Both operands are zero-extended to a common width that is a positive multiple of
/// [`BLOCK_BITS`]. The low block is a carry-lookahead adder whose carry-out settles at
/// [`BLOCK_LATENCY`][`super::BLOCK_LATENCY`]; the remaining blocks are handed to
/// [`carry_select_add`]. The carry out of the top block is discarded.
///
/// Returns the sum at the extended width and the tick at which its slowest bit settles,
/// measured from the operands becoming available.
pub fn lookahead_add(a: &Bits, b: &Bits) -> (Bits, Tick) {
    let width = block_count(a.width().max(b.width())) * BLOCK_BITS;
    let a = a.zero_extend(width);
    let b = b.zero_extend(width);

    let low = Block::new(&a, &b, 0).add_without_carry_in();
    let (high, high_tick) = carry_select_add(
        &a.slice(BLOCK_BITS, width),
        &b.slice(BLOCK_BITS, width),
        low.carry_out,
    );

    let tick = low
        .sum
        .iter()
        .fold(high_tick, |tick, bit| tick.max(bit.tick()));
    let low: Bits = low.sum.iter().map(|s| s.bit()).collect();

    (Bits::concat(&high, &low), tick)
}
