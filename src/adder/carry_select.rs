//! Carry-select stages above the low carry-lookahead block.

use super::{BLOCK_BITS, Block, BlockSum};
use crate::{Bits, Signal, Tick};
use alloc::vec::Vec;
use log::trace;

impl Block {
    /// Carries into each bit position when the block's carry-in is one.
    ///
    /// ```text
    /// C1 = G0 + Q0
    /// C2 = G1 + Q1·G0 + Q1·Q0
    /// C3 = G2 + Q2·G1 + Q2·Q1·(G0 + Q0)
    /// ```
    pub(crate) fn carries_with_carry_in(&self) -> [Signal; BLOCK_BITS] {
        let Self { q, g, .. } = self;

        let g0_q0 = g[0].or(q[0]);
        let c1 = g0_q0;
        let c2 = g[1].or(q[1].and(g[0])).or(q[1].and(q[0]));
        let c3 = g[2].or(q[2].and(g[1])).or(q[2].and(q[1]).and(g0_q0));

        [Signal::ONE, c1, c2, c3]
    }

    /// Sum and carry-out when the block's carry-in is one.
    pub(crate) fn add_with_carry_in(&self) -> BlockSum {
        self.finish(self.carries_with_carry_in())
    }
}

/// Add `a` and `b` one 4-bit carry-select stage at a time, starting from `carry`.
///
/// Each stage computes its sum and carry-out under both possible carry-ins as soon as the
/// operands are available, then a multiplexer picks one once the true carry arrives. The
/// stage finishes two ticks after its carry-in settles, and its selected carry-out feeds the
/// next stage.
///
/// Operands are zero-extended to a common multiple of [`BLOCK_BITS`]; zero-width operands
/// produce an empty sum. Returns the sum at the extended width and the tick at which the last
/// stage settles, or `carry`'s tick if there are no stages.
pub fn carry_select_add(a: &Bits, b: &Bits, carry: Signal) -> (Bits, Tick) {
    let width = a.width().max(b.width()).next_multiple_of(BLOCK_BITS);
    let mut sum = Vec::with_capacity(width);
    let mut carry = carry;
    let mut tick = carry.tick();

    for index in 0..width / BLOCK_BITS {
        let block = Block::new(a, b, index);
        let without = block.add_without_carry_in();
        let with = block.add_with_carry_in();

        for (lo, hi) in without.sum.iter().zip(with.sum.iter()) {
            let bit = Signal::mux(*lo, *hi, carry);
            tick = tick.max(bit.tick());
            sum.push(bit.bit());
        }

        carry = Signal::mux(without.carry_out, with.carry_out, carry);
        tick = tick.max(carry.tick());

        trace!(
            "carry-select stage {index}: carry-out {} at {}",
            carry.bit(),
            carry.tick()
        );
    }

    (sum.into_iter().collect(), tick)
}
