//! Timed gate primitives.
//!
//! A [`Signal`] is a [`Bit`] tagged with the [`Tick`] at which it settles. Every gate
//! waits for its slowest input and then adds its own propagation delay, so the tick of a
//! gate's output is the length of the critical path leading to it.

use crate::{Bit, Select, Tick};

/// Propagation delay of a 2-input AND gate.
pub const AND_DELAY: u64 = 1;

/// Propagation delay of a 2-input OR gate.
pub const OR_DELAY: u64 = 1;

/// Propagation delay of an inverter.
pub const NOT_DELAY: u64 = 1;

/// Propagation delay of a 2-input XOR gate.
pub const XOR_DELAY: u64 = 2;

/// Propagation delay of a 2-way multiplexer, measured from its slowest input.
pub const MUX_DELAY: u64 = 2;

/// A bit together with the tick at which it becomes valid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Signal {
    bit: Bit,
    tick: Tick,
}

impl Signal {
    /// Constant zero, available immediately.
    pub const ZERO: Self = Self::input(Bit::ZERO);

    /// Constant one, available immediately.
    pub const ONE: Self = Self::input(Bit::ONE);

    /// A signal valid at `tick`.
    #[inline]
    pub const fn new(bit: Bit, tick: Tick) -> Self {
        Self { bit, tick }
    }

    /// A primary input, valid at [`Tick::ZERO`].
    #[inline]
    pub const fn input(bit: Bit) -> Self {
        Self::new(bit, Tick::ZERO)
    }

    /// The logical value carried.
    #[inline]
    pub const fn bit(self) -> Bit {
        self.bit
    }

    /// When the value settles.
    #[inline]
    pub const fn tick(self) -> Tick {
        self.tick
    }

    #[inline]
    const fn gate(bit: Bit, a: Self, b: Self, delay: u64) -> Self {
        Self::new(bit, a.tick.max(b.tick).after(delay))
    }

    /// Timed AND gate.
    #[inline]
    #[must_use]
    pub const fn and(self, rhs: Self) -> Self {
        Self::gate(self.bit.and(rhs.bit), self, rhs, AND_DELAY)
    }

    /// Timed OR gate.
    #[inline]
    #[must_use]
    pub const fn or(self, rhs: Self) -> Self {
        Self::gate(self.bit.or(rhs.bit), self, rhs, OR_DELAY)
    }

    /// Timed XOR gate.
    #[inline]
    #[must_use]
    pub const fn xor(self, rhs: Self) -> Self {
        Self::gate(self.bit.xor(rhs.bit), self, rhs, XOR_DELAY)
    }

    /// Timed inverter.
    #[inline]
    #[must_use]
    pub const fn not(self) -> Self {
        Self::new(self.bit.not(), self.tick.after(NOT_DELAY))
    }

    /// Timed multiplexer: `a` when `sel` is zero, `b` when it is one.
    #[inline]
    pub fn mux(a: Self, b: Self, sel: Self) -> Self {
        let picked = a.select(&b, sel.bit);
        Self::new(picked.bit, picked.tick.max(sel.tick.after(MUX_DELAY)))
    }
}

impl Select for Signal {
    /// Selects on an untimed bit: the output waits only for both data inputs.
    #[inline]
    fn select(&self, other: &Self, sel: Bit) -> Self {
        let tick = self.tick.max(other.tick).after(MUX_DELAY);
        Self::new(self.bit.select(&other.bit, sel), tick)
    }
}

#[cfg(test)]
mod tests {
    use super::Signal;
    use crate::{Bit, Tick};

    fn at(bit: u8, tick: u64) -> Signal {
        Signal::new(Bit::from_bool(bit == 1), Tick::new(tick))
    }

    #[test]
    fn gates_wait_for_slowest_input() {
        assert_eq!(at(1, 3).and(at(1, 1)), at(1, 4));
        assert_eq!(at(0, 0).or(at(1, 2)), at(1, 3));
        assert_eq!(at(1, 1).xor(at(1, 1)), at(0, 3));
        assert_eq!(at(0, 5).not(), at(1, 6));
    }

    #[test]
    fn inputs_settle_at_zero() {
        assert_eq!(Signal::input(Bit::ONE).tick(), Tick::ZERO);
        assert_eq!(Signal::ZERO.bit(), Bit::ZERO);
    }

    #[test]
    fn mux_waits_for_selector() {
        let out = Signal::mux(at(0, 6), at(1, 6), at(1, 10));
        assert_eq!(out, at(1, 12));

        let out = Signal::mux(at(0, 6), at(1, 5), at(0, 1));
        assert_eq!(out, at(0, 8));
    }
}
