//! Merging a half-width value into the middle of a wider one.

use super::{BLOCK_BITS, lookahead_add};
use crate::{Bits, Counters, Error, Result, Tick};
use log::debug;

/// Compute `large + (small << large.width() / 4)`, truncated to `large.width()` bits.
///
/// `small` must be exactly half as wide as `large`. The low quarter of `large` passes straight
/// through; everything above it goes through [`lookahead_add`], which starts at `start`.
/// Records one addition in `counters` on success.
///
/// Returns the sum and the tick at which it settles.
pub fn add_middle(
    large: &Bits,
    small: &Bits,
    start: Tick,
    counters: &mut Counters,
) -> Result<(Bits, Tick)> {
    let width = large.width();
    if small.width() * 2 != width {
        return Err(Error::SizeMismatch {
            large: width,
            small: small.width(),
        });
    }

    let large = large.zero_extend_to_multiple(BLOCK_BITS);
    let offset = width / 4;
    let high = large.slice(offset, large.width());

    let (sum, ticks) = lookahead_add(&high, &small.zero_extend(high.width()));
    counters.record_addition();

    let end = start.after(ticks.get());
    debug!(
        "middle add of {}-bit value into {width} bits at offset {offset}: {start} -> {end}",
        small.width()
    );

    let low = large.slice(0, offset);
    Ok((Bits::concat(&sum, &low).truncate(width), end))
}

#[cfg(test)]
mod tests {
    use super::add_middle;
    use crate::{Bits, Counters, Error, Tick};

    #[test]
    fn adds_at_quarter_offset() {
        let mut counters = Counters::new();
        let large = Bits::from_u64(0x0305, 16);
        let small = Bits::from_u64(0x0a, 8);

        let (sum, tick) = add_middle(&large, &small, Tick::ZERO, &mut counters).unwrap();
        assert_eq!(sum, Bits::from_u64(0x0305 + (0x0a << 4), 16));
        // three 4-bit blocks above the pass-through quarter
        assert_eq!(tick, Tick::new(10));
        assert_eq!(counters.additions(), 1);
    }

    #[test]
    fn offsets_from_start() {
        let mut counters = Counters::new();
        let large = Bits::zero(16);
        let small = Bits::from_u64(0xff, 8);

        let (sum, tick) = add_middle(&large, &small, Tick::new(10), &mut counters).unwrap();
        assert_eq!(sum, Bits::from_u64(0x0ff0, 16));
        assert_eq!(tick, Tick::new(20));
    }

    #[test]
    fn size_mismatch() {
        let mut counters = Counters::new();
        let large = Bits::zero(8);
        let small = Bits::zero(3);

        assert_eq!(
            add_middle(&large, &small, Tick::ZERO, &mut counters),
            Err(Error::SizeMismatch { large: 8, small: 3 })
        );
        assert_eq!(counters.additions(), 0);
    }

    #[test]
    fn width_not_multiple_of_four() {
        let mut counters = Counters::new();
        // 6-bit value with a 3-bit addend: offset is one bit
        let large = Bits::from_u64(0b010101, 6);
        let small = Bits::from_u64(0b011, 3);

        let (sum, tick) = add_middle(&large, &small, Tick::ZERO, &mut counters).unwrap();
        assert_eq!(sum, Bits::from_u64(0b010101 + (0b011 << 1), 6));
        assert_eq!(sum.width(), 6);
        assert_eq!(tick, Tick::new(8));
    }

    #[test]
    fn overflow_is_truncated() {
        let mut counters = Counters::new();
        let large = Bits::from_u64(0xff, 8);
        let small = Bits::from_u64(0xf, 4);

        let (sum, _) = add_middle(&large, &small, Tick::ZERO, &mut counters).unwrap();
        assert_eq!(sum, Bits::from_u64((0xff + (0xf << 2)) & 0xff, 8));
    }
}
