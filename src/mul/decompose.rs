//! Divide-and-conquer multiplication down to 4-bit cells.

use super::{CELL_BITS, mul_cell};
use crate::{Bits, Counters, Error, Result, Tick, adder::add_middle};
use log::debug;

/// Multiply two equal-width values by recursive splitting.
///
/// Each operand is split into halves, `A = a·2^h + b` and `B = c·2^h + d`, and the four cross
/// products are computed recursively until they fit a multiplication cell:
///
/// ```text
/// A·B = ac·2^2h + (ad + bc)·2^h + bd
/// ```
///
/// `ac` and `bd` are concatenated, then `ad` and `bc` are each merged into the middle with
/// [`add_middle`]. Odd widths are zero-extended by one bit before splitting.
///
/// All four branches run in parallel hardware; the branch computing `ac` sets the tick at which
/// the other three are assumed to finish as well. Cell latency is not on this path; see
/// [`TimingModel`][`crate::TimingModel`].
///
/// Returns the `2n`-bit product and the tick at which the last addition settles.
pub fn mul_recursive(
    a: &Bits,
    b: &Bits,
    start: Tick,
    counters: &mut Counters,
) -> Result<(Bits, Tick)> {
    let width = a.width();
    if b.width() != width {
        return Err(Error::WidthMismatch {
            lhs: width,
            rhs: b.width(),
        });
    }

    if width <= CELL_BITS {
        return Ok((mul_cell(a, b, counters)?, start));
    }

    let even = width.next_multiple_of(2);
    let (a_hi, a_lo) = a.zero_extend(even).split_halves();
    let (b_hi, b_lo) = b.zero_extend(even).split_halves();
    debug!("splitting {width}-bit operands into {}-bit halves at {start}", even / 2);

    let (ac, tick) = mul_recursive(&a_hi, &b_hi, start, counters)?;
    let (ad, _) = mul_recursive(&a_hi, &b_lo, tick, counters)?;
    let (bc, _) = mul_recursive(&a_lo, &b_hi, tick, counters)?;
    let (bd, _) = mul_recursive(&a_lo, &b_lo, tick, counters)?;

    let (partial, tick) = add_middle(&Bits::concat(&ac, &bd), &ad, tick, counters)?;
    let (product, tick) = add_middle(&partial, &bc, tick, counters)?;

    Ok((product.truncate(2 * width), tick))
}

#[cfg(test)]
mod tests {
    use super::mul_recursive;
    use crate::{Bits, Counters, Error, Tick};

    fn run(a: u64, b: u64, width: usize) -> (Bits, Tick, Counters) {
        let mut counters = Counters::new();
        let (product, tick) = mul_recursive(
            &Bits::from_u64(a, width),
            &Bits::from_u64(b, width),
            Tick::ZERO,
            &mut counters,
        )
        .unwrap();
        (product, tick, counters)
    }

    #[test]
    fn base_case_is_a_single_cell() {
        let (product, tick, counters) = run(3, 5, 4);
        assert_eq!(product, Bits::from_u64(15, 8));
        assert_eq!(tick, Tick::ZERO);
        assert_eq!(counters.multiplications(), 1);
        assert_eq!(counters.additions(), 0);
    }

    #[test]
    fn eight_bits() {
        let (product, tick, counters) = run(3, 5, 8);
        assert_eq!(product, Bits::from_u64(15, 16));
        // two middle adds over three 4-bit blocks each
        assert_eq!(tick, Tick::new(20));
        assert_eq!(counters.multiplications(), 4);
        assert_eq!(counters.additions(), 2);
    }

    #[test]
    fn eight_bits_max() {
        let (product, _, _) = run(0xff, 0xff, 8);
        assert_eq!(product, Bits::from_u64(0xff * 0xff, 16));
    }

    #[test]
    fn odd_width_is_padded() {
        let (product, _, counters) = run(0b10111, 0b11001, 5);
        assert_eq!(product, Bits::from_u64(0b10111 * 0b11001, 10));
        assert_eq!(counters.multiplications(), 4);
    }

    #[test]
    fn starts_from_given_tick() {
        let mut counters = Counters::new();
        let (_, tick) = mul_recursive(
            &Bits::from_u64(7, 8),
            &Bits::from_u64(9, 8),
            Tick::new(100),
            &mut counters,
        )
        .unwrap();
        assert_eq!(tick, Tick::new(120));
    }

    #[test]
    fn sixteen_bits() {
        let (product, tick, counters) = run(0xbeef, 0xcafe, 16);
        assert_eq!(product.to_u64(), Some(0xbeef * 0xcafe));
        assert_eq!(product.width(), 32);
        // 20 for the 8-bit branch, then two adds over six blocks: 2 * (6 + 2 * 5)
        assert_eq!(tick, Tick::new(52));
        assert_eq!(counters.multiplications(), 16);
        assert_eq!(counters.additions(), 10);
    }

    #[test]
    fn width_mismatch() {
        let mut counters = Counters::new();
        let result = mul_recursive(&Bits::zero(8), &Bits::zero(4), Tick::ZERO, &mut counters);
        assert_eq!(result, Err(Error::WidthMismatch { lhs: 8, rhs: 4 }));
    }
}
