//! The hard-wired 4-bit multiplication cell.

use crate::{Bits, Counters, Error, Result};

/// Widest operand a multiplication cell accepts, in bits.
pub const CELL_BITS: usize = 4;

/// Largest operand value a multiplication cell accepts.
const CELL_MAX: u64 = (1 << CELL_BITS) - 1;

/// Multiply two values of at most 4 bits each.
///
/// The cell is a given hardware primitive, so the product is computed arithmetically. It is
/// zero-extended to twice the width of the wider operand. Records one multiplication in
/// `counters` on success; the cell's latency is charged separately through
/// [`TimingModel`][`crate::TimingModel`].
///
/// Returns [`Error::OperandTooWide`] if either value exceeds 15.
pub fn mul_cell(a: &Bits, b: &Bits, counters: &mut Counters) -> Result<Bits> {
    let lhs = cell_operand(a)?;
    let rhs = cell_operand(b)?;
    counters.record_multiplication();

    Ok(Bits::from_u64(lhs * rhs, 2 * a.width().max(b.width())))
}

fn cell_operand(x: &Bits) -> Result<u64> {
    match x.to_u64() {
        Some(value) if value <= CELL_MAX => Ok(value),
        value => Err(Error::OperandTooWide {
            value: value.unwrap_or(u64::MAX),
        }),
    }
}
