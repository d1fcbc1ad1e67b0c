//! Multiplication of equal-width operands on 4-bit cells.

mod cell;
mod decompose;

pub use self::{
    cell::{CELL_BITS, mul_cell},
    decompose::mul_recursive,
};

use crate::{Bits, Counters, Error, Result, Tick, TimingModel};

/// Multiplier circuit parameterised by a [`TimingModel`].
///
/// Every call to [`Multiplier::multiply`] gets its own [`Counters`], so one
/// [`Multiplier`] can be shared freely between operand pairs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Multiplier {
    model: TimingModel,
}

impl Multiplier {
    /// Create a new [`Multiplier`].
    pub const fn new(model: TimingModel) -> Self {
        Self { model }
    }

    /// The timing model used to compute total latency.
    pub const fn model(&self) -> &TimingModel {
        &self.model
    }

    /// Multiply two operands of the same non-zero width.
    pub fn multiply(&self, a: &Bits, b: &Bits) -> Result<Product> {
        if a.width() != b.width() {
            return Err(Error::WidthMismatch {
                lhs: a.width(),
                rhs: b.width(),
            });
        }

        if a.width() == 0 {
            return Err(Error::EmptyOperand);
        }

        let mut counters = Counters::new();
        let (value, path_ticks) = mul_recursive(a, b, Tick::ZERO, &mut counters)?;

        Ok(Product {
            value,
            path_ticks,
            total_ticks: self.model.total(path_ticks, counters.multiplications()),
            width: a.width(),
            counters,
        })
    }
}

/// Multiply two operands with the default [`TimingModel`].
pub fn multiply(a: &Bits, b: &Bits) -> Result<Product> {
    Multiplier::default().multiply(a, b)
}

/// Outcome of one multiplication.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Product {
    value: Bits,
    path_ticks: Tick,
    total_ticks: Tick,
    width: usize,
    counters: Counters,
}

impl Product {
    /// The product, twice as wide as the operands.
    pub fn value(&self) -> &Bits {
        &self.value
    }

    /// Critical path through the adders, excluding multiplication cell latency.
    pub fn path_ticks(&self) -> Tick {
        self.path_ticks
    }

    /// Total latency: the adder path plus one cell latency per round of cell use.
    pub fn total_ticks(&self) -> Tick {
        self.total_ticks
    }

    /// Operand width in bits.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of multiplication cell uses.
    pub fn multiplications(&self) -> usize {
        self.counters.multiplications()
    }

    /// Number of middle additions.
    pub fn additions(&self) -> usize {
        self.counters.additions()
    }

    /// All operation counts of the run.
    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    /// Take ownership of the product value.
    pub fn into_value(self) -> Bits {
        self.value
    }
}
