//! Abstract propagation-delay units and the latency model for a full run.

use core::{fmt, ops::Add};

use crate::{Error, Result};

/// Number of ticks between operands reaching a multiplication cell and its product settling.
pub const CELL_LATENCY: u64 = 21;

/// Number of multiplication cells available in hardware.
pub const CELL_COUNT: usize = 4;

/// Propagation delay measured along a critical path.
///
/// This is not wall-clock time: a [`Tick`] is the depth of combinational logic a signal
/// has travelled through since the operands became available.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tick(u64);

impl Tick {
    /// The instant operands become available.
    pub const ZERO: Self = Self(0);

    /// Create a new [`Tick`].
    #[inline]
    pub const fn new(ticks: u64) -> Self {
        Self(ticks)
    }

    /// Borrow the inner count.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The tick `delay` units after this one.
    #[inline]
    #[must_use]
    pub const fn after(self, delay: u64) -> Self {
        Self(self.0 + delay)
    }

    /// The later of two ticks.
    #[inline]
    #[must_use]
    pub const fn max(self, other: Self) -> Self {
        if self.0 >= other.0 { self } else { other }
    }
}

impl Add for Tick {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl From<u64> for Tick {
    #[inline]
    fn from(ticks: u64) -> Self {
        Self(ticks)
    }
}

impl From<Tick> for u64 {
    #[inline]
    fn from(tick: Tick) -> u64 {
        tick.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}t", self.0)
    }
}

/// Hardware parameters used to turn a run's critical path and cell count into a latency.
///
/// Multiplication cells are a shared resource: with `cells` of them, every batch of `cells`
/// leaf products costs one `cell_latency` on top of the adder path.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TimingModel {
    cell_latency: u64,
    cells: usize,
}

impl TimingModel {
    /// Create a new [`TimingModel`].
    ///
    /// Returns [`Error::InvalidTimingModel`] if `cells` is zero.
    pub const fn new(cell_latency: u64, cells: usize) -> Result<Self> {
        if cells == 0 {
            return Err(Error::InvalidTimingModel);
        }

        Ok(Self {
            cell_latency,
            cells,
        })
    }

    /// Ticks charged per round of multiplication cell use.
    pub const fn cell_latency(&self) -> u64 {
        self.cell_latency
    }

    /// Number of multiplication cells shared by the whole multiplier.
    pub const fn cells(&self) -> usize {
        self.cells
    }

    /// Total latency of a run whose adder path ended at `path` after `multiplications`
    /// uses of a multiplication cell.
    pub fn total(&self, path: Tick, multiplications: usize) -> Tick {
        let rounds = multiplications.div_ceil(self.cells) as u64;
        path.after(rounds * self.cell_latency)
    }
}

impl Default for TimingModel {
    fn default() -> Self {
        Self {
            cell_latency: CELL_LATENCY,
            cells: CELL_COUNT,
        }
    }
}
