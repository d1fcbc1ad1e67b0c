//! Per-run operation counts.

/// Operation counts accumulated over one top-level multiplication.
///
/// Create a fresh value for every operand pair and thread it through the call tree by
/// mutable reference; nothing else holds on to it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    multiplications: usize,
    additions: usize,
}

impl Counters {
    /// Counters with nothing recorded.
    pub const fn new() -> Self {
        Self {
            multiplications: 0,
            additions: 0,
        }
    }

    /// Completed multiplication cell uses.
    pub const fn multiplications(&self) -> usize {
        self.multiplications
    }

    /// Completed middle additions.
    pub const fn additions(&self) -> usize {
        self.additions
    }

    pub(crate) fn record_multiplication(&mut self) {
        self.multiplications += 1;
    }

    pub(crate) fn record_addition(&mut self) {
        self.additions += 1;
    }
}
