//! Batch processing of operand pairs into printable reports.

use crate::{Bits, Error, Multiplier, Product, Result};
use alloc::vec::Vec;
use core::{fmt, str::FromStr};
use log::warn;

/// Two operands read from one row of an operand source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperandPair {
    lhs: Bits,
    rhs: Bits,
}

impl OperandPair {
    /// Create a new [`OperandPair`].
    pub fn new(lhs: Bits, rhs: Bits) -> Self {
        Self { lhs, rhs }
    }

    /// Left operand.
    pub fn lhs(&self) -> &Bits {
        &self.lhs
    }

    /// Right operand.
    pub fn rhs(&self) -> &Bits {
        &self.rhs
    }

    /// Multiply the pair and keep the operands alongside the product.
    pub fn multiply(self, multiplier: &Multiplier) -> Result<Report> {
        let product = multiplier.multiply(&self.lhs, &self.rhs)?;
        Ok(Report {
            pair: self,
            product,
        })
    }
}

/// Parses `A,B` with surrounding whitespace ignored on each side.
impl FromStr for OperandPair {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (lhs, rhs) = s.split_once(',').ok_or(Error::MalformedPair)?;
        if rhs.contains(',') {
            return Err(Error::MalformedPair);
        }

        Ok(Self::new(lhs.trim().parse()?, rhs.trim().parse()?))
    }
}

/// A multiplied operand pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pair: OperandPair,
    product: Product,
}

impl Report {
    /// The operands that were multiplied.
    pub fn pair(&self) -> &OperandPair {
        &self.pair
    }

    /// The multiplication outcome.
    pub fn product(&self) -> &Product {
        &self.product
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { pair, product } = self;

        writeln!(f, "<---------->")?;
        writeln!(f, "Binary: {:b} * {:b} = {:b}", pair.lhs, pair.rhs, product.value())?;
        writeln!(f, "Hex: {:#x} * {:#x} = {:#x}", pair.lhs, pair.rhs, product.value())?;
        writeln!(f, "Time: {}", product.total_ticks())?;
        writeln!(f, "n: {}", product.width())?;
        writeln!(f, "Multiplications: {}", product.multiplications())?;
        write!(f, "Additions: {}", product.additions())
    }
}

/// Multiply every `A,B` line, in order.
///
/// A line that fails to parse or multiply yields an error in its slot and is logged; the
/// remaining lines are still processed.
pub fn run_batch<I>(lines: I, multiplier: &Multiplier) -> Vec<Result<Report>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    lines
        .into_iter()
        .enumerate()
        .map(|(row, line)| {
            let line = line.as_ref();
            let result = line
                .parse::<OperandPair>()
                .and_then(|pair| pair.multiply(multiplier));

            if let Err(err) = &result {
                warn!("skipping operand pair {row} ({line:?}): {err}");
            }

            result
        })
        .collect()
}
