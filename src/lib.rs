//! Gate-level latency model of a recursive multiplier built from 4-bit cells.
//!
//! # About
//! This library multiplies unsigned binary operands of any equal width the way a purely
//! combinational circuit would: operands are split in half recursively down to hard-wired
//! 4-bit multiplication cells, and the partial products are merged with a hierarchy of
//! carry-lookahead and carry-select adders simulated gate by gate.
//!
//! Alongside the exact product, every multiplication reports the depth of logic on its critical
//! path in abstract [`Tick`]s, and how many cell multiplications and additions it took.
//!
//! # Usage
//! ```
//! use cla_multiplier::{Bits, multiply};
//!
//! let a: Bits = "00000011".parse()?;
//! let b: Bits = "00000101".parse()?;
//! let product = multiply(&a, &b)?;
//!
//! assert_eq!(product.value().to_u64(), Some(15));
//! assert_eq!(product.multiplications(), 4);
//! assert_eq!(product.total_ticks().get(), 41);
//! # Ok::<(), cla_multiplier::Error>(())
//! ```
//!
//! # Timing model
//! - Gates settle after their slowest input plus a fixed delay; see [`gate`].
//! - The low 4 bits of every addition go through a carry-lookahead block that settles after
//!   6 ticks. Each further 4-bit block is a carry-select stage settling 2 ticks after its
//!   carry-in.
//! - Cell latency is charged per round of cell use, through [`TimingModel`].

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code, clippy::unwrap_used)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

extern crate alloc;

pub mod adder;
pub mod gate;
pub mod mul;

mod bit;
mod bits;
mod counters;
mod error;
mod report;
mod timing;
mod traits;

pub use crate::{
    bit::Bit,
    bits::Bits,
    counters::Counters,
    error::{Error, Result},
    gate::Signal,
    mul::{Multiplier, Product, multiply},
    report::{OperandPair, Report, run_batch},
    timing::{CELL_COUNT, CELL_LATENCY, Tick, TimingModel},
    traits::Select,
};
