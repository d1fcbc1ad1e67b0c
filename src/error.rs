//! Error types.

use thiserror::Error;

/// Result type with the `cla-multiplier` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// The addend merged into the middle of a wider value is not exactly half its width.
    #[error("cannot add a {small}-bit value into the middle of a {large}-bit value")]
    SizeMismatch {
        /// Width of the wider value.
        large: usize,
        /// Width of the addend.
        small: usize,
    },

    /// An operand handed to a multiplication cell does not fit in 4 bits.
    #[error("multiplication cell operand {value} exceeds 4 bits")]
    OperandTooWide {
        /// Numeric value of the offending operand, saturated at `u64::MAX`.
        value: u64,
    },

    /// The two multiplication operands have different widths.
    #[error("operand widths differ: {lhs} and {rhs} bits")]
    WidthMismatch {
        /// Width of the left operand.
        lhs: usize,
        /// Width of the right operand.
        rhs: usize,
    },

    /// An operand has no bits.
    #[error("operand is empty")]
    EmptyOperand,

    /// An operand string contains something other than `0` or `1`.
    #[error("invalid binary digit {found:?} at position {position}")]
    InvalidDigit {
        /// Zero-based character index, most significant digit first.
        position: usize,
        /// The offending character.
        found: char,
    },

    /// An operand pair line is not of the form `A,B`.
    #[error("operand pair is not two comma-separated values")]
    MalformedPair,

    /// A timing model with no multiplication cells.
    #[error("timing model needs at least one multiplication cell")]
    InvalidTimingModel,
}
