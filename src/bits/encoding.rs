//! Parsing and rendering of [`Bits`].

use super::Bits;
use crate::{Bit, Error, Result};
use alloc::vec::Vec;
use core::{fmt, str::FromStr};

impl Bits {
    /// Parse a string of `0` and `1` characters, most significant digit first.
    ///
    /// The width of the result is the length of the string, leading zeros included.
    pub fn from_be_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::EmptyOperand);
        }

        let mut bits = s
            .chars()
            .enumerate()
            .map(|(position, found)| match found {
                '0' => Ok(Bit::ZERO),
                '1' => Ok(Bit::ONE),
                _ => Err(Error::InvalidDigit { position, found }),
            })
            .collect::<Result<Vec<_>>>()?;

        bits.reverse();
        Ok(bits.into_iter().collect())
    }

    /// Hexadecimal digits, least significant first, with leading zero digits dropped.
    fn nibbles(&self) -> impl DoubleEndedIterator<Item = u32> + '_ {
        let significant = self.significant_bits();
        (0..significant.div_ceil(4)).map(move |i| {
            (0..4).fold(0, |acc, k| {
                acc | (u32::from(self.bit(4 * i + k).to_u8()) << k)
            })
        })
    }

    fn fmt_hex(&self, f: &mut fmt::Formatter<'_>, upper: bool) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }

        let mut nibbles = self.nibbles().rev().peekable();
        if nibbles.peek().is_none() {
            return write!(f, "0");
        }

        for nibble in nibbles {
            // nibbles are always < 16
            let digit = char::from_digit(nibble, 16).unwrap_or('0');
            let digit = if upper {
                digit.to_ascii_uppercase()
            } else {
                digit
            };
            write!(f, "{digit}")?;
        }

        Ok(())
    }
}

impl FromStr for Bits {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_be_str(s)
    }
}

impl fmt::Debug for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bits(0b{self:b})")
    }
}

impl fmt::Display for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(self, f)
    }
}

/// Renders every bit of the width, leading zeros included.
impl fmt::Binary for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0b")?;
        }

        for bit in self.bits.iter().rev() {
            write!(f, "{}", bit.to_char())?;
        }

        Ok(())
    }
}

impl fmt::LowerHex for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_hex(f, false)
    }
}

impl fmt::UpperHex for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_hex(f, true)
    }
}
