//! Single binary digit and the untimed gate primitives over it.

use core::fmt;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::Select;

/// A single binary digit.
///
/// Internally this is always `0` or `1`; every constructor upholds that.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Bit(u8);

impl Bit {
    /// The zero bit.
    pub const ZERO: Self = Self(0);

    /// The one bit.
    pub const ONE: Self = Self(1);

    /// Create a [`Bit`] from a `bool`.
    #[inline]
    pub const fn from_bool(value: bool) -> Self {
        Self(value as u8)
    }

    /// Returns the truthy value if the lowest bit of `value` is set.
    #[inline]
    pub(crate) const fn from_u64_lsb(value: u64) -> Self {
        Self((value & 1) as u8)
    }

    /// Is this the one bit?
    #[inline]
    pub const fn is_one(self) -> bool {
        self.0 == 1
    }

    /// Is this the zero bit?
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns `0` or `1`.
    #[inline]
    pub const fn to_u8(self) -> u8 {
        self.0
    }

    /// Logical AND.
    #[inline]
    #[must_use]
    pub const fn and(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }

    /// Logical OR.
    #[inline]
    #[must_use]
    pub const fn or(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }

    /// Logical XOR.
    #[inline]
    #[must_use]
    pub const fn xor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }

    /// Logical NOT.
    #[inline]
    #[must_use]
    pub const fn not(self) -> Self {
        Self(self.0 ^ 1)
    }

    /// The character used to render this bit.
    #[inline]
    pub(crate) const fn to_char(self) -> char {
        if self.is_one() { '1' } else { '0' }
    }
}

impl From<bool> for Bit {
    #[inline]
    fn from(value: bool) -> Self {
        Self::from_bool(value)
    }
}

impl From<Bit> for bool {
    #[inline]
    fn from(bit: Bit) -> bool {
        bit.is_one()
    }
}

impl From<Choice> for Bit {
    #[inline]
    fn from(choice: Choice) -> Self {
        Self(choice.unwrap_u8())
    }
}

impl From<Bit> for Choice {
    #[inline]
    fn from(bit: Bit) -> Choice {
        Choice::from(bit.0)
    }
}

impl ConditionallySelectable for Bit {
    #[inline]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(u8::conditional_select(&a.0, &b.0, choice))
    }
}

impl ConstantTimeEq for Bit {
    #[inline]
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl Select for Bit {
    #[inline]
    fn select(&self, other: &Self, sel: Bit) -> Self {
        Self::conditional_select(self, other, sel.into())
    }
}

impl fmt::Debug for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bit({})", self.0)
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
