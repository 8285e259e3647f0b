//! Swap direction descriptor.

use core::fmt;

/// Which asset enters the pool during a swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwapDirection {
    /// Asset A in, asset B out.
    AToB,
    /// Asset B in, asset A out.
    BToA,
}

impl SwapDirection {
    /// Returns `true` for the A-in, B-out direction.
    #[must_use]
    pub const fn is_a_to_b(&self) -> bool {
        matches!(self, Self::AToB)
    }

    /// Returns the opposite direction.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        match self {
            Self::AToB => Self::BToA,
            Self::BToA => Self::AToB,
        }
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AToB => write!(f, "A->B"),
            Self::BToA => write!(f, "B->A"),
        }
    }
}
