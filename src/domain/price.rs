//! Reserve-ratio price reporting.

use core::fmt;

use super::Amount;

/// The pool's spot price: `reserve_b / reserve_a` as a dimensionless ratio.
///
/// [`Price::ZERO`] is the empty-pool convention — a pool with no reserve
/// of asset A reports a price of zero rather than faulting, so price
/// queries never fail.
///
/// # Examples
///
/// ```
/// use basin_amm::domain::{Amount, Price};
///
/// let price = Price::from_reserves(Amount::new(200), Amount::new(100));
/// assert_eq!(price.get(), 2.0);
/// assert!(Price::from_reserves(Amount::ZERO, Amount::ZERO).is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Price(f64);

impl Price {
    /// The empty-pool price.
    pub const ZERO: Self = Self(0.0);

    /// A 1:1 price ratio.
    pub const ONE: Self = Self(1.0);

    /// Computes `reserve_b / reserve_a`, or [`Price::ZERO`] when
    /// `reserve_a` is zero.
    ///
    /// The ratio of two `u128` values is always finite and non-negative,
    /// so construction never fails.
    #[must_use]
    pub fn from_reserves(reserve_b: Amount, reserve_a: Amount) -> Self {
        if reserve_a.is_zero() {
            return Self::ZERO;
        }
        #[allow(clippy::cast_precision_loss)]
        let ratio = reserve_b.get() as f64 / reserve_a.get() as f64;
        Self(ratio)
    }

    /// Returns the underlying `f64` ratio.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Returns `true` for the empty-pool price.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
