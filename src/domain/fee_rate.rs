//! Swap fee as an integer rational.

use core::fmt;

use super::{Amount, Rounding};
use crate::error::{PoolError, Result};

/// The pool's fixed trading fee, expressed as an integer
/// `numerator / denominator` pair to keep all fee arithmetic exact.
///
/// The fee is applied to swap inputs via [`net_input`](Self::net_input):
///
/// ```text
/// net = amount_in × (denominator − numerator) / denominator   (floor)
/// ```
///
/// Flooring the net input rounds the implied fee up, so the remainder
/// always stays with the pool.
///
/// # Examples
///
/// ```
/// use basin_amm::domain::{Amount, FeeRate};
///
/// let fee = FeeRate::STANDARD; // 30 / 10_000 = 0.30%
/// let net = fee.net_input(Amount::new(10_000)).expect("no overflow");
/// assert_eq!(net, Amount::new(9_970));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeeRate {
    numerator: u64,
    denominator: u64,
}

impl FeeRate {
    /// The conventional 0.30% fee (30 / 10 000).
    pub const STANDARD: Self = Self {
        numerator: 30,
        denominator: 10_000,
    };

    /// A zero fee (0 / 10 000).  Swaps become pure constant-product.
    pub const FREE: Self = Self {
        numerator: 0,
        denominator: 10_000,
    };

    /// Creates a new `FeeRate`.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidFee`] if `denominator` is zero.
    /// - [`PoolError::InvalidFee`] if `numerator >= denominator` (a 100%
    ///   or larger fee makes every swap a no-op).
    pub const fn new(numerator: u64, denominator: u64) -> Result<Self> {
        if denominator == 0 {
            return Err(PoolError::InvalidFee("fee denominator must be positive"));
        }
        if numerator >= denominator {
            return Err(PoolError::InvalidFee("fee must be below 100%"));
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Returns the fee numerator.
    #[must_use]
    pub const fn numerator(&self) -> u64 {
        self.numerator
    }

    /// Returns the fee denominator.
    #[must_use]
    pub const fn denominator(&self) -> u64 {
        self.denominator
    }

    /// Returns `true` if no fee is charged.
    #[must_use]
    pub const fn is_free(&self) -> bool {
        self.numerator == 0
    }

    /// Converts to a floating-point percentage (30 / 10 000 → 0.30).
    #[must_use]
    pub fn as_percent(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64 * 100.0
    }

    /// Computes the effective swap input after the fee:
    /// `amount × (denominator − numerator) / denominator`, floored.
    ///
    /// The fee itself is `amount − net_input(amount)`, which includes the
    /// rounding remainder.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if the intermediate multiplication
    /// overflows.
    pub const fn net_input(&self, amount: Amount) -> Result<Amount> {
        if self.numerator == 0 {
            return Ok(amount);
        }
        // numerator < denominator by construction, so keep > 0.
        let keep = Amount::new((self.denominator - self.numerator) as u128);
        let denominator = Amount::new(self.denominator as u128);
        match amount.checked_mul_div(&keep, &denominator, Rounding::Down) {
            Some(net) => Ok(net),
            None => Err(PoolError::Overflow("net input overflow")),
        }
    }
}

impl Default for FeeRate {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    // -- Construction -------------------------------------------------------

    #[test]
    fn standard_rate() {
        assert_eq!(FeeRate::STANDARD.numerator(), 30);
        assert_eq!(FeeRate::STANDARD.denominator(), 10_000);
        assert!(!FeeRate::STANDARD.is_free());
    }

    #[test]
    fn default_is_standard() {
        assert_eq!(FeeRate::default(), FeeRate::STANDARD);
    }

    #[test]
    fn free_rate() {
        assert!(FeeRate::FREE.is_free());
    }

    #[test]
    fn zero_denominator_rejected() {
        assert_eq!(
            FeeRate::new(0, 0),
            Err(PoolError::InvalidFee("fee denominator must be positive"))
        );
    }

    #[test]
    fn full_fee_rejected() {
        assert!(FeeRate::new(10_000, 10_000).is_err());
        assert!(FeeRate::new(10_001, 10_000).is_err());
    }

    #[test]
    fn as_percent() {
        assert!((FeeRate::STANDARD.as_percent() - 0.30).abs() < 1e-12);
    }

    // -- net_input ----------------------------------------------------------

    #[test]
    fn net_input_standard() {
        let Ok(net) = FeeRate::STANDARD.net_input(Amount::new(10_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(net, Amount::new(9_970));
    }

    #[test]
    fn net_input_floors() {
        // 10 × 9_970 / 10_000 = 9.97 → 9; fee = 1, rounded up.
        let Ok(net) = FeeRate::STANDARD.net_input(Amount::new(10)) else {
            panic!("expected Ok");
        };
        assert_eq!(net, Amount::new(9));
    }

    #[test]
    fn net_input_free_is_identity() {
        let Ok(net) = FeeRate::FREE.net_input(Amount::new(12_345)) else {
            panic!("expected Ok");
        };
        assert_eq!(net, Amount::new(12_345));
    }

    #[test]
    fn net_input_tiny_amount_rounds_to_zero() {
        let Ok(fee) = FeeRate::new(5_000, 10_000) else {
            panic!("valid rate");
        };
        let Ok(net) = fee.net_input(Amount::new(1)) else {
            panic!("expected Ok");
        };
        assert_eq!(net, Amount::ZERO);
    }

    #[test]
    fn net_input_overflow() {
        assert_eq!(
            FeeRate::STANDARD.net_input(Amount::MAX),
            Err(PoolError::Overflow("net input overflow"))
        );
    }

    // -- Display ------------------------------------------------------------

    #[test]
    fn display() {
        assert_eq!(format!("{}", FeeRate::STANDARD), "30/10000");
    }
}
