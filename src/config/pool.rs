//! Configuration for the constant-product pool engine.

use crate::domain::FeeRate;
use crate::error::{PoolError, Result};

/// Immutable parameters of a pool instance.
///
/// The pool itself is always created empty — the first liquidity deposit
/// establishes reserves and the initial price — so the blueprint carries
/// only the fixed trading fee.
///
/// # Validation
///
/// The fee rational is validated at [`FeeRate`] construction time;
/// [`validate`](Self::validate) re-asserts it the way a host would before
/// wiring a deserialized config into an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolConfig {
    fee: FeeRate,
}

impl PoolConfig {
    /// Creates a new `PoolConfig` with the given fee.
    pub const fn new(fee: FeeRate) -> Self {
        Self { fee }
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidFee`] if the fee rational is not below
    /// 100% with a positive denominator.
    pub const fn validate(&self) -> Result<()> {
        if self.fee.denominator() == 0 {
            return Err(PoolError::InvalidFee("fee denominator must be positive"));
        }
        if self.fee.numerator() >= self.fee.denominator() {
            return Err(PoolError::InvalidFee("fee must be below 100%"));
        }
        Ok(())
    }

    /// Returns the swap fee.
    #[must_use]
    pub const fn fee(&self) -> FeeRate {
        self.fee
    }
}

impl Default for PoolConfig {
    /// The conventional 0.30% fee pool.
    fn default() -> Self {
        Self::new(FeeRate::STANDARD)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn default_carries_standard_fee() {
        let config = PoolConfig::default();
        assert_eq!(config.fee(), FeeRate::STANDARD);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn custom_fee() {
        let Ok(fee) = FeeRate::new(5, 1_000) else {
            panic!("valid rate");
        };
        let config = PoolConfig::new(fee);
        assert_eq!(config.fee().numerator(), 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_fee_is_valid() {
        assert!(PoolConfig::new(FeeRate::FREE).validate().is_ok());
    }
}
