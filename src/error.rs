//! Unified error types for the pool engine.
//!
//! All fallible operations across the crate return [`PoolError`] as their
//! error type.  Every failure is a rejected operation: the engine never
//! leaves partial state behind, and nothing is retried internally —
//! retry semantics belong to the host transaction layer.

use thiserror::Error;

use crate::ledger::LedgerError;

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, PoolError>;

/// Error type returned by every fallible operation in the crate.
///
/// Variants carry a `&'static str` context message where one rejection
/// reason can arise from several call sites.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolError {
    /// An amount or share argument was zero where a positive value is required.
    #[error("amount must be positive: {0}")]
    ZeroAmount(&'static str),

    /// The provider's share balance is smaller than the shares to burn.
    #[error("provider balance is smaller than the shares to burn")]
    InsufficientShares,

    /// A swap was attempted while the pool holds no reserves.
    #[error("swap attempted against an empty pool")]
    EmptyPool,

    /// The computed swap output rounds to zero.
    ///
    /// Protects traders from no-op swaps that would still cost the fee.
    #[error("computed swap output rounds to zero")]
    InsufficientOutput,

    /// Deposit amounts cannot be reconciled to the current pool ratio.
    #[error("deposit cannot be reconciled to the pool ratio: {0}")]
    RatioMismatch(&'static str),

    /// The input-side reserve of a quote is zero.
    #[error("input-side reserve is zero")]
    ZeroReserve,

    /// The asset ledger collaborator refused or failed a transfer.
    ///
    /// Pool state is untouched when this is returned.
    #[error("asset ledger refused the transfer: {0}")]
    LedgerTransfer(#[from] LedgerError),

    /// An operation was invoked while another was mid-flight on the same pool.
    #[error("operation re-entered while another is in flight")]
    ReentrantCall,

    /// A fee rate failed validation.
    #[error("invalid fee rate: {0}")]
    InvalidFee(&'static str),

    /// Checked integer arithmetic overflowed or underflowed.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_context() {
        let err = PoolError::Overflow("reserve A overflow on deposit");
        let msg = format!("{err}");
        assert!(msg.contains("reserve A overflow on deposit"));
    }

    #[test]
    fn ledger_error_converts() {
        fn fails() -> Result<()> {
            let refused: core::result::Result<(), LedgerError> =
                Err(LedgerError::InsufficientFunds);
            refused?;
            Ok(())
        }
        assert_eq!(
            fails(),
            Err(PoolError::LedgerTransfer(LedgerError::InsufficientFunds))
        );
    }

    #[test]
    fn equality() {
        assert_eq!(PoolError::EmptyPool, PoolError::EmptyPool);
        assert_ne!(PoolError::EmptyPool, PoolError::InsufficientOutput);
    }
}
