//! Asset ledger collaborator boundary.
//!
//! The engine never assumes a transfer has already happened.  For every
//! operation that changes reserves it (a) validates inputs, (b) instructs
//! the [`AssetLedger`] to move the exact validated amount, and (c) only
//! then mutates its own state — so a ledger failure leaves pool state
//! untouched.  One ledger instance exists per asset; the pool records
//! amounts, the ledger owns custody mechanics.

mod memory;

use thiserror::Error;

pub use memory::InMemoryLedger;

use crate::domain::{AccountId, Amount};

/// Failure reported by an [`AssetLedger`] implementor.
///
/// Converts into
/// [`PoolError::LedgerTransfer`](crate::error::PoolError::LedgerTransfer)
/// at the engine boundary.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerError {
    /// The source account's balance is below the requested amount.
    #[error("account balance too low for the requested transfer")]
    InsufficientFunds,

    /// The pool's custody balance is below the requested payout.
    #[error("pool custody too low for the requested payout")]
    InsufficientCustody,

    /// A balance would overflow its representation.
    #[error("ledger balance overflow")]
    Overflow,

    /// The ledger refused the transfer for an implementation-specific reason.
    #[error("transfer rejected by the ledger: {0}")]
    Rejected(&'static str),
}

/// External ledger of one underlying asset.
///
/// Each call moves value between an account and the pool's custody and
/// either succeeds exactly for the requested amount or fails atomically —
/// the engine has no partial-transfer handling.  When one operation
/// issues two transfers (a swap moves the input in and the output out),
/// a failure of the second call aborts the operation with pool state
/// untouched; unwinding the first transfer is the host transaction
/// layer's responsibility.
pub trait AssetLedger {
    /// Moves `amount` from `from`'s account into pool custody.
    ///
    /// # Errors
    ///
    /// Returns a [`LedgerError`] and moves nothing if the transfer cannot
    /// be performed in full.
    fn transfer_in(&mut self, from: &AccountId, amount: Amount) -> Result<(), LedgerError>;

    /// Pays `amount` out of pool custody to `to`'s account.
    ///
    /// # Errors
    ///
    /// Returns a [`LedgerError`] and moves nothing if the payout cannot
    /// be performed in full.
    fn transfer_out(&mut self, to: &AccountId, amount: Amount) -> Result<(), LedgerError>;
}
