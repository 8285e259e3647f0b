//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use basin_amm::prelude::*;
//! ```

pub use crate::config::PoolConfig;
pub use crate::domain::{
    AccountId, Amount, DepositReceipt, FeeRate, Price, Rounding, Shares, SwapDirection,
    SwapReceipt, WithdrawReceipt,
};
pub use crate::error::{PoolError, Result};
pub use crate::event::{EventKind, PoolEvent};
pub use crate::ledger::{AssetLedger, InMemoryLedger, LedgerError};
pub use crate::pool::PoolEngine;
