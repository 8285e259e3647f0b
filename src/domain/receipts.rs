//! Validated outcomes of the three mutating operations.

use core::fmt;

use super::{Amount, Shares, SwapDirection};
use crate::error::{PoolError, Result};

/// The outcome of a committed swap.
///
/// # Invariants
///
/// - `amount_in > 0` and `amount_out > 0`.
/// - `fee < amount_in` — the fee is carved out of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapReceipt {
    direction: SwapDirection,
    amount_in: Amount,
    amount_out: Amount,
    fee: Amount,
}

impl SwapReceipt {
    /// Creates a new `SwapReceipt` with validated invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::ZeroAmount`] if either amount is zero, or if
    /// `fee >= amount_in`.
    pub const fn new(
        direction: SwapDirection,
        amount_in: Amount,
        amount_out: Amount,
        fee: Amount,
    ) -> Result<Self> {
        if amount_in.is_zero() {
            return Err(PoolError::ZeroAmount("swap receipt input must be positive"));
        }
        if amount_out.is_zero() {
            return Err(PoolError::ZeroAmount("swap receipt output must be positive"));
        }
        if fee.get() >= amount_in.get() {
            return Err(PoolError::ZeroAmount("swap fee must be below the input"));
        }
        Ok(Self {
            direction,
            amount_in,
            amount_out,
            fee,
        })
    }

    /// Returns the swap direction.
    #[must_use]
    pub const fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// Returns the full input amount, fee included.
    #[must_use]
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the output amount paid to the trader.
    #[must_use]
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns the fee retained by the pool, rounding remainder included.
    #[must_use]
    pub const fn fee(&self) -> Amount {
        self.fee
    }
}

impl fmt::Display for SwapReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapReceipt({}, in={}, out={}, fee={})",
            self.direction, self.amount_in, self.amount_out, self.fee
        )
    }
}

/// The outcome of a committed liquidity deposit.
///
/// The consumed amounts are what the engine actually pulled from the
/// provider — at most the offered amounts, pro-rata to the minted shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DepositReceipt {
    shares_minted: Shares,
    consumed_a: Amount,
    consumed_b: Amount,
}

impl DepositReceipt {
    /// Creates a new `DepositReceipt` with validated invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::ZeroAmount`] if no shares were minted or
    /// either consumed amount is zero — a committed deposit always moves
    /// both assets.
    pub const fn new(shares_minted: Shares, consumed_a: Amount, consumed_b: Amount) -> Result<Self> {
        if shares_minted.is_zero() {
            return Err(PoolError::ZeroAmount("deposit must mint shares"));
        }
        if consumed_a.is_zero() || consumed_b.is_zero() {
            return Err(PoolError::ZeroAmount("deposit must consume both assets"));
        }
        Ok(Self {
            shares_minted,
            consumed_a,
            consumed_b,
        })
    }

    /// Returns the shares credited to the provider.
    #[must_use]
    pub const fn shares_minted(&self) -> Shares {
        self.shares_minted
    }

    /// Returns the amount of asset A actually transferred in.
    #[must_use]
    pub const fn consumed_a(&self) -> Amount {
        self.consumed_a
    }

    /// Returns the amount of asset B actually transferred in.
    #[must_use]
    pub const fn consumed_b(&self) -> Amount {
        self.consumed_b
    }
}

impl fmt::Display for DepositReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DepositReceipt(shares={}, a={}, b={})",
            self.shares_minted, self.consumed_a, self.consumed_b
        )
    }
}

/// The outcome of a committed liquidity withdrawal.
///
/// Payouts are floored, so a very small burn against a large pool can
/// legitimately pay out zero of one asset — the remainder stays with the
/// pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WithdrawReceipt {
    amount_a: Amount,
    amount_b: Amount,
    shares_burned: Shares,
}

impl WithdrawReceipt {
    /// Creates a new `WithdrawReceipt`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::ZeroAmount`] if no shares were burned.
    pub const fn new(amount_a: Amount, amount_b: Amount, shares_burned: Shares) -> Result<Self> {
        if shares_burned.is_zero() {
            return Err(PoolError::ZeroAmount("withdrawal must burn shares"));
        }
        Ok(Self {
            amount_a,
            amount_b,
            shares_burned,
        })
    }

    /// Returns the asset-A payout.
    #[must_use]
    pub const fn amount_a(&self) -> Amount {
        self.amount_a
    }

    /// Returns the asset-B payout.
    #[must_use]
    pub const fn amount_b(&self) -> Amount {
        self.amount_b
    }

    /// Returns the shares burned from the provider.
    #[must_use]
    pub const fn shares_burned(&self) -> Shares {
        self.shares_burned
    }
}

impl fmt::Display for WithdrawReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WithdrawReceipt(a={}, b={}, shares={})",
            self.amount_a, self.amount_b, self.shares_burned
        )
    }
}
