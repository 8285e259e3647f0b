//! Notifications emitted after committed state transitions.
//!
//! Events are observations, not state: the engine pushes one onto its
//! internal buffer only after the corresponding reserve/share mutation
//! has committed, and the host's indexing or monitoring layer drains
//! them via [`PoolEngine::drain_events`](crate::pool::PoolEngine::drain_events).
//! A failed operation never emits.

use core::fmt;

use crate::domain::{AccountId, Amount, Shares, SwapDirection};

/// Discriminant for [`PoolEvent`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// A liquidity deposit committed.
    LiquidityAdded,
    /// A liquidity withdrawal committed.
    LiquidityRemoved,
    /// A swap committed.
    Swap,
}

/// A committed pool operation, as seen by an external observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PoolEvent {
    /// Shares were minted against a deposit.
    LiquidityAdded {
        /// The depositing provider.
        provider: AccountId,
        /// Asset A actually consumed.
        amount_a: Amount,
        /// Asset B actually consumed.
        amount_b: Amount,
        /// Shares credited to the provider.
        shares_minted: Shares,
    },
    /// Shares were burned for a payout.
    LiquidityRemoved {
        /// The withdrawing provider.
        provider: AccountId,
        /// Asset A paid out.
        amount_a: Amount,
        /// Asset B paid out.
        amount_b: Amount,
        /// Shares burned from the provider.
        shares_burned: Shares,
    },
    /// Reserves were exchanged against a trader's input.
    Swap {
        /// The trading account.
        trader: AccountId,
        /// Which asset entered the pool.
        direction: SwapDirection,
        /// Full input, fee included.
        amount_in: Amount,
        /// Output paid to the trader.
        amount_out: Amount,
    },
}

impl PoolEvent {
    /// Returns the [`EventKind`] descriptor for this event.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::LiquidityAdded { .. } => EventKind::LiquidityAdded,
            Self::LiquidityRemoved { .. } => EventKind::LiquidityRemoved,
            Self::Swap { .. } => EventKind::Swap,
        }
    }

    /// Returns the acting account.
    #[must_use]
    pub const fn actor(&self) -> AccountId {
        match self {
            Self::LiquidityAdded { provider, .. } | Self::LiquidityRemoved { provider, .. } => {
                *provider
            }
            Self::Swap { trader, .. } => *trader,
        }
    }
}

impl fmt::Display for PoolEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LiquidityAdded {
                provider,
                amount_a,
                amount_b,
                shares_minted,
            } => write!(
                f,
                "LiquidityAdded(provider={provider}, a={amount_a}, b={amount_b}, shares={shares_minted})"
            ),
            Self::LiquidityRemoved {
                provider,
                amount_a,
                amount_b,
                shares_burned,
            } => write!(
                f,
                "LiquidityRemoved(provider={provider}, a={amount_a}, b={amount_b}, shares={shares_burned})"
            ),
            Self::Swap {
                trader,
                direction,
                amount_in,
                amount_out,
            } => write!(
                f,
                "Swap(trader={trader}, {direction}, in={amount_in}, out={amount_out})"
            ),
        }
    }
}
