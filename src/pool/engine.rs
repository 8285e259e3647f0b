//! Constant-product pool engine.
//!
//! One `PoolEngine` instance is one trading pair.  The engine is a
//! strictly single-threaded state machine: every operation runs to
//! completion — collaborator calls included — before the next one is
//! observed, and the host serializes concurrent callers (one engine per
//! serialized execution context).
//!
//! # Commit discipline
//!
//! Every mutating operation follows the same order:
//!
//! 1. validate inputs and compute the complete next state,
//! 2. instruct the asset ledger(s) to move the exact validated amounts,
//! 3. commit the reserve/share mutation,
//! 4. emit the event.
//!
//! A failure at any step leaves pool state exactly as it was.
//!
//! # Invariants
//!
//! - `total_shares == 0 ⇔ reserve_a == 0 ∧ reserve_b == 0`
//! - the share balances sum to `total_shares`
//! - `reserve_a × reserve_b` never decreases across swaps; the growth is
//!   the fee revenue, realized as increased redemption value per share

use std::collections::BTreeMap;

use log::debug;

use crate::config::PoolConfig;
use crate::domain::{
    AccountId, Amount, DepositReceipt, FeeRate, Price, Shares, SwapDirection, SwapReceipt,
    WithdrawReceipt,
};
use crate::error::{PoolError, Result};
use crate::event::PoolEvent;
use crate::ledger::AssetLedger;
use crate::math::{liquidity_math, swap_math};

/// A two-asset constant-product liquidity pool.
///
/// Holds the reserve and share ledger, the pluggable [`AssetLedger`]
/// collaborator for each asset, and the pending event buffer.  Created
/// empty; the first deposit establishes reserves and the initial price.
///
/// # Examples
///
/// ```
/// use basin_amm::config::PoolConfig;
/// use basin_amm::domain::{AccountId, Amount};
/// use basin_amm::ledger::InMemoryLedger;
/// use basin_amm::pool::PoolEngine;
///
/// # fn main() -> basin_amm::error::Result<()> {
/// let alice = AccountId::from_bytes([1u8; 32]);
/// let mut ledger_a = InMemoryLedger::new();
/// let mut ledger_b = InMemoryLedger::new();
/// ledger_a.credit(&alice, Amount::new(1_000))?;
/// ledger_b.credit(&alice, Amount::new(2_000))?;
///
/// let mut pool = PoolEngine::new(PoolConfig::default(), ledger_a, ledger_b);
/// let receipt = pool.add_liquidity(alice, Amount::new(1_000), Amount::new(2_000))?;
/// assert!(receipt.shares_minted().get() > 0);
/// assert_eq!(pool.price().get(), 2.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PoolEngine<L: AssetLedger> {
    config: PoolConfig,
    ledger_a: L,
    ledger_b: L,
    reserve_a: Amount,
    reserve_b: Amount,
    total_shares: Shares,
    share_balances: BTreeMap<AccountId, Shares>,
    events: Vec<PoolEvent>,
    in_flight: bool,
}

impl<L: AssetLedger> PoolEngine<L> {
    /// Creates an empty pool over the two asset ledgers.
    pub fn new(config: PoolConfig, ledger_a: L, ledger_b: L) -> Self {
        Self {
            config,
            ledger_a,
            ledger_b,
            reserve_a: Amount::ZERO,
            reserve_b: Amount::ZERO,
            total_shares: Shares::ZERO,
            share_balances: BTreeMap::new(),
            events: Vec::new(),
            in_flight: false,
        }
    }

    // -- Queries ------------------------------------------------------------

    /// Returns a `(reserve_a, reserve_b)` snapshot.
    #[must_use]
    pub const fn reserves(&self) -> (Amount, Amount) {
        (self.reserve_a, self.reserve_b)
    }

    /// Returns the spot price `reserve_b / reserve_a`, or [`Price::ZERO`]
    /// for an empty pool.
    #[must_use]
    pub fn price(&self) -> Price {
        Price::from_reserves(self.reserve_b, self.reserve_a)
    }

    /// Returns the total outstanding liquidity shares.
    #[must_use]
    pub const fn total_liquidity(&self) -> Shares {
        self.total_shares
    }

    /// Returns `provider`'s share balance (zero for unknown providers).
    #[must_use]
    pub fn shares_of(&self, provider: &AccountId) -> Shares {
        self.share_balances
            .get(provider)
            .copied()
            .unwrap_or(Shares::ZERO)
    }

    /// Returns the pool's fee rate.
    #[must_use]
    pub const fn fee(&self) -> FeeRate {
        self.config.fee()
    }

    /// Returns the asset-A ledger.
    #[must_use]
    pub const fn ledger_a(&self) -> &L {
        &self.ledger_a
    }

    /// Returns the asset-B ledger.
    #[must_use]
    pub const fn ledger_b(&self) -> &L {
        &self.ledger_b
    }

    /// Quotes a swap of asset A for asset B without executing it.
    ///
    /// Identical arithmetic to [`swap_a_for_b`](Self::swap_a_for_b),
    /// fee and rounding included.
    ///
    /// # Errors
    ///
    /// Same failure modes as the swap itself, minus the ledger.
    pub fn quote_a_for_b(&self, amount_in: Amount) -> Result<Amount> {
        if self.reserve_a.is_zero() || self.reserve_b.is_zero() {
            return Err(PoolError::EmptyPool);
        }
        swap_math::amount_out(amount_in, self.reserve_a, self.reserve_b, self.config.fee())
    }

    /// Quotes a swap of asset B for asset A without executing it.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`swap_b_for_a`](Self::swap_b_for_a), minus
    /// the ledger.
    pub fn quote_b_for_a(&self, amount_in: Amount) -> Result<Amount> {
        if self.reserve_a.is_zero() || self.reserve_b.is_zero() {
            return Err(PoolError::EmptyPool);
        }
        swap_math::amount_out(amount_in, self.reserve_b, self.reserve_a, self.config.fee())
    }

    // -- Events ---------------------------------------------------------------

    /// Returns the committed events not yet drained, oldest first.
    #[must_use]
    pub fn events(&self) -> &[PoolEvent] {
        &self.events
    }

    /// Removes and returns all pending events, oldest first.
    pub fn drain_events(&mut self) -> Vec<PoolEvent> {
        core::mem::take(&mut self.events)
    }

    // -- Operations -----------------------------------------------------------

    /// Deposits liquidity and mints shares to `provider`.
    ///
    /// The first deposit accepts any positive pair and mints
    /// `⌊√(amount_a × amount_b)⌋` shares, establishing the initial price
    /// `amount_b / amount_a`.  Subsequent deposits mint by the
    /// limiting-asset rule and consume only the pro-rata amounts backing
    /// the minted shares — surplus of the over-offered asset is never
    /// transferred.
    ///
    /// # Errors
    ///
    /// - [`PoolError::ZeroAmount`] if either amount is zero.
    /// - [`PoolError::RatioMismatch`] if the amounts cannot mint a single
    ///   share at the current ratio.
    /// - [`PoolError::LedgerTransfer`] if a collaborator transfer fails;
    ///   pool state is untouched.
    /// - [`PoolError::Overflow`] on arithmetic overflow.
    /// - [`PoolError::ReentrantCall`] if another operation is mid-flight.
    pub fn add_liquidity(
        &mut self,
        provider: AccountId,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<DepositReceipt> {
        self.enter()?;
        let result = self.add_liquidity_locked(provider, amount_a, amount_b);
        self.in_flight = false;
        result
    }

    /// Burns `shares` from `provider` and pays out the proportional slice
    /// of both reserves.
    ///
    /// Payouts floor (`⌊shares × reserve / total⌋`), so rounding favors
    /// the pool, never the withdrawer.
    ///
    /// # Errors
    ///
    /// - [`PoolError::ZeroAmount`] if `shares` is zero.
    /// - [`PoolError::InsufficientShares`] if `provider` holds fewer
    ///   shares than requested.
    /// - [`PoolError::LedgerTransfer`] if a payout fails; pool state is
    ///   untouched.
    /// - [`PoolError::ReentrantCall`] if another operation is mid-flight.
    pub fn remove_liquidity(
        &mut self,
        provider: AccountId,
        shares: Shares,
    ) -> Result<WithdrawReceipt> {
        self.enter()?;
        let result = self.remove_liquidity_locked(provider, shares);
        self.in_flight = false;
        result
    }

    /// Swaps `amount_in` of asset A for asset B.
    ///
    /// The full input (fee included) enters the A reserve; the output
    /// leaves the B reserve.  The product of reserves never decreases.
    ///
    /// # Errors
    ///
    /// - [`PoolError::ZeroAmount`] if `amount_in` is zero.
    /// - [`PoolError::EmptyPool`] if the pool has no reserves.
    /// - [`PoolError::InsufficientOutput`] if the output rounds to zero.
    /// - [`PoolError::LedgerTransfer`] if a collaborator transfer fails;
    ///   pool state is untouched.
    /// - [`PoolError::ReentrantCall`] if another operation is mid-flight.
    pub fn swap_a_for_b(&mut self, trader: AccountId, amount_in: Amount) -> Result<SwapReceipt> {
        self.enter()?;
        let result = self.swap_locked(trader, amount_in, SwapDirection::AToB);
        self.in_flight = false;
        result
    }

    /// Swaps `amount_in` of asset B for asset A.
    ///
    /// Symmetric to [`swap_a_for_b`](Self::swap_a_for_b) with the roles
    /// of the reserves reversed.
    ///
    /// # Errors
    ///
    /// Same as [`swap_a_for_b`](Self::swap_a_for_b).
    pub fn swap_b_for_a(&mut self, trader: AccountId, amount_in: Amount) -> Result<SwapReceipt> {
        self.enter()?;
        let result = self.swap_locked(trader, amount_in, SwapDirection::BToA);
        self.in_flight = false;
        result
    }

    // -- Internals ------------------------------------------------------------

    /// Marks the engine as mid-operation.
    ///
    /// `&mut self` already serializes callers, but the source model runs
    /// on a platform where collaborator calls can re-enter, so the
    /// explicit flag is kept.
    fn enter(&mut self) -> Result<()> {
        if self.in_flight {
            return Err(PoolError::ReentrantCall);
        }
        self.in_flight = true;
        Ok(())
    }

    fn add_liquidity_locked(
        &mut self,
        provider: AccountId,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<DepositReceipt> {
        if amount_a.is_zero() {
            return Err(PoolError::ZeroAmount("deposit amount A must be positive"));
        }
        if amount_b.is_zero() {
            return Err(PoolError::ZeroAmount("deposit amount B must be positive"));
        }

        let (minted, used_a, used_b) = if self.total_shares.is_zero() {
            let minted = liquidity_math::bootstrap_shares(amount_a, amount_b)?;
            (minted, amount_a, amount_b)
        } else {
            let minted = liquidity_math::shares_for_deposit(
                amount_a,
                amount_b,
                self.reserve_a,
                self.reserve_b,
                self.total_shares,
            )?;
            let (used_a, used_b) = liquidity_math::consumed_for_shares(
                minted,
                self.reserve_a,
                self.reserve_b,
                self.total_shares,
            )?;
            (minted, used_a, used_b)
        };

        // Complete next state before any transfer, so an arithmetic
        // failure cannot leave funds moved.
        let new_reserve_a = self
            .reserve_a
            .checked_add(&used_a)
            .ok_or(PoolError::Overflow("reserve A overflow on deposit"))?;
        let new_reserve_b = self
            .reserve_b
            .checked_add(&used_b)
            .ok_or(PoolError::Overflow("reserve B overflow on deposit"))?;
        let new_total = self
            .total_shares
            .checked_add(&minted)
            .ok_or(PoolError::Overflow("total shares overflow on deposit"))?;
        let new_balance = self
            .shares_of(&provider)
            .checked_add(&minted)
            .ok_or(PoolError::Overflow("provider balance overflow"))?;

        self.ledger_a.transfer_in(&provider, used_a)?;
        self.ledger_b.transfer_in(&provider, used_b)?;

        self.reserve_a = new_reserve_a;
        self.reserve_b = new_reserve_b;
        self.total_shares = new_total;
        self.share_balances.insert(provider, new_balance);

        debug!(
            "deposit committed: provider={provider} a={used_a} b={used_b} minted={minted} total={new_total}"
        );
        self.events.push(PoolEvent::LiquidityAdded {
            provider,
            amount_a: used_a,
            amount_b: used_b,
            shares_minted: minted,
        });
        debug_assert!(self.invariants_hold(), "pool accounting invariant violated");

        DepositReceipt::new(minted, used_a, used_b)
    }

    fn remove_liquidity_locked(
        &mut self,
        provider: AccountId,
        shares: Shares,
    ) -> Result<WithdrawReceipt> {
        if shares.is_zero() {
            return Err(PoolError::ZeroAmount("shares to burn must be positive"));
        }
        let balance = self.shares_of(&provider);
        if balance < shares {
            return Err(PoolError::InsufficientShares);
        }

        let (amount_a, amount_b) = liquidity_math::payout_for_shares(
            shares,
            self.reserve_a,
            self.reserve_b,
            self.total_shares,
        )?;

        // Floored payouts can never exceed the reserves, and the balance
        // check above bounds the burn.
        let new_reserve_a = self
            .reserve_a
            .checked_sub(&amount_a)
            .ok_or(PoolError::Overflow("reserve A underflow on withdrawal"))?;
        let new_reserve_b = self
            .reserve_b
            .checked_sub(&amount_b)
            .ok_or(PoolError::Overflow("reserve B underflow on withdrawal"))?;
        let new_total = self
            .total_shares
            .checked_sub(&shares)
            .ok_or(PoolError::Overflow("total shares underflow on withdrawal"))?;
        let new_balance = balance
            .checked_sub(&shares)
            .ok_or(PoolError::Overflow("provider balance underflow"))?;

        self.ledger_a.transfer_out(&provider, amount_a)?;
        self.ledger_b.transfer_out(&provider, amount_b)?;

        self.reserve_a = new_reserve_a;
        self.reserve_b = new_reserve_b;
        self.total_shares = new_total;
        if new_balance.is_zero() {
            self.share_balances.remove(&provider);
        } else {
            self.share_balances.insert(provider, new_balance);
        }

        debug!(
            "withdrawal committed: provider={provider} a={amount_a} b={amount_b} burned={shares} total={new_total}"
        );
        self.events.push(PoolEvent::LiquidityRemoved {
            provider,
            amount_a,
            amount_b,
            shares_burned: shares,
        });
        debug_assert!(self.invariants_hold(), "pool accounting invariant violated");

        WithdrawReceipt::new(amount_a, amount_b, shares)
    }

    fn swap_locked(
        &mut self,
        trader: AccountId,
        amount_in: Amount,
        direction: SwapDirection,
    ) -> Result<SwapReceipt> {
        if amount_in.is_zero() {
            return Err(PoolError::ZeroAmount("swap input must be positive"));
        }
        if self.reserve_a.is_zero() || self.reserve_b.is_zero() {
            return Err(PoolError::EmptyPool);
        }

        let (reserve_in, reserve_out) = match direction {
            SwapDirection::AToB => (self.reserve_a, self.reserve_b),
            SwapDirection::BToA => (self.reserve_b, self.reserve_a),
        };

        let amount_out =
            swap_math::amount_out(amount_in, reserve_in, reserve_out, self.config.fee())?;
        let net = self.config.fee().net_input(amount_in)?;
        let fee = amount_in
            .checked_sub(&net)
            .ok_or(PoolError::Overflow("fee underflow"))?;

        let new_reserve_in = reserve_in
            .checked_add(&amount_in)
            .ok_or(PoolError::Overflow("input reserve overflow on swap"))?;
        let new_reserve_out = reserve_out
            .checked_sub(&amount_out)
            .ok_or(PoolError::Overflow("output reserve underflow on swap"))?;

        {
            let (ledger_in, ledger_out) = match direction {
                SwapDirection::AToB => (&mut self.ledger_a, &mut self.ledger_b),
                SwapDirection::BToA => (&mut self.ledger_b, &mut self.ledger_a),
            };
            ledger_in.transfer_in(&trader, amount_in)?;
            ledger_out.transfer_out(&trader, amount_out)?;
        }

        match direction {
            SwapDirection::AToB => {
                self.reserve_a = new_reserve_in;
                self.reserve_b = new_reserve_out;
            }
            SwapDirection::BToA => {
                self.reserve_b = new_reserve_in;
                self.reserve_a = new_reserve_out;
            }
        }

        debug!(
            "swap committed: {direction} trader={trader} in={amount_in} out={amount_out} fee={fee} reserves=({},{})",
            self.reserve_a, self.reserve_b
        );
        self.events.push(PoolEvent::Swap {
            trader,
            direction,
            amount_in,
            amount_out,
        });
        debug_assert!(self.invariants_hold(), "pool accounting invariant violated");

        SwapReceipt::new(direction, amount_in, amount_out, fee)
    }

    /// Checks the accounting invariants; debug builds assert this after
    /// every commit.
    fn invariants_hold(&self) -> bool {
        let shares_empty = self.total_shares.is_zero();
        let reserves_empty = self.reserve_a.is_zero() && self.reserve_b.is_zero();
        if shares_empty != reserves_empty {
            return false;
        }
        let mut sum: u128 = 0;
        for shares in self.share_balances.values() {
            match sum.checked_add(shares.get()) {
                Some(s) => sum = s,
                None => return false,
            }
        }
        sum == self.total_shares.get()
    }
}
