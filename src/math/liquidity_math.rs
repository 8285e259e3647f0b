//! Share issuance and redemption math.
//!
//! Rounding policy is correctness-critical, not cosmetic: minted shares
//! and payouts floor, consumed deposits ceil — always in the pool's
//! favor, which is what prevents value extraction through repeated tiny
//! operations.

use crate::domain::{Amount, Rounding, Shares};
use crate::error::{PoolError, Result};

/// Integer square root via Newton's method.
#[must_use]
pub fn isqrt(n: u128) -> u128 {
    if n == 0 {
        return 0;
    }
    let mut x = n;
    let mut y = x.div_ceil(2);
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

/// Shares minted for the first deposit into an empty pool:
/// `⌊√(amount_a × amount_b)⌋`, the geometric mean of the two amounts.
///
/// Deterministic and independent of asset ordering; the deposit itself
/// establishes the initial price ratio `amount_b / amount_a`.
///
/// # Errors
///
/// - [`PoolError::ZeroAmount`] if either amount is zero.
/// - [`PoolError::Overflow`] if the product overflows.
pub fn bootstrap_shares(amount_a: Amount, amount_b: Amount) -> Result<Shares> {
    if amount_a.is_zero() || amount_b.is_zero() {
        return Err(PoolError::ZeroAmount("first deposit requires both assets"));
    }
    let product = amount_a
        .checked_mul(&amount_b)
        .ok_or(PoolError::Overflow("bootstrap product overflow"))?;
    Ok(Shares::new(isqrt(product.get())))
}

/// Shares minted for a deposit into a non-empty pool: the limiting-asset
/// rule `min(amount_a × total / reserve_a, amount_b × total / reserve_b)`,
/// both floored.
///
/// # Errors
///
/// - [`PoolError::RatioMismatch`] if the result is zero — the offered
///   amounts cannot be reconciled into even one share at the current
///   pool ratio.
/// - [`PoolError::Overflow`] if intermediate arithmetic overflows.
pub fn shares_for_deposit(
    amount_a: Amount,
    amount_b: Amount,
    reserve_a: Amount,
    reserve_b: Amount,
    total_shares: Shares,
) -> Result<Shares> {
    let total = total_shares.as_amount();
    let by_a = amount_a
        .checked_mul_div(&total, &reserve_a, Rounding::Down)
        .ok_or(PoolError::Overflow("share computation overflow for asset A"))?;
    let by_b = amount_b
        .checked_mul_div(&total, &reserve_b, Rounding::Down)
        .ok_or(PoolError::Overflow("share computation overflow for asset B"))?;

    let minted = core::cmp::min(by_a, by_b);
    if minted.is_zero() {
        return Err(PoolError::RatioMismatch(
            "amounts too small to mint a share at the current ratio",
        ));
    }
    Ok(Shares::new(minted.get()))
}

/// Deposit amounts actually consumed to back `shares`:
/// `⌈shares × reserve / total⌉` per asset.
///
/// Rounding up means the provider can never mint shares against less
/// than their pro-rata value.  Because `shares` was floored from the
/// offered amounts, the ceiling never exceeds what was offered.
///
/// # Errors
///
/// Returns [`PoolError::Overflow`] on intermediate overflow or a zero
/// `total_shares`.
pub fn consumed_for_shares(
    shares: Shares,
    reserve_a: Amount,
    reserve_b: Amount,
    total_shares: Shares,
) -> Result<(Amount, Amount)> {
    let (used_a, used_b) = pro_rata(shares, reserve_a, reserve_b, total_shares, Rounding::Up)?;
    Ok((used_a, used_b))
}

/// Redemption payouts for burning `shares`:
/// `⌊shares × reserve / total⌋` per asset.
///
/// Flooring the payout means rounding never favors the withdrawer.
/// Burning every outstanding share pays out both reserves exactly.
///
/// # Errors
///
/// Returns [`PoolError::Overflow`] on intermediate overflow or a zero
/// `total_shares`.
pub fn payout_for_shares(
    shares: Shares,
    reserve_a: Amount,
    reserve_b: Amount,
    total_shares: Shares,
) -> Result<(Amount, Amount)> {
    pro_rata(shares, reserve_a, reserve_b, total_shares, Rounding::Down)
}

fn pro_rata(
    shares: Shares,
    reserve_a: Amount,
    reserve_b: Amount,
    total_shares: Shares,
    rounding: Rounding,
) -> Result<(Amount, Amount)> {
    let shares = shares.as_amount();
    let total = total_shares.as_amount();
    let part_a = reserve_a
        .checked_mul_div(&shares, &total, rounding)
        .ok_or(PoolError::Overflow("pro-rata overflow for asset A"))?;
    let part_b = reserve_b
        .checked_mul_div(&shares, &total, rounding)
        .ok_or(PoolError::Overflow("pro-rata overflow for asset B"))?;
    Ok((part_a, part_b))
}
