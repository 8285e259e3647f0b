//! Fee-adjusted constant-product swap output.

use log::trace;

use crate::domain::{Amount, FeeRate, Rounding};
use crate::error::{PoolError, Result};

/// Computes the swap output for `amount_in` against the given reserves.
///
/// This is the closed form of solving
/// `(reserve_in + net) × (reserve_out − out) = reserve_in × reserve_out`
/// for `out`, with the fee taken off the input first:
///
/// ```text
/// net = amount_in × (fee_den − fee_num) / fee_den    (floor)
/// out = reserve_out × net / (reserve_in + net)       (floor)
/// ```
///
/// Both divisions floor, so the pool never pays out more than the exact
/// invariant allows.  The swap path uses this function unchanged —
/// quotes are exact, not approximate.
///
/// # Errors
///
/// - [`PoolError::ZeroAmount`] if `amount_in` is zero.
/// - [`PoolError::ZeroReserve`] if `reserve_in` is zero.
/// - [`PoolError::InsufficientOutput`] if the output (or the net input)
///   rounds to zero.
/// - [`PoolError::Overflow`] if intermediate arithmetic overflows.
///
/// # Examples
///
/// ```
/// use basin_amm::domain::{Amount, FeeRate};
/// use basin_amm::math::swap_math;
///
/// let out = swap_math::amount_out(
///     Amount::new(10),
///     Amount::new(100),
///     Amount::new(200),
///     FeeRate::STANDARD,
/// )
/// .expect("valid quote");
/// // net = ⌊10 × 9970 / 10000⌋ = 9; out = ⌊200 × 9 / 109⌋ = 16
/// assert_eq!(out, Amount::new(16));
/// ```
pub fn amount_out(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee: FeeRate,
) -> Result<Amount> {
    if amount_in.is_zero() {
        return Err(PoolError::ZeroAmount("swap input must be positive"));
    }
    if reserve_in.is_zero() {
        return Err(PoolError::ZeroReserve);
    }

    let net = fee.net_input(amount_in)?;
    if net.is_zero() {
        return Err(PoolError::InsufficientOutput);
    }

    let denominator = reserve_in
        .checked_add(&net)
        .ok_or(PoolError::Overflow("swap denominator overflow"))?;
    let out = reserve_out
        .checked_mul_div(&net, &denominator, Rounding::Down)
        .ok_or(PoolError::Overflow("swap numerator overflow"))?;

    if out.is_zero() {
        return Err(PoolError::InsufficientOutput);
    }

    trace!("quote: in={amount_in} net={net} reserves=({reserve_in},{reserve_out}) out={out}");
    Ok(out)
}
