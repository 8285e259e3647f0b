//! Raw asset amount with checked arithmetic.

use core::fmt;

use super::Rounding;

/// A non-negative asset amount in the ledger's smallest unit.
///
/// `Amount` carries no decimal or denomination information — the pool
/// records quantities, never custody mechanics.  All `u128` values are
/// valid amounts.
///
/// Arithmetic is checked: methods return `None` on overflow, underflow,
/// or division by zero instead of panicking, and callers map `None` to
/// [`PoolError::Overflow`](crate::error::PoolError::Overflow).
///
/// # Examples
///
/// ```
/// use basin_amm::domain::{Amount, Rounding};
///
/// let a = Amount::new(100);
/// let b = Amount::new(200);
/// assert_eq!(a.checked_add(&b), Some(Amount::new(300)));
/// assert_eq!(
///     b.checked_mul_div(&a, &Amount::new(3), Rounding::Down),
///     Some(Amount::new(6_666)),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates a new `Amount` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked multiplication. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_mul(&self, other: &Self) -> Option<Self> {
        match self.0.checked_mul(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked division with explicit rounding direction.
    ///
    /// Returns `None` if `divisor` is zero.
    #[must_use]
    pub const fn checked_div(&self, divisor: &Self, rounding: Rounding) -> Option<Self> {
        if divisor.0 == 0 {
            return None;
        }
        match rounding {
            Rounding::Down => Some(Self(self.0 / divisor.0)),
            Rounding::Up => {
                let q = self.0 / divisor.0;
                let r = self.0 % divisor.0;
                // q + 1 cannot overflow: r != 0 implies self < u128::MAX or divisor > 1.
                if r != 0 {
                    Some(Self(q + 1))
                } else {
                    Some(Self(q))
                }
            }
        }
    }

    /// Checked `self × mul / div` with explicit rounding direction.
    ///
    /// The pro-rata primitive behind every share and payout computation:
    /// `shares × reserve / total`, `amount × total / reserve`, and the
    /// fee complement all reduce to this shape.
    ///
    /// Returns `None` if the product overflows or `div` is zero.
    #[must_use]
    pub const fn checked_mul_div(&self, mul: &Self, div: &Self, rounding: Rounding) -> Option<Self> {
        match self.checked_mul(mul) {
            Some(product) => product.checked_div(div, rounding),
            None => None,
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Construction & accessors -------------------------------------------

    #[test]
    fn new_and_get() {
        assert_eq!(Amount::new(42).get(), 42);
    }

    #[test]
    fn constants() {
        assert_eq!(Amount::ZERO.get(), 0);
        assert_eq!(Amount::MAX.get(), u128::MAX);
        assert!(Amount::ZERO.is_zero());
        assert!(!Amount::new(1).is_zero());
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Amount::default(), Amount::ZERO);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Amount::new(1_000_000)), "1000000");
    }

    #[test]
    fn ordering() {
        assert!(Amount::new(1) < Amount::new(2));
        assert_eq!(Amount::new(5), Amount::new(5));
    }

    // -- checked_add / checked_sub ------------------------------------------

    #[test]
    fn add_normal() {
        assert_eq!(
            Amount::new(100).checked_add(&Amount::new(200)),
            Some(Amount::new(300))
        );
    }

    #[test]
    fn add_overflow() {
        assert_eq!(Amount::MAX.checked_add(&Amount::new(1)), None);
    }

    #[test]
    fn sub_normal() {
        assert_eq!(
            Amount::new(300).checked_sub(&Amount::new(100)),
            Some(Amount::new(200))
        );
    }

    #[test]
    fn sub_underflow() {
        assert_eq!(Amount::new(1).checked_sub(&Amount::new(2)), None);
    }

    // -- checked_mul --------------------------------------------------------

    #[test]
    fn mul_normal() {
        assert_eq!(
            Amount::new(100).checked_mul(&Amount::new(200)),
            Some(Amount::new(20_000))
        );
    }

    #[test]
    fn mul_overflow() {
        assert_eq!(Amount::MAX.checked_mul(&Amount::new(2)), None);
    }

    // -- checked_div --------------------------------------------------------

    #[test]
    fn div_remainder_round_down() {
        assert_eq!(
            Amount::new(10).checked_div(&Amount::new(3), Rounding::Down),
            Some(Amount::new(3))
        );
    }

    #[test]
    fn div_remainder_round_up() {
        assert_eq!(
            Amount::new(10).checked_div(&Amount::new(3), Rounding::Up),
            Some(Amount::new(4))
        );
    }

    #[test]
    fn div_exact_both_directions() {
        assert_eq!(
            Amount::new(100).checked_div(&Amount::new(10), Rounding::Down),
            Some(Amount::new(10))
        );
        assert_eq!(
            Amount::new(100).checked_div(&Amount::new(10), Rounding::Up),
            Some(Amount::new(10))
        );
    }

    #[test]
    fn div_by_zero() {
        assert_eq!(Amount::new(100).checked_div(&Amount::ZERO, Rounding::Down), None);
        assert_eq!(Amount::new(100).checked_div(&Amount::ZERO, Rounding::Up), None);
    }

    #[test]
    fn div_max_round_up() {
        // Exercises the remainder path at the top of the range.
        let floor = Amount::MAX.checked_div(&Amount::new(2), Rounding::Down);
        let ceil = Amount::MAX.checked_div(&Amount::new(2), Rounding::Up);
        assert_eq!(floor, Some(Amount::new(u128::MAX / 2)));
        assert_eq!(ceil, Some(Amount::new(u128::MAX / 2 + 1)));
    }

    #[test]
    fn div_larger_divisor() {
        assert_eq!(
            Amount::new(1).checked_div(&Amount::new(2), Rounding::Down),
            Some(Amount::ZERO)
        );
        assert_eq!(
            Amount::new(1).checked_div(&Amount::new(2), Rounding::Up),
            Some(Amount::new(1))
        );
    }

    // -- checked_mul_div ----------------------------------------------------

    #[test]
    fn mul_div_pro_rata() {
        // 70 shares of a 141-share claim on 200 units: floor vs ceil.
        let reserve = Amount::new(200);
        let shares = Amount::new(70);
        let total = Amount::new(141);
        assert_eq!(
            reserve.checked_mul_div(&shares, &total, Rounding::Down),
            Some(Amount::new(99))
        );
        assert_eq!(
            reserve.checked_mul_div(&shares, &total, Rounding::Up),
            Some(Amount::new(100))
        );
    }

    #[test]
    fn mul_div_overflow() {
        assert_eq!(
            Amount::MAX.checked_mul_div(&Amount::new(2), &Amount::new(2), Rounding::Down),
            None
        );
    }

    #[test]
    fn mul_div_by_zero() {
        assert_eq!(
            Amount::new(10).checked_mul_div(&Amount::new(10), &Amount::ZERO, Rounding::Down),
            None
        );
    }
}
