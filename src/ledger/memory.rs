//! In-memory asset ledger for hosts and tests.

use std::collections::BTreeMap;

use super::{AssetLedger, LedgerError};
use crate::domain::{AccountId, Amount};

/// A self-contained [`AssetLedger`]: per-account balances plus a single
/// custody bucket holding everything the pool has taken in.
///
/// Stands in for an external token contract in hosts that keep the whole
/// system in process.  Accounts are created implicitly on first credit.
///
/// # Examples
///
/// ```
/// use basin_amm::domain::{AccountId, Amount};
/// use basin_amm::ledger::{AssetLedger, InMemoryLedger};
///
/// let alice = AccountId::from_bytes([1u8; 32]);
/// let mut ledger = InMemoryLedger::new();
/// ledger.credit(&alice, Amount::new(1_000)).expect("no overflow");
///
/// ledger.transfer_in(&alice, Amount::new(400)).expect("funded");
/// assert_eq!(ledger.balance_of(&alice), Amount::new(600));
/// assert_eq!(ledger.custody(), Amount::new(400));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    balances: BTreeMap<AccountId, u128>,
    custody: u128,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mints `amount` into `account`'s balance.
    ///
    /// Host-side funding hook; no pool operation calls this.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Overflow`] if the balance would overflow.
    pub fn credit(&mut self, account: &AccountId, amount: Amount) -> Result<(), LedgerError> {
        let balance = self.balances.entry(*account).or_insert(0);
        *balance = balance
            .checked_add(amount.get())
            .ok_or(LedgerError::Overflow)?;
        Ok(())
    }

    /// Returns `account`'s current balance (zero for unknown accounts).
    #[must_use]
    pub fn balance_of(&self, account: &AccountId) -> Amount {
        Amount::new(self.balances.get(account).copied().unwrap_or(0))
    }

    /// Returns the total value held in pool custody.
    #[must_use]
    pub const fn custody(&self) -> Amount {
        Amount::new(self.custody)
    }
}

impl AssetLedger for InMemoryLedger {
    fn transfer_in(&mut self, from: &AccountId, amount: Amount) -> Result<(), LedgerError> {
        let balance = self.balances.get(from).copied().unwrap_or(0);
        let debited = balance
            .checked_sub(amount.get())
            .ok_or(LedgerError::InsufficientFunds)?;
        let custody = self
            .custody
            .checked_add(amount.get())
            .ok_or(LedgerError::Overflow)?;
        self.balances.insert(*from, debited);
        self.custody = custody;
        Ok(())
    }

    fn transfer_out(&mut self, to: &AccountId, amount: Amount) -> Result<(), LedgerError> {
        let custody = self
            .custody
            .checked_sub(amount.get())
            .ok_or(LedgerError::InsufficientCustody)?;
        let balance = self.balances.get(to).copied().unwrap_or(0);
        let credited = balance
            .checked_add(amount.get())
            .ok_or(LedgerError::Overflow)?;
        self.custody = custody;
        self.balances.insert(*to, credited);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn alice() -> AccountId {
        AccountId::from_bytes([1u8; 32])
    }

    fn bob() -> AccountId {
        AccountId::from_bytes([2u8; 32])
    }

    // -- Funding & queries --------------------------------------------------

    #[test]
    fn new_ledger_is_empty() {
        let ledger = InMemoryLedger::new();
        assert_eq!(ledger.balance_of(&alice()), Amount::ZERO);
        assert_eq!(ledger.custody(), Amount::ZERO);
    }

    #[test]
    fn credit_accumulates() {
        let mut ledger = InMemoryLedger::new();
        let Ok(()) = ledger.credit(&alice(), Amount::new(100)) else {
            panic!("expected Ok");
        };
        let Ok(()) = ledger.credit(&alice(), Amount::new(50)) else {
            panic!("expected Ok");
        };
        assert_eq!(ledger.balance_of(&alice()), Amount::new(150));
    }

    #[test]
    fn credit_overflow_rejected() {
        let mut ledger = InMemoryLedger::new();
        let Ok(()) = ledger.credit(&alice(), Amount::MAX) else {
            panic!("expected Ok");
        };
        assert_eq!(
            ledger.credit(&alice(), Amount::new(1)),
            Err(LedgerError::Overflow)
        );
    }

    // -- transfer_in --------------------------------------------------------

    #[test]
    fn transfer_in_moves_to_custody() {
        let mut ledger = InMemoryLedger::new();
        let Ok(()) = ledger.credit(&alice(), Amount::new(1_000)) else {
            panic!("expected Ok");
        };
        let Ok(()) = ledger.transfer_in(&alice(), Amount::new(400)) else {
            panic!("expected Ok");
        };
        assert_eq!(ledger.balance_of(&alice()), Amount::new(600));
        assert_eq!(ledger.custody(), Amount::new(400));
    }

    #[test]
    fn transfer_in_insufficient_funds_moves_nothing() {
        let mut ledger = InMemoryLedger::new();
        let Ok(()) = ledger.credit(&alice(), Amount::new(100)) else {
            panic!("expected Ok");
        };
        assert_eq!(
            ledger.transfer_in(&alice(), Amount::new(101)),
            Err(LedgerError::InsufficientFunds)
        );
        assert_eq!(ledger.balance_of(&alice()), Amount::new(100));
        assert_eq!(ledger.custody(), Amount::ZERO);
    }

    #[test]
    fn transfer_in_from_unknown_account() {
        let mut ledger = InMemoryLedger::new();
        assert_eq!(
            ledger.transfer_in(&bob(), Amount::new(1)),
            Err(LedgerError::InsufficientFunds)
        );
    }

    // -- transfer_out -------------------------------------------------------

    #[test]
    fn transfer_out_pays_from_custody() {
        let mut ledger = InMemoryLedger::new();
        let Ok(()) = ledger.credit(&alice(), Amount::new(500)) else {
            panic!("expected Ok");
        };
        let Ok(()) = ledger.transfer_in(&alice(), Amount::new(500)) else {
            panic!("expected Ok");
        };
        let Ok(()) = ledger.transfer_out(&bob(), Amount::new(200)) else {
            panic!("expected Ok");
        };
        assert_eq!(ledger.balance_of(&bob()), Amount::new(200));
        assert_eq!(ledger.custody(), Amount::new(300));
    }

    #[test]
    fn transfer_out_beyond_custody_moves_nothing() {
        let mut ledger = InMemoryLedger::new();
        assert_eq!(
            ledger.transfer_out(&bob(), Amount::new(1)),
            Err(LedgerError::InsufficientCustody)
        );
        assert_eq!(ledger.balance_of(&bob()), Amount::ZERO);
    }

    #[test]
    fn zero_transfers_are_no_ops() {
        let mut ledger = InMemoryLedger::new();
        let Ok(()) = ledger.transfer_in(&alice(), Amount::ZERO) else {
            panic!("expected Ok");
        };
        let Ok(()) = ledger.transfer_out(&alice(), Amount::ZERO) else {
            panic!("expected Ok");
        };
        assert_eq!(ledger.custody(), Amount::ZERO);
    }
}
