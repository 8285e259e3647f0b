//! Property-based tests using `proptest` for pool invariant validation.
//!
//! Covers the engine's core guarantees:
//!
//! 1. **Fee growth** — `reserve_a × reserve_b` never decreases across
//!    arbitrary swap sequences.
//! 2. **Share conservation** — swaps never change total liquidity.
//! 3. **Round trip** — deposit then burn the minted shares returns at
//!    most what was consumed.
//! 4. **Quote identity** — a quote and the swap it precedes agree
//!    exactly, including when both reject.
//! 5. **Price preservation** — an exact-ratio deposit leaves the spot
//!    price unchanged.

use proptest::prelude::*;

use crate::config::PoolConfig;
use crate::domain::{AccountId, Amount, Shares};
use crate::ledger::InMemoryLedger;
use crate::pool::PoolEngine;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const FUNDING: u128 = 1_000_000_000_000;

fn alice() -> AccountId {
    AccountId::from_bytes([1u8; 32])
}

fn bob() -> AccountId {
    AccountId::from_bytes([2u8; 32])
}

/// A pool seeded with alice's `(ra, rb)` deposit; both accounts hold
/// plenty of both assets.
fn seeded(ra: u128, rb: u128) -> PoolEngine<InMemoryLedger> {
    let mut ledger_a = InMemoryLedger::new();
    let mut ledger_b = InMemoryLedger::new();
    for account in [alice(), bob()] {
        let Ok(()) = ledger_a.credit(&account, Amount::new(FUNDING)) else {
            panic!("credit A");
        };
        let Ok(()) = ledger_b.credit(&account, Amount::new(FUNDING)) else {
            panic!("credit B");
        };
    }
    let mut pool = PoolEngine::new(PoolConfig::default(), ledger_a, ledger_b);
    let Ok(_) = pool.add_liquidity(alice(), Amount::new(ra), Amount::new(rb)) else {
        panic!("seed deposit");
    };
    pool
}

fn product(pool: &PoolEngine<InMemoryLedger>) -> u128 {
    let (a, b) = pool.reserves();
    // Reserves stay far below 2⁶⁴ under these strategies.
    a.get() * b.get()
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Reserve seeds away from the extremes.
fn reserve_pair() -> impl Strategy<Value = (u128, u128)> {
    (1_000u128..=10_000_000u128, 1_000u128..=10_000_000u128)
}

/// Swap inputs from dust to pool-moving.
fn swap_amount() -> impl Strategy<Value = u128> {
    1u128..=100_000u128
}

/// Deposit legs for the round-trip property.
fn deposit_amount() -> impl Strategy<Value = u128> {
    1u128..=1_000_000u128
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn product_never_decreases_across_swaps(
        (ra, rb) in reserve_pair(),
        amounts in proptest::collection::vec(swap_amount(), 1..8),
    ) {
        let mut pool = seeded(ra, rb);
        let mut k = product(&pool);
        for (i, amount) in amounts.iter().enumerate() {
            // Failed swaps leave state untouched, so the bound holds
            // whether or not each one commits.
            let _ = if i % 2 == 0 {
                pool.swap_a_for_b(bob(), Amount::new(*amount))
            } else {
                pool.swap_b_for_a(bob(), Amount::new(*amount))
            };
            let k_now = product(&pool);
            prop_assert!(k_now >= k, "k regressed: {k_now} < {k}");
            k = k_now;
        }
    }

    #[test]
    fn swaps_never_change_total_shares(
        (ra, rb) in reserve_pair(),
        amounts in proptest::collection::vec(swap_amount(), 1..8),
    ) {
        let mut pool = seeded(ra, rb);
        let total = pool.total_liquidity();
        for amount in amounts {
            let _ = pool.swap_a_for_b(bob(), Amount::new(amount));
            let _ = pool.swap_b_for_a(bob(), Amount::new(amount));
            prop_assert_eq!(pool.total_liquidity(), total);
        }
    }

    #[test]
    fn round_trip_returns_no_more_than_deposited(
        (ra, rb) in reserve_pair(),
        da in deposit_amount(),
        db in deposit_amount(),
    ) {
        let mut pool = seeded(ra, rb);
        // Dust deposits may be rejected outright; that satisfies the
        // property trivially.
        if let Ok(receipt) = pool.add_liquidity(bob(), Amount::new(da), Amount::new(db)) {
            let Ok(back) = pool.remove_liquidity(bob(), receipt.shares_minted()) else {
                panic!("withdrawal of freshly minted shares");
            };
            prop_assert!(back.amount_a() <= receipt.consumed_a());
            prop_assert!(back.amount_b() <= receipt.consumed_b());
            prop_assert_eq!(pool.shares_of(&bob()), Shares::ZERO);
        }
    }

    #[test]
    fn quote_equals_execution((ra, rb) in reserve_pair(), amount in swap_amount()) {
        let mut pool = seeded(ra, rb);
        match pool.quote_a_for_b(Amount::new(amount)) {
            Ok(quoted) => {
                let Ok(receipt) = pool.swap_a_for_b(bob(), Amount::new(amount)) else {
                    panic!("swap must succeed when its quote does");
                };
                prop_assert_eq!(receipt.amount_out(), quoted);
            }
            Err(quote_err) => {
                let Err(swap_err) = pool.swap_a_for_b(bob(), Amount::new(amount)) else {
                    panic!("swap must reject when its quote does");
                };
                prop_assert_eq!(swap_err, quote_err);
            }
        }
    }

    #[test]
    fn proportional_deposit_preserves_price((ra, rb) in reserve_pair()) {
        let mut pool = seeded(ra, rb);
        let before = pool.price();
        // Doubling both reserves is always an exact-ratio deposit.
        let Ok(receipt) = pool.add_liquidity(bob(), Amount::new(ra), Amount::new(rb)) else {
            panic!("exact-ratio deposit");
        };
        prop_assert_eq!(receipt.consumed_a(), Amount::new(ra));
        prop_assert_eq!(receipt.consumed_b(), Amount::new(rb));
        prop_assert_eq!(pool.price(), before);
    }
}
