//! # Basin AMM
//!
//! A two-asset constant-product liquidity pool engine: reserve and share
//! bookkeeping, liquidity issuance and redemption, fee-bearing swaps,
//! price and quote queries, and the event stream a host indexes.
//!
//! The engine is a pure accounting object.  Asset custody lives behind
//! the [`AssetLedger`](ledger::AssetLedger) collaborator (one instance
//! per asset); authorization, transaction submission, and persistence
//! are the host's concern.
//!
//! # Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! basin-amm = "0.1"
//! ```
//!
//! ## Seed a pool and trade against it
//!
//! ```rust
//! use basin_amm::config::PoolConfig;
//! use basin_amm::domain::{AccountId, Amount};
//! use basin_amm::ledger::InMemoryLedger;
//! use basin_amm::pool::PoolEngine;
//!
//! # fn main() -> basin_amm::error::Result<()> {
//! let alice = AccountId::from_bytes([1u8; 32]);
//! let bob = AccountId::from_bytes([2u8; 32]);
//!
//! // 1. Fund the asset ledgers (in production these wrap real ledgers).
//! let mut ledger_a = InMemoryLedger::new();
//! let mut ledger_b = InMemoryLedger::new();
//! ledger_a.credit(&alice, Amount::new(1_000))?;
//! ledger_b.credit(&alice, Amount::new(2_000))?;
//! ledger_a.credit(&bob, Amount::new(100))?;
//!
//! // 2. Create an empty pool with the standard 0.30% fee.
//! let mut pool = PoolEngine::new(PoolConfig::default(), ledger_a, ledger_b);
//!
//! // 3. Alice's first deposit establishes reserves and the price.
//! let deposit = pool.add_liquidity(alice, Amount::new(1_000), Amount::new(2_000))?;
//! assert_eq!(deposit.shares_minted().get(), 1_414); // ⌊√(1000 × 2000)⌋
//! assert_eq!(pool.price().get(), 2.0);
//!
//! // 4. Bob sells 100 A for B against the pool.
//! let swap = pool.swap_a_for_b(bob, Amount::new(100))?;
//! assert_eq!(swap.amount_out(), Amount::new(180));
//!
//! // 5. The host drains the committed events for indexing.
//! assert_eq!(pool.drain_events().len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │ Pool Client  │  one operation at a time, host-serialized
//! └──────┬──────┘
//!        │ add/remove liquidity, swap, query
//!        ▼
//! ┌─────────────┐       ┌──────────────┐
//! │  PoolEngine  │──────▶│ AssetLedger   │  one per asset; transfer
//! │  (accounting)│ commit│ (collaborator)│  succeeds exactly or fails
//! └──────┬──────┘       └──────────────┘
//!        │ after commit
//!        ▼
//! ┌─────────────┐
//! │  PoolEvent   │  drained by the host's indexing layer
//! └─────────────┘
//! ```
//!
//! Every mutating operation follows the same discipline: validate,
//! instruct the ledger(s), commit the reserve/share mutation, emit the
//! event.  A failure at any step leaves pool state untouched.
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`FeeRate`](domain::FeeRate), [`Price`](domain::Price), receipts |
//! | [`pool`]   | The stateful [`PoolEngine`](pool::PoolEngine) |
//! | [`ledger`] | The [`AssetLedger`](ledger::AssetLedger) collaborator boundary and [`InMemoryLedger`](ledger::InMemoryLedger) |
//! | [`math`]   | Pure swap and share math, shared by engine and quoters |
//! | [`config`] | [`PoolConfig`](config::PoolConfig) blueprint |
//! | [`event`]  | [`PoolEvent`](event::PoolEvent) notifications |
//! | [`error`]  | [`PoolError`](error::PoolError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod domain;
pub mod error;
pub mod event;
pub mod ledger;
pub mod math;
pub mod pool;
pub mod prelude;
