//! End-to-end pool walk-through.
//!
//! Demonstrates funding the asset ledgers, bootstrapping a pool,
//! quoting and executing swaps in both directions, adding and removing
//! liquidity, and draining the event stream.
//!
//! # Run
//!
//! ```bash
//! cargo run --example trading_day
//! ```

use basin_amm::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== Constant Product Pool (x · y = k) ===\n");

    // ── 1. Actors and funded ledgers ────────────────────────────────────
    let alice = AccountId::from_bytes([1u8; 32]);
    let bob = AccountId::from_bytes([2u8; 32]);

    let mut ledger_a = InMemoryLedger::new();
    let mut ledger_b = InMemoryLedger::new();
    for account in [alice, bob] {
        ledger_a.credit(&account, Amount::new(1_000_000))?;
        ledger_b.credit(&account, Amount::new(1_000_000))?;
    }

    // ── 2. Create an empty pool with the standard 0.30% fee ────────────
    let config = PoolConfig::default();
    let mut pool = PoolEngine::new(config, ledger_a, ledger_b);
    println!("Fee rate:      {}", pool.fee());
    println!("Initial price: {} (empty pool)\n", pool.price());

    // ── 3. Alice bootstraps the pool ────────────────────────────────────
    let deposit = pool.add_liquidity(alice, Amount::new(100_000), Amount::new(200_000))?;
    println!("--- Alice deposits 100 000 A + 200 000 B ---");
    println!("  Shares minted: {}", deposit.shares_minted());
    println!("  Spot price:    {}", pool.price());

    // ── 4. Bob quotes, then swaps A for B ───────────────────────────────
    let amount_in = Amount::new(10_000);
    let quoted = pool.quote_a_for_b(amount_in)?;
    let swap = pool.swap_a_for_b(bob, amount_in)?;
    println!("\n--- Bob sells {amount_in} A ---");
    println!("  Quoted out:  {quoted}");
    println!("  Actual out:  {}", swap.amount_out());
    println!("  Fee kept:    {}", swap.fee());
    println!("  New price:   {}", pool.price());

    // ── 5. And back the other way ───────────────────────────────────────
    let swap_back = pool.swap_b_for_a(bob, Amount::new(5_000))?;
    println!("\n--- Bob sells 5 000 B ---");
    println!("  Amount out:  {}", swap_back.amount_out());

    // ── 6. Bob joins as a liquidity provider ────────────────────────────
    let join = pool.add_liquidity(bob, Amount::new(50_000), Amount::new(120_000))?;
    println!("\n--- Bob deposits 50 000 A + 120 000 B (B over-offered) ---");
    println!("  Consumed:      {} A, {} B", join.consumed_a(), join.consumed_b());
    println!("  Shares minted: {}", join.shares_minted());
    println!("  Total shares:  {}", pool.total_liquidity());

    // ── 7. Alice exits half her position ────────────────────────────────
    let half = Shares::new(pool.shares_of(&alice).get() / 2);
    let exit = pool.remove_liquidity(alice, half)?;
    println!("\n--- Alice burns {half} shares ---");
    println!("  Paid out:     {} A, {} B", exit.amount_a(), exit.amount_b());
    println!("  Total shares: {}", pool.total_liquidity());

    // ── 8. The host drains committed events for indexing ────────────────
    println!("\n--- Event stream ---");
    for event in pool.drain_events() {
        println!("  {event}");
    }

    let (reserve_a, reserve_b) = pool.reserves();
    println!("\nFinal reserves: ({reserve_a}, {reserve_b})");
    println!("=== Done ===");
    Ok(())
}
