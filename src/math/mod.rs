//! Pure accounting math shared by the engine and external quoters.
//!
//! Everything here is a function of its arguments — no pool state, no
//! side effects — so hosts can quote an operation before submitting it
//! and get exactly the number the engine will produce.

pub mod liquidity_math;
pub mod swap_math;
