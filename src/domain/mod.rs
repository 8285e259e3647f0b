//! Fundamental domain value types used throughout the pool engine.
//!
//! Tokens amounts, liquidity shares, the fee rational, reserve-ratio
//! prices, actor identities, and the validated receipt types returned by
//! mutating operations.  All types are newtypes with validated (or
//! infallible `const`) constructors.

mod account_id;
mod amount;
mod direction;
mod fee_rate;
mod price;
mod receipts;
mod rounding;
mod shares;

pub use account_id::AccountId;
pub use amount::Amount;
pub use direction::SwapDirection;
pub use fee_rate::FeeRate;
pub use price::Price;
pub use receipts::{DepositReceipt, SwapReceipt, WithdrawReceipt};
pub use rounding::Rounding;
pub use shares::Shares;
