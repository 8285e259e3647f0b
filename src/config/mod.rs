//! Declarative pool blueprints.

mod pool;

pub use pool::PoolConfig;
