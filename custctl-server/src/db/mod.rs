//! Database layer - connection pool, schema and repositories
//!
//! - Bounded connection pool, no per-request connections
//! - Schema created once at startup, before the listener binds
//! - Zero affected rows is a distinct NotFound, never a silent success

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_lazy_pool, create_pool, create_pool_with_config, ping, PoolConfig};
pub use repos::*;
pub use schema::ensure_schema;
