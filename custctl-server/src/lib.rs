//! custctl-server: customer resource over HTTP
//!
//! Five JSON endpoints over a single PostgreSQL `customers` table, plus a
//! health check. The pool is built once at startup and shared through
//! `AppState`; every request runs one statement against it.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, create_pool_with_config, ensure_schema, PoolConfig};
pub use http::{build_router, run_server, ServerConfig, ServerError};
