//! HTTP server command for the customer API
//!
//! Connects the pool, ensures the schema, then serves until shutdown.
//! Any failure before the listener is up aborts the process.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use custctl_server::db::pool::{DEFAULT_ACQUIRE_TIMEOUT, DEFAULT_MAX_CONNECTIONS};
use custctl_server::{create_pool_with_config, ensure_schema, run_server, PoolConfig, ServerConfig};

use crate::config::require_database_url;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "0.0.0.0:2009")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (overrides config/environment)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Seconds a request may wait for a free connection
    #[arg(long, default_value_t = DEFAULT_ACQUIRE_TIMEOUT.as_secs())]
    pub acquire_timeout_secs: u64,
}

impl ServeArgs {
    fn pool_config(&self, database_url: String) -> PoolConfig {
        PoolConfig {
            database_url,
            max_connections: self.max_connections,
            acquire_timeout: Duration::from_secs(self.acquire_timeout_secs),
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let database_url = require_database_url(args.database_url.clone())?;
    let pool_config = args.pool_config(database_url);

    tracing::info!("Starting custctl server on {}", args.bind);

    let pool = create_pool_with_config(&pool_config)
        .await
        .context("Failed to connect to database")?;

    ensure_schema(&pool)
        .await
        .context("Failed to create customers table")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Blocks until shutdown
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
