//! Create the customers table and exit

use anyhow::{Context, Result};
use clap::Parser;

use custctl_server::{create_pool, ensure_schema};

use crate::config::require_database_url;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides config/environment)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,
}

pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let database_url = require_database_url(args.database_url)?;

    let pool = create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;

    ensure_schema(&pool)
        .await
        .context("Failed to create customers table")?;

    pool.close().await;
    Ok(())
}
