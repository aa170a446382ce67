//! custctl CLI - customer resource service
//!
//! - `serve`: run the HTTP API against PostgreSQL
//! - `migrate`: create the customers table and exit

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

mod commands;
mod config;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "custctl",
    author,
    version,
    about = "Customer resource HTTP service backed by PostgreSQL"
)]
struct Cli {
    /// Enable debug logging (unless RUST_LOG is set)
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces over OTLP (requires the telemetry feature)
    #[arg(long, global = true)]
    otel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run HTTP API server (customer CRUD + health)
    Serve(commands::serve::ServeArgs),
    /// Create the customers table if missing, then exit
    Migrate(commands::migrate::MigrateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before parsing so clap's `env` fallbacks see .env values
    let env_files = config::load_dotenv();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
    })?;

    if env_files.is_empty() {
        info!("Using environment variables only (no .env file found)");
    } else {
        for path in &env_files {
            info!("Loaded configuration from {}", path.display());
        }
    }

    let result = match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await,
        Commands::Migrate(args) => commands::run_migrate(args).await,
    };

    tracing_setup::shutdown_otel();
    result
}
