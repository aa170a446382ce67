//! Environment loading for custctl
//!
//! Priority order (highest to lowest):
//! 1. Command-line flags
//! 2. Environment variables already set
//! 3. Current directory .env
//! 4. ~/.custctl/.env
//!
//! dotenvy never overwrites a variable that is already set, so loading the
//! files in this order gives exactly that precedence.

use std::path::PathBuf;

use tracing::debug;

/// Name of the per-user config directory under $HOME
const CONFIG_DIR_NAME: &str = ".custctl";

/// Get the custctl config directory path (~/.custctl)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME))
}

/// Load .env files from the current directory and ~/.custctl.
///
/// Returns the files that were actually loaded. Missing or unreadable files
/// are skipped.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded_from = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        debug!("Loaded .env from current directory: {}", path.display());
        loaded_from.push(path);
    }

    if let Some(env_file) = config_dir().map(|dir| dir.join(".env")) {
        if env_file.exists() {
            match dotenvy::from_path(&env_file) {
                Ok(()) => {
                    debug!("Loaded .env from ~/.custctl: {}", env_file.display());
                    loaded_from.push(env_file);
                }
                Err(e) => {
                    debug!("Failed to load {}: {}", env_file.display(), e);
                }
            }
        }
    }

    loaded_from
}

/// Resolve the database URL from the flag/env value clap already collected.
pub fn require_database_url(database_url: Option<String>) -> anyhow::Result<String> {
    database_url.filter(|url| !url.trim().is_empty()).ok_or_else(|| {
        anyhow::anyhow!(
            "DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or ~/.custctl/.env"
        )
    })
}
