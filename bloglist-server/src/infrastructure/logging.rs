use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

const QUIET_SQLX: &str = "sqlx::query=warn";

/// Installs the global subscriber. `RUST_LOG` takes precedence over `default_level`.
pub fn init_logging(default_level: &str) -> Result<()> {
    let raw = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| default_level.to_string());
    let filter = EnvFilter::try_new(filter_directives(&raw))
        .unwrap_or_else(|_| EnvFilter::new(filter_directives("info")));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))?;

    Ok(())
}

// sqlx logs every statement at info; keep that out unless asked for.
fn filter_directives(raw: &str) -> String {
    let raw = raw.trim();
    if raw.contains("sqlx") {
        raw.to_string()
    } else {
        format!("{raw},{QUIET_SQLX}")
    }
}
