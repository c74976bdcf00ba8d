//! Logging setup for the `reconurl` binary.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Initialize structured logging to stderr.
///
/// `RUST_LOG` wins when set; otherwise the level is `warn`, or
/// `reconurl=debug` when `verbose` is on. Stdout stays reserved for results.
pub fn init_logging(verbose: bool) -> Result<()> {
    let default_filter = if verbose { "warn,reconurl=debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))?;

    tracing::debug!("reconurl logging initialized");

    Ok(())
}
