//! Tracing subscriber setup.
use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so stdout stays free for the event stream.
///
/// `RUST_LOG` picks the filter; `info` when unset.
pub fn setup_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
}
