use tracing::metadata::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::error::DockergenResult;

/// Installs the global fmt subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over `level` when it is set.
pub fn setup_tracing(level: LevelFilter) -> DockergenResult {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;
    Ok(())
}
