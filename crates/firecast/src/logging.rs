//! File logging in the data directory.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging to `{data_dir}/firecast.log`.
///
/// The level can be controlled via the `level` parameter or overridden with
/// the `RUST_LOG` environment variable. Returns a guard that must be kept
/// alive for the duration of the program so buffered lines get flushed.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<WorkerGuard> {
    std::fs::create_dir_all(data_dir)?;

    let appender = tracing_appender::rolling::never(data_dir, "firecast.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let default_filter = format!("firecast={level},firecast_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    tracing::info!("firecast logging initialized (data_dir={})", data_dir.display());
    Ok(guard)
}
