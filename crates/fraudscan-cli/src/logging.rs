//! Tracing setup.
//!
//! Logs go to a daily file under the data directory so they never interleave
//! with the dashboard output. `--log-stderr` is for debugging the CLI itself.

use anyhow::Result;
use fraudscan_infrastructure::paths::FraudScanPaths;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE_PREFIX: &str = "fraudscan.log";

const TARGETS: &[&str] = &[
    "fraudscan",
    "fraudscan_core",
    "fraudscan_infrastructure",
    "fraudscan_interaction",
    "fraudscan_application",
];

fn default_directives(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    std::iter::once("warn".to_string())
        .chain(TARGETS.iter().map(|target| format!("{target}={level}")))
        .collect::<Vec<_>>()
        .join(",")
}

/// Installs the global subscriber. `RUST_LOG` wins over `verbose`.
///
/// The returned guard flushes the file writer on drop; keep it alive for the
/// whole run.
pub fn init(verbose: bool, to_stderr: bool) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    if to_stderr {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()?;
        return Ok(None);
    }

    let log_dir = FraudScanPaths::log_dir()?;
    std::fs::create_dir_all(&log_dir)?;
    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()?;
    Ok(Some(guard))
}
