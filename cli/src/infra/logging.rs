//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Default filter when `RUST_LOG` is unset: only teardown warnings.
pub const DEFAULT_FILTER: &str = "warn";

/// Install a compact stderr subscriber filtered by `RUST_LOG`.
///
/// Stdout is left to the status lines.
pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let stderr = std::io::stderr.with_max_level(tracing::Level::TRACE);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(stderr)
        .with_target(true)
        .with_level(true)
        .compact()
        .init();
}
