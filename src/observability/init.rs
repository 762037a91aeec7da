//! Tracing subscriber setup.

use super::file_writer::RotatingFile;
use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log file name inside the plugin data directory.
pub const LOG_FILE: &str = "lorekeeper.log";

const DEFAULT_LEVEL: &str = "info";

/// Builds the filter for a configured level, falling back to `info` when the
/// directive does not parse.
///
/// # Examples
///
/// ```
/// use lorekeeper::observability::build_filter;
///
/// assert_eq!(build_filter(Some("debug")).to_string(), "debug");
/// assert_eq!(build_filter(None).to_string(), "info");
/// ```
#[must_use]
pub fn build_filter(level: Option<&str>) -> EnvFilter {
    let level = level.map(str::trim).filter(|l| !l.is_empty()).unwrap_or(DEFAULT_LEVEL);
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Installs the global subscriber: an [`EnvFilter`] from `trace_level` and a
/// plain-text `fmt` layer writing to a rotating file in the data directory.
///
/// Safe to call more than once; only the first call in the process takes
/// effect. If the data directory cannot be created, logging stays off.
///
/// # Example
///
/// ```rust
/// use lorekeeper::observability::init_tracing;
/// use lorekeeper::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let writer = RotatingFile::new(data_dir.join(LOG_FILE));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    let _ = tracing_subscriber::registry()
        .with(build_filter(config.trace_level.as_deref()))
        .with(fmt_layer)
        .try_init();
}
