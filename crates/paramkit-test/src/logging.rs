//! Log capture for tests.
//!
//! Installs a `tracing-subscriber` fmt layer writing through the test
//! harness, so `paramkit`'s rejection events show up next to failing
//! assertions.

use crate::error::TestError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "paramkit=debug";

/// Logging configuration for tests.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Filter directives (e.g., "paramkit=debug,warn").
    pub filter: String,

    /// Whether to output JSON format.
    pub json_format: bool,

    /// Whether to include target (module path).
    pub include_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.to_string()),
            json_format: false,
            include_target: true,
        }
    }
}

/// Installs a global subscriber for the test binary.
///
/// Only the first call in a process installs anything; later calls return
/// `Ok(())`.
///
/// # Errors
///
/// Returns `TestError::Logging` if the filter directives are invalid.
pub fn init_logging(config: &LogConfig) -> Result<(), TestError> {
    let filter = EnvFilter::try_new(&config.filter)
        .map_err(|e| TestError::Logging(format!("Invalid log filter: {e}")))?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_test_writer()
        .with_target(config.include_target);

    let layer = if config.json_format {
        fmt_layer.json().with_filter(filter).boxed()
    } else {
        fmt_layer.with_filter(filter).boxed()
    };

    // A subscriber set by an earlier test is fine.
    let _ = tracing_subscriber::registry().with(layer).try_init();
    Ok(())
}

/// Installs the default test subscriber, ignoring any failure.
pub fn init_test_logging() {
    let _ = init_logging(&LogConfig::default());
}
