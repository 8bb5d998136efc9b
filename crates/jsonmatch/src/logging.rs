//! Logging setup for test runs
//!
//! Matchers emit `tracing` events at `debug` and `trace` level for adapter
//! resolution and every classified mismatch. Call [`init_test_logging`] at the
//! start of a test to see them.

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives
pub const LOG_ENV_VAR: &str = "JSONMATCH_LOG";

/// Filter used when [`LOG_ENV_VAR`] is unset or invalid
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Install a global subscriber writing to the test output
///
/// Safe to call from every test; only the first call does anything. Returns
/// whether this process's subscriber was installed by jsonmatch (false when
/// another global subscriber was already set).
pub fn init_test_logging() -> bool {
    static INSTALLED: OnceCell<bool> = OnceCell::new();

    *INSTALLED.get_or_init(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .finish();

        tracing::subscriber::set_global_default(subscriber).is_ok()
    })
}

#[cfg(test)]
#[path = "logging/logging_tests.rs"]
mod logging_tests;
