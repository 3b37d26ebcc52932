//! Logging bootstrap
//!
//! Library code only emits `tracing` events. Binaries call [`init`] once to
//! print them on stdout; tests call [`init_test`], whose output goes through
//! libtest capture.

use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber filtered by `RUST_LOG` (default: `info`)
///
/// Returns `false` when a global subscriber was already installed.
pub fn init() -> bool {
    init_with("info")
}

/// Like [`init`], with an explicit fallback filter used when `RUST_LOG` is unset
pub fn init_with(default_filter: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter))
        .try_init()
        .is_ok()
}

/// Like [`init_with`], but writes through the test harness so output is
/// only shown for failing tests
///
/// Safe to call from every test.
pub fn init_test(default_filter: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter))
        .with_test_writer()
        .try_init()
        .is_ok()
}

fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}
