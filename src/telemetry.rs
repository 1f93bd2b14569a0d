//! Logging setup
//!
//! The crate only emits `tracing` events; hosts decide where they go. This
//! helper installs the usual fmt subscriber for binaries and tests that
//! don't bring their own.

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber filtered by `RUST_LOG`, falling back to
/// `default_directive` (e.g. `"food_delivery=info"`).
///
/// Returns `false` if a global subscriber was already set.
pub fn init_tracing(default_directive: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}
