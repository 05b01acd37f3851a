//! Diagnostic logging setup for the `nines` binary.
//!
//! Engine and command events go through `tracing`; this module installs the
//! subscriber that prints them to stderr so stdout stays machine-readable.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn,nines_engine=info";

/// Builds the filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize logging for the application.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_logging() {
    let _ = fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
