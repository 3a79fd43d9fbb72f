//! Tracing/logging initialization.
//!
//! Structured JSON logs on stdout, filtered via `RUST_LOG`. Analytics
//! events ride the same stream (see `apmed_leads::TracingSink`), so the
//! default filter keeps `info` on.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_current_span(false)
        .with_target(true)
        .try_init();
}
