//! Tracing initialization.

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber, filtered by `GPOSCOPE_LOG`
/// (defaults to `info`).
///
/// The engine itself only emits events; embedders that already own a
/// subscriber simply skip this. Calling it twice is a no-op.
pub fn init() {
    let filter = EnvFilter::try_from_env("GPOSCOPE_LOG")
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
