//! Tracing setup
//!
//! Log output goes to stderr so it never mixes with exported data on stdout.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber
///
/// `RUST_LOG` wins when set; otherwise `default_level` (e.g. "warn") is used.
pub fn init_tracing(default_level: &str) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default_level))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        // Another subscriber may already be installed (e.g. by a test harness)
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
