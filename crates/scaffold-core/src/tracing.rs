//! Tracing bootstrap for binaries and test harnesses.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Environment variable consulted for the log filter.
pub const LOG_ENV: &str = "SCAFFOLD_LOG";

static INIT: Once = Once::new();

/// Install a fmt subscriber filtered by `SCAFFOLD_LOG` (default `info`).
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_tracing() {
    init_tracing_with_default("info");
}

/// Like [`init_tracing`], with a caller-chosen fallback directive.
pub fn init_tracing_with_default(default_directive: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_directive));
        // A subscriber may already be installed by the host process.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
