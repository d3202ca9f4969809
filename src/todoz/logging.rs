//! Tracing bootstrap for the binary.
//!
//! The library only emits events; installing a subscriber is the caller's
//! choice. Output goes to stderr so envelopes on stdout stay machine-readable.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Variable consulted before `RUST_LOG`.
pub const LOG_ENV: &str = "TODOZ_LOG";
const DEFAULT_FILTER: &str = "warn";

/// Filter directive in effect: `debug` when verbose, else `TODOZ_LOG`,
/// else `RUST_LOG`, else `warn`.
pub fn filter_directive(verbose: bool) -> String {
    if verbose {
        return "debug".to_string();
    }
    std::env::var(LOG_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| DEFAULT_FILTER.to_string())
}

/// Install the global subscriber. A second call is a no-op.
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_new(filter_directive(verbose))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
