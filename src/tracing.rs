//! Tracing setup for the command-line binary
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=tablecsv=debug` - module-level filtering
//!
//! Defaults to `warn` so normal runs stay quiet.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize the console tracing subscriber
///
/// Respects RUST_LOG for filtering. Events go to stderr so the rendered
/// table on stdout stays clean for piping.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_filter(console_filter);

    tracing_subscriber::registry().with(console_layer).init();
}
