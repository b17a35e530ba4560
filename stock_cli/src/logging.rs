//! Logging setup
//!
//! Log lines go to stderr so tables and JSON on stdout stay pipeable.

use tracing_subscriber::{fmt, EnvFilter};

/// Initialise the global subscriber.
///
/// The filter comes from `RUST_LOG` (default `warn`). `--verbose` forces
/// `debug`.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
