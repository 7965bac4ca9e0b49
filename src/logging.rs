//! Tracing setup for the binary

use std::io;
use tracing::trace;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "HANGMAN_LOG";

/// Install the global subscriber
///
/// Logs go to stderr so they never mix with the game transcript on stdout.
/// The filter comes from [`LOG_ENV`] and defaults to `warn`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    trace!("tracing initialized");
}
