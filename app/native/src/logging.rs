//! Diagnostic logging setup.
//!
//! Diagnostics go to stderr through `tracing`; the console conversation with
//! the user stays on stdout. The level comes from the `-v` count only.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Maps the number of `-v` flags to a filter directive.
#[must_use]
pub const fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init(verbose: u8) {
    let filter = EnvFilter::new(format!("spy_lib={0},spy={0}", level_for_verbosity(verbose)));

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .try_init();

    if result.is_err() {
        tracing::debug!("logging already initialized");
    }
}
