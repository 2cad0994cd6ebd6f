//! Diagnostic logging to stderr.
//!
//! Level comes from `RUST_LOG` when set, otherwise `debug` with `--verbose`
//! and `warn` without.

use tracing_subscriber::{EnvFilter, fmt};

pub fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .ok();
}
