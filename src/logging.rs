//! Tracing subscriber setup
//!
//! The library only emits `tracing` events; the binary decides whether and
//! how they are printed.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Environment variable holding an `EnvFilter` directive string
pub const LOG_ENV_VAR: &str = "BUDGETLY_LOG";

/// Initializes the global tracing subscriber.
///
/// `BUDGETLY_LOG` wins when set. Otherwise the crate logs at `warn`, or at
/// `info` when `verbose` is true. Output goes to stderr so report text on
/// stdout stays clean.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let default_level = if verbose { "budgetly=info" } else { "budgetly=warn" };
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(default_level));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}
