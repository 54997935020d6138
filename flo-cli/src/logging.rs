//! Diagnostic tracing for the `flo` binary.
//!
//! Goes to stderr only, filtered by `RUST_LOG` (default `warn`). Run output
//! written through `flo tee` is a separate channel and never passes through
//! here.

use tracing_subscriber::{fmt, EnvFilter};

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
