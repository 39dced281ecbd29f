//! Logging infrastructure for vergate.
//!
//! Diagnostics go to standard error through `tracing` and are off by default;
//! the gate verdict on standard output is the only contractual surface.
//! Enable diagnostics with the standard env filter, e.g.
//! `RUST_LOG=vergate=debug`.

use anyhow::{Result, anyhow};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Check if colored output should be used.
///
/// Returns true only if:
/// - stderr is a terminal (TTY)
/// - NO_COLOR environment variable is not set
fn use_color() -> bool {
    std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

/// Initialize the tracing subscriber for diagnostic logging.
///
/// The filter is taken from the environment (`RUST_LOG`); without one, only
/// warnings and above are shown, which keeps normal gate runs silent on
/// stderr.
pub fn init_tracing() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vergate=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(use_color())
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))
}
