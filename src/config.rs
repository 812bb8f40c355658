//! Runtime configuration for the keypair generator.

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Log level used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Generate an X25519 keypair and print both keys as hex
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {}

impl Config {
    /// Returns the diagnostics filter, taken from `RUST_LOG` when present.
    ///
    /// Diagnostics go to stderr only; the report on stdout is unaffected.
    pub fn log_filter() -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
    }
}
