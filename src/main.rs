//! X25519 Keypair Generator CLI
//!
//! Usage:
//!   x25519_keygen                  # Print a fresh keypair
//!   RUST_LOG=debug x25519_keygen   # Same, with diagnostics on stderr

use std::io;
use std::process;

use clap::Parser;
use rand::rngs::OsRng;

use x25519_keygen::{report, Config};

fn main() {
    // No options beyond --help/--version
    Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(Config::log_filter())
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    if let Err(e) = report::generate_and_write(&mut OsRng, &mut stdout.lock()) {
        tracing::error!(error = %e, "keypair generation failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
