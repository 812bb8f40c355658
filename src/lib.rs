//! # x25519_keygen
//!
//! Generates a single X25519 keypair and renders it as hex.
//!
//! ## Architecture
//!
//! - `crypto`: Key generation, public key derivation and hex encoding
//! - `report`: The text block printed on standard output
//! - `config`: Command-line surface and log filtering
//! - `error`: The fatal error type

pub mod config;
pub mod crypto;
pub mod error;
pub mod report;

pub use config::Config;
pub use crypto::{Keypair, KEY_SIZE};
pub use error::KeygenError;
