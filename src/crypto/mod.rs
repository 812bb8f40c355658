//! Cryptographic operations for X25519 key generation.
//!
//! This module provides:
//! - Secure random private key generation (clamped per RFC 7748)
//! - Public key derivation by base-point scalar multiplication
//! - Raw key to hex encoding

mod encoding;
mod keypair;

pub use encoding::{to_hex_prefixed, KEY_SIZE};
pub use keypair::Keypair;
