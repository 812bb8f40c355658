//! X25519 keypair generation.

use std::fmt;

use curve25519_dalek::scalar::clamp_integer;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use x25519_dalek::{PublicKey, StaticSecret};
use zeroize::Zeroizing;

use super::encoding::{to_hex_prefixed, KEY_SIZE};
use crate::error::KeygenError;

/// An X25519 keypair (private scalar + derived public key).
///
/// The private key is zeroized when the keypair is dropped.
#[derive(Clone)]
pub struct Keypair {
    /// The private key (32 bytes)
    secret: StaticSecret,
    /// `X25519(secret, 9)`
    public: PublicKey,
}

impl Keypair {
    /// Generates a new random keypair from the operating system RNG.
    pub fn generate() -> Result<Self, KeygenError> {
        Self::generate_from_rng(&mut OsRng)
    }

    /// Generates a new random keypair from the given CSPRNG.
    ///
    /// The private key is clamped before it is stored, so the bytes returned
    /// by [`Keypair::private_key_bytes`] are the canonical X25519 scalar.
    ///
    /// # Errors
    /// Returns [`KeygenError::Randomness`] if the RNG cannot produce bytes.
    pub fn generate_from_rng<R>(rng: &mut R) -> Result<Self, KeygenError>
    where
        R: RngCore + CryptoRng,
    {
        let mut raw = Zeroizing::new([0u8; KEY_SIZE]);
        rng.try_fill_bytes(&mut raw[..])?;

        let keypair = Self::from_private_key(clamp_integer(*raw));
        tracing::debug!(public_key = %keypair.public_key_hex(), "generated X25519 keypair");

        Ok(keypair)
    }

    /// Derives the keypair for an existing private key.
    ///
    /// The bytes are kept as given. X25519 clamps internally, so a key and
    /// its clamped form share the same public key.
    pub fn from_private_key(secret_bytes: [u8; KEY_SIZE]) -> Self {
        let secret = StaticSecret::from(secret_bytes);
        let public = PublicKey::from(&secret);

        Self { secret, public }
    }

    /// Returns the private key bytes.
    pub fn private_key_bytes(&self) -> [u8; KEY_SIZE] {
        self.secret.to_bytes()
    }

    /// Returns the public key bytes.
    #[inline]
    pub fn public_key_bytes(&self) -> &[u8; KEY_SIZE] {
        self.public.as_bytes()
    }

    /// Returns the private key as a hex string with 0x prefix.
    pub fn private_key_hex(&self) -> String {
        to_hex_prefixed(self.secret.as_bytes())
    }

    /// Returns the public key as a hex string with 0x prefix.
    pub fn public_key_hex(&self) -> String {
        to_hex_prefixed(self.public.as_bytes())
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keypair")
            .field("public", &self.public_key_hex())
            .finish_non_exhaustive()
    }
}
