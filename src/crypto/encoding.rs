//! Raw key encoding.

/// Size of both the private and the public key, in bytes.
pub const KEY_SIZE: usize = 32;

/// Returns the key as `0x` followed by 64 lowercase hex characters.
#[inline]
pub fn to_hex_prefixed(bytes: &[u8; KEY_SIZE]) -> String {
    format!("0x{}", hex::encode(bytes))
}
