//! The text block printed for a generated keypair.

use std::io::{self, Write};

use rand::{CryptoRng, RngCore};

use crate::crypto::{Keypair, KEY_SIZE};
use crate::error::KeygenError;

/// Renders the report: private key, a blank line, then the public key.
pub fn render(keypair: &Keypair) -> String {
    format!(
        "Private Key ({size} bytes):\n{private}\n\nPublic Key ({size} bytes):\n{public}\n",
        size = KEY_SIZE,
        private = keypair.private_key_hex(),
        public = keypair.public_key_hex(),
    )
}

/// Writes the report in a single call so a failed run leaves no partial output.
pub fn write_report<W: Write>(out: &mut W, keypair: &Keypair) -> io::Result<()> {
    out.write_all(render(keypair).as_bytes())?;
    out.flush()
}

/// Generates a keypair from `rng` and writes its report to `out`.
///
/// Nothing is written unless generation succeeds.
pub fn generate_and_write<R, W>(rng: &mut R, out: &mut W) -> Result<(), KeygenError>
where
    R: RngCore + CryptoRng,
    W: Write,
{
    let keypair = Keypair::generate_from_rng(rng)?;
    write_report(out, &keypair)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    struct FailingRng;

    impl RngCore for FailingRng {
        fn next_u32(&mut self) -> u32 {
            panic!("entropy source offline")
        }

        fn next_u64(&mut self) -> u64 {
            panic!("entropy source offline")
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            panic!("entropy source offline")
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new(io::Error::new(
                io::ErrorKind::Other,
                "entropy source offline",
            )))
        }
    }

    impl CryptoRng for FailingRng {}

    fn alice() -> Keypair {
        let secret = hex::decode("77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a")
            .unwrap()
            .try_into()
            .unwrap();
        Keypair::from_private_key(secret)
    }

    #[test]
    fn test_render_layout() {
        let expected = "Private Key (32 bytes):\n\
            0x77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a\n\
            \n\
            Public Key (32 bytes):\n\
            0x8520f0098930a754748b7ddcb43ef75a0dbf3a0d26381af4eba4a98eaa9b4e6a\n";
        assert_eq!(render(&alice()), expected);
    }

    #[test]
    fn test_write_report() {
        let keypair = Keypair::generate().unwrap();
        let mut out = Vec::new();
        write_report(&mut out, &keypair).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Private Key (32 bytes):");
        assert_eq!(lines[1], keypair.private_key_hex());
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "Public Key (32 bytes):");
        assert_eq!(lines[4], keypair.public_key_hex());
    }

    #[test]
    fn test_generate_and_write() {
        let mut out = Vec::new();
        generate_and_write(&mut StdRng::seed_from_u64(7), &mut out).unwrap();

        let expected = Keypair::generate_from_rng(&mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), render(&expected));
    }

    #[test]
    fn test_rng_failure_writes_nothing() {
        let mut out = Vec::new();
        let err = generate_and_write(&mut FailingRng, &mut out).unwrap_err();

        assert!(matches!(err, KeygenError::Randomness(_)));
        assert!(out.is_empty());
    }
}
