//! Errors raised while generating or printing a keypair.

/// The ways a run can fail. All of them are fatal.
#[derive(Debug, thiserror::Error)]
pub enum KeygenError {
    #[error("secure random source unavailable: {0}")]
    Randomness(#[from] rand::Error),

    #[error("failed to write keys to standard output: {0}")]
    Output(#[from] std::io::Error),
}
