//! types.rs
//! Error type shared by the padding engine, the digest registry and the config layer.
//!
//! Design notes:
//! - Only configuration and programmer errors live here. A failed verification
//!   is never an error value: it collapses to `false` / `None` so callers
//!   cannot tell which check rejected the block.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PssError {
    /// Digest handed to the encoder does not match the hash output length.
    #[error("cannot encode PSS string, input length invalid for hash: expected={expected}, actual={actual}")]
    InvalidInputLength { expected: usize, actual: usize },

    /// Target bit length cannot hold digest, salt, marker and trailer.
    #[error("cannot encode PSS string, output length too small: output_bits={output_bits}, required_bits={required_bits}")]
    OutputTooSmall { output_bits: usize, required_bits: usize },

    /// Target bit length exceeds the largest supported key size.
    #[error("cannot encode PSS string, output length too large: output_bits={output_bits}, max_bits={max_bits}")]
    OutputTooLarge { output_bits: usize, max_bits: usize },

    /// Raw variant was fed something other than a single pre-hashed digest.
    #[error("PSS_Raw bad input length, did not match hash: expected={expected}, actual={actual}")]
    RawLengthMismatch { expected: usize, actual: usize },

    /// Digest name not present in the registry.
    #[error("unknown digest algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Digest id not present in the registry.
    #[error("unknown digest algorithm id: 0x{0:04x}")]
    UnknownAlgorithmId(u16),

    /// Malformed or inconsistent configuration.
    #[error("invalid PSS configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for PssError {
    fn from(e: serde_json::Error) -> Self {
        PssError::Config(e.to_string())
    }
}
