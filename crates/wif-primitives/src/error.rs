/// Unified error type for all primitives operations.
///
/// Covers entropy failures, Base58/Base58Check decoding, and private key
/// validation.
#[derive(Debug, thiserror::Error)]
pub enum WifError {
    #[error("secure random source failed: {0}")]
    Entropy(String),

    #[error("invalid base58 character {character:?} at index {index}")]
    InvalidBase58 { character: char, index: usize },

    #[error("invalid base58: {0}")]
    Base58(String),

    #[error("data too short for checksum: {0} bytes")]
    TooShort(usize),

    #[error("checksum mismatch")]
    ChecksumMismatch,

    #[error("invalid length: expected {expected}, got {got}")]
    InvalidLength { expected: usize, got: usize },

    #[error("unknown network version byte 0x{0:02x}")]
    UnknownVersion(u8),

    #[error("scalar out of range: must satisfy 1 <= s < n")]
    ScalarOutOfRange,
}

impl From<rand::Error> for WifError {
    fn from(e: rand::Error) -> Self {
        WifError::Entropy(e.to_string())
    }
}
