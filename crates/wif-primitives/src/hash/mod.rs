//! Hash function primitives.
//!
//! Provides SHA-256, double SHA-256 and the 4-byte Base58Check checksum.
//! All functions hash raw bytes, never their hex text.

use sha2::{Digest, Sha256};

/// Length of a Base58Check checksum in bytes.
pub const CHECKSUM_LEN: usize = 4;

/// Compute SHA-256 hash of the input data.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte SHA-256 digest.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute double SHA-256 (SHA-256d) hash of the input data.
///
/// Computes SHA-256(SHA-256(data)).
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte double-SHA-256 digest.
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// First four bytes of `sha256d(payload)`.
pub fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = sha256d(payload);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&digest[..CHECKSUM_LEN]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_hello() {
        assert_eq!(
            hex::encode(sha256(b"hello")),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn test_sha256d_hello() {
        assert_eq!(
            hex::encode(sha256d(b"hello")),
            "9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50"
        );
    }

    #[test]
    fn test_sha256d_is_sha256_twice() {
        let data = b"The quick brown fox jumps over the lazy dog";
        assert_eq!(sha256d(data), sha256(&sha256(data)));
    }

    #[test]
    fn test_checksum_vectors() {
        assert_eq!(checksum(b"hello"), [0x95, 0x95, 0xc9, 0xdf]);
        assert_eq!(hex::encode(checksum(b"")), "5df6e0e2");
    }

    #[test]
    fn test_checksum_testnet_payload_for_key_one() {
        let mut payload = [0u8; 33];
        payload[0] = 0xef;
        payload[32] = 0x01;
        assert_eq!(hex::encode(checksum(&payload)), "40df3cbd");
        // Deterministic across calls.
        assert_eq!(checksum(&payload), checksum(&payload));
    }
}
