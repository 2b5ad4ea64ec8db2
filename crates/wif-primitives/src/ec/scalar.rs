//! secp256k1 private key scalar.
//!
//! A `Scalar` always satisfies `1 <= s < n`, where `n` is the order of the
//! secp256k1 group. Range checks and zeroization are delegated to k256.

use std::fmt;

use k256::SecretKey;
use num_bigint::BigUint;
use zeroize::Zeroize;

use crate::WifError;

/// Length of a serialized scalar in bytes.
pub const SCALAR_BYTES_LEN: usize = 32;

/// Order `n` of the secp256k1 group, big-endian.
pub const CURVE_ORDER: [u8; SCALAR_BYTES_LEN] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe,
    0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36, 0x41, 0x41,
];

/// A private key scalar in `[1, n - 1]`.
///
/// Backed by a k256 `SecretKey`, which validates the range and zeroizes
/// itself on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct Scalar(SecretKey);

impl Scalar {
    /// Map 256 uniformly random bits into the valid scalar range.
    ///
    /// Draws below `n` are kept as-is. A draw `r >= n` is reduced exactly
    /// once to `r mod (n - 1) + 1`, which lands in `[1, n - 1]` but is not
    /// uniform over it. There is no re-draw.
    ///
    /// # Panics
    /// If the result falls outside `[1, n - 1]`. The reduction cannot
    /// produce such a value, so this only fires for an all-zero draw.
    pub fn from_random_bits(mut bits: [u8; SCALAR_BYTES_LEN]) -> Self {
        if bits >= CURVE_ORDER {
            let r = BigUint::from_bytes_be(&bits);
            let n_minus_one = BigUint::from_bytes_be(&CURVE_ORDER) - 1u32;
            let reduced = r % n_minus_one + 1u32;
            log::debug!("random draw at or above the curve order, applied single-pass reduction");
            bits = to_fixed_bytes(&reduced);
        }

        let secret = SecretKey::from_slice(&bits);
        bits.zeroize();
        match secret {
            Ok(secret) => Scalar(secret),
            Err(_) => panic!("scalar outside [1, n - 1] after reduction"),
        }
    }

    /// Create a scalar from its 32-byte big-endian encoding.
    ///
    /// # Arguments
    /// * `bytes` - Exactly 32 bytes.
    ///
    /// # Returns
    /// `Ok(Scalar)` if `1 <= value < n`, otherwise `InvalidLength` or
    /// `ScalarOutOfRange`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, WifError> {
        if bytes.len() != SCALAR_BYTES_LEN {
            return Err(WifError::InvalidLength {
                expected: SCALAR_BYTES_LEN,
                got: bytes.len(),
            });
        }
        SecretKey::from_slice(bytes)
            .map(Scalar)
            .map_err(|_| WifError::ScalarOutOfRange)
    }

    /// Serialize as 32 big-endian bytes.
    pub fn to_bytes(&self) -> [u8; SCALAR_BYTES_LEN] {
        let mut out = [0u8; SCALAR_BYTES_LEN];
        out.copy_from_slice(&self.0.to_bytes());
        out
    }

    /// 64 uppercase hex characters, zero-padded.
    pub fn to_hex(&self) -> String {
        let mut bytes = self.to_bytes();
        let hex = hex::encode_upper(bytes);
        bytes.zeroize();
        hex
    }

    /// The scalar as a base-10 integer string.
    pub fn to_decimal(&self) -> String {
        let mut bytes = self.to_bytes();
        let decimal = BigUint::from_bytes_be(&bytes).to_string();
        bytes.zeroize();
        decimal
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal())
    }
}

// Key material stays out of debug output.
impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Scalar(..)")
    }
}

fn to_fixed_bytes(value: &BigUint) -> [u8; SCALAR_BYTES_LEN] {
    let be = value.to_bytes_be();
    let mut out = [0u8; SCALAR_BYTES_LEN];
    out[SCALAR_BYTES_LEN - be.len()..].copy_from_slice(&be);
    out
}
