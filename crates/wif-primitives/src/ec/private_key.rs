//! secp256k1 private key generation and WIF encoding.
//!
//! A WIF string is the Base58 encoding of
//! `version_byte || scalar (32 bytes, big-endian) || checksum (4 bytes)`,
//! always in the uncompressed-key form (no trailing 0x01 flag).

use std::fmt;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

use crate::base58;
use crate::ec::scalar::{Scalar, SCALAR_BYTES_LEN};
use crate::hash::{checksum, CHECKSUM_LEN};
use crate::network::Network;
use crate::WifError;

/// Length of `version_byte || scalar`.
pub const VERSIONED_PAYLOAD_LEN: usize = 1 + SCALAR_BYTES_LEN;

/// Length of the versioned payload with its checksum appended.
pub const CHECKED_PAYLOAD_LEN: usize = VERSIONED_PAYLOAD_LEN + CHECKSUM_LEN;

/// A secp256k1 private key bound to the network it is encoded for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrivateKey {
    scalar: Scalar,
    network: Network,
}

impl PrivateKey {
    /// Wrap an existing scalar.
    pub fn new(scalar: Scalar, network: Network) -> Self {
        PrivateKey { scalar, network }
    }

    /// Generate a new random private key using the OS random number generator.
    ///
    /// # Returns
    /// A new `PrivateKey`, or `WifError::Entropy` if the OS source fails.
    pub fn generate(network: Network) -> Result<Self, WifError> {
        Self::generate_with(&mut OsRng, network)
    }

    /// Generate a private key from the given cryptographically secure RNG.
    ///
    /// Exactly 256 bits are drawn once and mapped into range with
    /// [`Scalar::from_random_bits`]. A failing source is reported, not retried.
    ///
    /// # Arguments
    /// * `rng` - The entropy source.
    /// * `network` - The network whose version byte prefixes the WIF.
    pub fn generate_with<R: RngCore + CryptoRng>(
        rng: &mut R,
        network: Network,
    ) -> Result<Self, WifError> {
        let mut bits = [0u8; SCALAR_BYTES_LEN];
        rng.try_fill_bytes(&mut bits)?;
        let scalar = Scalar::from_random_bits(bits);
        bits.zeroize();
        Ok(Self::new(scalar, network))
    }

    /// Create a private key from a WIF string.
    ///
    /// Decodes the Base58 string, checks the 37-byte length and checksum,
    /// resolves the version byte and range-checks the scalar.
    ///
    /// # Arguments
    /// * `wif` - An uncompressed-form WIF string.
    ///
    /// # Returns
    /// `Ok(PrivateKey)` on success, or the first validation error.
    pub fn from_wif(wif: &str) -> Result<Self, WifError> {
        let decoded = Zeroizing::new(base58::decode(wif)?);
        if decoded.len() != CHECKED_PAYLOAD_LEN {
            return Err(WifError::InvalidLength {
                expected: CHECKED_PAYLOAD_LEN,
                got: decoded.len(),
            });
        }

        let (payload, sum) = decoded.split_at(VERSIONED_PAYLOAD_LEN);
        if sum != checksum(payload) {
            return Err(WifError::ChecksumMismatch);
        }

        let network = Network::from_version_byte(payload[0])?;
        let scalar = Scalar::from_bytes(&payload[1..])?;
        Ok(Self::new(scalar, network))
    }

    /// The private key scalar.
    pub fn scalar(&self) -> &Scalar {
        &self.scalar
    }

    /// The network whose version byte prefixes the WIF.
    pub fn network(&self) -> Network {
        self.network
    }

    /// `version_byte || scalar`, 33 bytes.
    pub fn versioned_payload(&self) -> [u8; VERSIONED_PAYLOAD_LEN] {
        let mut payload = [0u8; VERSIONED_PAYLOAD_LEN];
        payload[0] = self.network.version_byte();
        payload[1..].copy_from_slice(&self.scalar.to_bytes());
        payload
    }

    /// The versioned payload followed by its checksum, 37 bytes.
    ///
    /// This is the exact input to Base58 encoding.
    pub fn checked_payload(&self) -> [u8; CHECKED_PAYLOAD_LEN] {
        let mut versioned = self.versioned_payload();
        let mut out = [0u8; CHECKED_PAYLOAD_LEN];
        out[..VERSIONED_PAYLOAD_LEN].copy_from_slice(&versioned);
        out[VERSIONED_PAYLOAD_LEN..].copy_from_slice(&checksum(&versioned));
        versioned.zeroize();
        out
    }

    /// Encode the private key in Wallet Import Format.
    pub fn to_wif(&self) -> String {
        let mut payload = self.checked_payload();
        let wif = base58::encode(&payload);
        payload.zeroize();
        wif
    }

    /// 64 uppercase hex characters of the scalar.
    pub fn to_hex(&self) -> String {
        self.scalar.to_hex()
    }
}

/// The record handed back by [`generate_private_key`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedKey {
    /// The private key as an integer.
    pub scalar: Scalar,
    /// 64 uppercase hex characters.
    pub hex: String,
    /// Base58Check WIF text.
    pub wif: String,
    /// Network the WIF was encoded for.
    pub network: Network,
}

impl GeneratedKey {
    /// Render an existing key into the output record.
    pub fn from_private_key(key: &PrivateKey) -> Self {
        GeneratedKey {
            scalar: key.scalar().clone(),
            hex: key.to_hex(),
            wif: key.to_wif(),
            network: key.network(),
        }
    }
}

impl fmt::Display for GeneratedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Private key (integer): {}", self.scalar)?;
        writeln!(f, "Private key (hex): {}", self.hex)?;
        write!(f, "Private key ({} WIF): {}", self.network, self.wif)
    }
}

/// Generate a random testnet private key and its hex and WIF renderings.
pub fn generate_private_key() -> Result<GeneratedKey, WifError> {
    let key = PrivateKey::generate(Network::Testnet)?;
    Ok(GeneratedKey::from_private_key(&key))
}
