/// secp256k1 private key material.
///
/// Provides the range-checked scalar, random key generation and
/// Wallet Import Format encoding. No public key is ever derived.

pub mod private_key;
pub mod scalar;

pub use private_key::{generate_private_key, GeneratedKey, PrivateKey};
pub use scalar::{Scalar, CURVE_ORDER};
