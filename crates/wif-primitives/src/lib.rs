//! Cryptographic primitives for Wallet Import Format private keys.
//!
//! This crate provides:
//! - Hash functions (SHA-256, SHA-256d, Base58Check checksum)
//! - Base58 and Base58Check encoding/decoding
//! - Network version bytes (testnet, mainnet)
//! - secp256k1 private key scalars, random generation and WIF encoding

pub mod hash;
pub mod base58;
pub mod network;
pub mod ec;

mod error;
pub use error::WifError;
pub use ec::{generate_private_key, GeneratedKey, PrivateKey, Scalar};
pub use network::Network;
