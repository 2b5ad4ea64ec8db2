#![deny(missing_docs)]

//! Testnet WIF SDK.
//!
//! Re-exports the WIF primitives for convenient single-crate usage.

pub use wif_primitives as primitives;
pub use wif_primitives::{generate_private_key, GeneratedKey, Network, PrivateKey, WifError};
