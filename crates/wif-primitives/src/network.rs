//! Network version bytes prefixed to WIF payloads.

use std::fmt;

use crate::WifError;

/// Mainnet WIF version byte.
pub const MAINNET_VERSION: u8 = 0x80;

/// Testnet WIF version byte.
pub const TESTNET_VERSION: u8 = 0xef;

/// The network a private key is encoded for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Network {
    #[default]
    Testnet,
    Mainnet,
}

impl Network {
    /// The version byte that leads the WIF payload.
    pub fn version_byte(self) -> u8 {
        match self {
            Network::Testnet => TESTNET_VERSION,
            Network::Mainnet => MAINNET_VERSION,
        }
    }

    /// Resolve a WIF version byte back to its network.
    pub fn from_version_byte(byte: u8) -> Result<Self, WifError> {
        match byte {
            TESTNET_VERSION => Ok(Network::Testnet),
            MAINNET_VERSION => Ok(Network::Mainnet),
            other => Err(WifError::UnknownVersion(other)),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Testnet => f.write_str("testnet"),
            Network::Mainnet => f.write_str("mainnet"),
        }
    }
}
