//! Chain Parameters
//!
//! Per-network constants. The proof-of-work limit is the largest target a
//! block header may claim; it is derived from the all-ones 256-bit value.

use std::path::{Path, PathBuf};

use entities_bignum::{BigNum, Uint256};
use infrastructure_bignum_encoding::{CompactCodec, Uint256Codec};

use crate::error::InitError;

/// Network selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Main,
    Testnet,
    Regtest,
}

impl Network {
    /// Pick the network from the two selection flags
    pub fn select(testnet: bool, regtest: bool) -> Result<Self, InitError> {
        match (testnet, regtest) {
            (true, true) => Err(InitError::ConflictingNetworks),
            (true, false) => Ok(Network::Testnet),
            (false, true) => Ok(Network::Regtest),
            (false, false) => Ok(Network::Main),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Testnet => "test",
            Network::Regtest => "regtest",
        }
    }
}

/// Constants for one network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainParams {
    pub network: Network,
    pub default_port: u16,
    pub pow_limit: BigNum,
    /// Subdirectory of the data directory, empty for main
    pub data_subdir: &'static str,
}

impl ChainParams {
    pub fn for_network(network: Network) -> Self {
        let all_ones = Uint256Codec::from_u256(&Uint256::MAX);
        match network {
            Network::Main => Self {
                network,
                default_port: 8333,
                pow_limit: all_ones >> 32,
                data_subdir: "",
            },
            Network::Testnet => Self {
                network,
                default_port: 18333,
                pow_limit: all_ones >> 32,
                data_subdir: "testnet3",
            },
            Network::Regtest => Self {
                network,
                default_port: 18444,
                pow_limit: all_ones >> 1,
                data_subdir: "regtest",
            },
        }
    }

    /// The proof-of-work limit in compact form
    pub fn pow_limit_compact(&self) -> u32 {
        CompactCodec::encode(&self.pow_limit)
    }

    /// Network-specific data directory under `base`
    pub fn data_dir(&self, base: &Path) -> PathBuf {
        if self.data_subdir.is_empty() {
            base.to_path_buf()
        } else {
            base.join(self.data_subdir)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select() {
        assert_eq!(Network::select(false, false).unwrap(), Network::Main);
        assert_eq!(Network::select(true, false).unwrap(), Network::Testnet);
        assert_eq!(Network::select(false, true).unwrap(), Network::Regtest);
        assert!(matches!(
            Network::select(true, true),
            Err(InitError::ConflictingNetworks)
        ));
    }

    #[test]
    fn test_pow_limits() {
        let main = ChainParams::for_network(Network::Main);
        assert_eq!(main.pow_limit, (BigNum::one() << 224) - BigNum::one());
        assert_eq!(main.pow_limit_compact(), 0x1d00_ffff);
        assert_eq!(main.default_port, 8333);

        let test = ChainParams::for_network(Network::Testnet);
        assert_eq!(test.pow_limit, main.pow_limit);
        assert_eq!(test.default_port, 18333);

        let regtest = ChainParams::for_network(Network::Regtest);
        assert_eq!(regtest.pow_limit, (BigNum::one() << 255) - BigNum::one());
        assert_eq!(regtest.pow_limit_compact(), 0x207f_ffff);
        assert_eq!(regtest.default_port, 18444);
    }

    #[test]
    fn test_data_dir() {
        let base = Path::new("/data");
        assert_eq!(ChainParams::for_network(Network::Main).data_dir(base), base);
        assert_eq!(
            ChainParams::for_network(Network::Testnet).data_dir(base),
            base.join("testnet3")
        );
    }
}
