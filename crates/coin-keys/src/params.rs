//! Version-byte tables per network.
//!
//! | Network        | WIF header(s) | P2PKH | P2SH |
//! |----------------|---------------|-------|------|
//! | Bitcoin main   | 0x80          | 0x00  | 0x05 |
//! | Bitcoin test   | 0xEF          | 0x6F  | 0xC4 |
//! | Monacoin main  | 0xB2, 0xB0    | 0x32  | 0x05 |
//! | Litecoin main  | 0xB0          | 0x30  | 0x50 |

use std::fmt;
use std::str::FromStr;

use crate::error::KeyError;

/// Version bytes of one network.
#[derive(Debug, PartialEq, Eq)]
pub struct Params {
    pub name: &'static str,
    /// Accepted WIF version bytes. The first one is used when encoding.
    pub dumped_private_key_headers: &'static [u8],
    pub address_header: u8,
    pub p2sh_header: u8,
}

impl Params {
    /// Version byte written in front of exported private keys.
    pub fn wif_header(&self) -> u8 {
        self.dumped_private_key_headers[0]
    }

    pub fn accepts_wif_header(&self, version: u8) -> bool {
        self.dumped_private_key_headers.contains(&version)
    }
}

pub static BITCOIN_MAIN: Params = Params {
    name: "bitcoin",
    dumped_private_key_headers: &[0x80],
    address_header: 0x00,
    p2sh_header: 0x05,
};

pub static BITCOIN_TEST: Params = Params {
    name: "bitcoin-test",
    dumped_private_key_headers: &[0xEF],
    address_header: 0x6F,
    p2sh_header: 0xC4,
};

pub static MONACOIN_MAIN: Params = Params {
    name: "monacoin",
    dumped_private_key_headers: &[0xB2, 0xB0],
    address_header: 0x32,
    p2sh_header: 0x05,
};

pub static LITECOIN_MAIN: Params = Params {
    name: "litecoin",
    dumped_private_key_headers: &[0xB0],
    address_header: 0x30,
    p2sh_header: 0x50,
};

// ============================================================================
// NETWORK SELECTOR
// ============================================================================

/// Named network, used to pick a [`Params`] table from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Network {
    #[default]
    BitcoinMain,
    BitcoinTest,
    MonacoinMain,
    LitecoinMain,
}

impl Network {
    pub fn params(self) -> &'static Params {
        match self {
            Self::BitcoinMain => &BITCOIN_MAIN,
            Self::BitcoinTest => &BITCOIN_TEST,
            Self::MonacoinMain => &MONACOIN_MAIN,
            Self::LitecoinMain => &LITECOIN_MAIN,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.params().name
    }
}

impl FromStr for Network {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bitcoin" | "bitcoin-main" | "mainnet" => Ok(Self::BitcoinMain),
            "bitcoin-test" | "testnet" => Ok(Self::BitcoinTest),
            "monacoin" | "monacoin-main" => Ok(Self::MonacoinMain),
            "litecoin" | "litecoin-main" => Ok(Self::LitecoinMain),
            _ => Err(KeyError::UnknownNetwork(s.to_string())),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
