/// A pair of 4-byte serialization tags, one for private and one for public
/// extended keys. The engine treats them as opaque constants.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyVersions {
    pub private: [u8; 4],
    pub public: [u8; 4],
}

impl KeyVersions {
    /// `xprv` / `xpub`
    pub const MAINNET: KeyVersions = KeyVersions {
        private: [0x04, 0x88, 0xAD, 0xE4],
        public: [0x04, 0x88, 0xB2, 0x1E],
    };

    /// `tprv` / `tpub`
    pub const TESTNET: KeyVersions = KeyVersions {
        private: [0x04, 0x35, 0x83, 0x94],
        public: [0x04, 0x35, 0x87, 0xCF],
    };

    pub const fn new(private: [u8; 4], public: [u8; 4]) -> Self {
        KeyVersions { private, public }
    }
}

impl Default for KeyVersions {
    fn default() -> Self {
        KeyVersions::MAINNET
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    pub const fn versions(self) -> KeyVersions {
        match self {
            Network::Mainnet => KeyVersions::MAINNET,
            Network::Testnet => KeyVersions::TESTNET,
        }
    }
}

impl From<Network> for KeyVersions {
    fn from(network: Network) -> Self {
        network.versions()
    }
}
