use crate::error::{Error, Result};
use std::fmt;

/// Index offset for hardened children, 2³¹.
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

// Normal child indices: 0 to 2³¹-1
// Hardened child indices: 2³¹ to 2³²-1

/// Index of a key below its parent. The top bit marks hardened derivation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChildNumber(u32);

impl ChildNumber {
    pub fn normal(index: u32) -> Result<Self> {
        if index >= HARDENED_OFFSET {
            return Err(Error::InvalidDerivationPath);
        }
        Ok(ChildNumber(index))
    }

    pub fn hardened(index: u32) -> Result<Self> {
        if index >= HARDENED_OFFSET {
            return Err(Error::InvalidDerivationPath);
        }
        Ok(ChildNumber(index | HARDENED_OFFSET))
    }

    pub const fn is_hardened(self) -> bool {
        self.0 & HARDENED_OFFSET != 0
    }

    /// Index without the hardened bit.
    pub const fn index(self) -> u32 {
        self.0 & !HARDENED_OFFSET
    }

    /// Big-endian `ser32` encoding.
    pub const fn to_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        ChildNumber(u32::from_be_bytes(bytes))
    }
}

impl From<u32> for ChildNumber {
    fn from(raw: u32) -> Self {
        ChildNumber(raw)
    }
}

impl From<ChildNumber> for u32 {
    fn from(child: ChildNumber) -> Self {
        child.0
    }
}

impl fmt::Display for ChildNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_hardened() {
            write!(f, "{}'", self.index())
        } else {
            write!(f, "{}", self.index())
        }
    }
}
