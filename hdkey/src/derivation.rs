use crate::{
    child_number::ChildNumber,
    error::{Error, Result},
    extended_key::ExtendedKey,
};
use std::{fmt, str::FromStr};

/// A BIP32 derivation path (e.g., "m/44'/0'/0'/0/1").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivationPath(Vec<ChildNumber>);

impl DerivationPath {
    pub fn new(children: Vec<ChildNumber>) -> Self {
        DerivationPath(children)
    }

    /// This path extended by one step.
    pub fn child(&self, child: ChildNumber) -> Self {
        let mut children = self.0.clone();
        children.push(child);
        DerivationPath(children)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChildNumber> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[ChildNumber]> for DerivationPath {
    fn as_ref(&self) -> &[ChildNumber] {
        &self.0
    }
}

impl From<Vec<ChildNumber>> for DerivationPath {
    fn from(children: Vec<ChildNumber>) -> Self {
        DerivationPath(children)
    }
}

impl FromStr for DerivationPath {
    type Err = Error;

    /// Parses "m/44'/0'/0'/0/0", "m/44h/0h", or "44/0/0/0".
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let without_master = if s.eq_ignore_ascii_case("m") {
            return Ok(DerivationPath::default());
        } else if let Some(stripped) = s.strip_prefix("m/").or_else(|| s.strip_prefix("M/")) {
            stripped
        } else {
            s
        };

        if without_master.is_empty() {
            return Ok(DerivationPath::default());
        }

        without_master
            .split('/')
            .map(|part| {
                let (digits, hardened) = match part.strip_suffix(['\'', 'h', 'H']) {
                    Some(digits) => (digits, true),
                    None => (part, false),
                };
                // u32::from_str accepts a leading '+'.
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(Error::InvalidDerivationPath);
                }
                let index: u32 = digits.parse().map_err(|_| Error::InvalidDerivationPath)?;
                if hardened {
                    ChildNumber::hardened(index)
                } else {
                    ChildNumber::normal(index)
                }
            })
            .collect::<Result<Vec<_>>>()
            .map(DerivationPath)
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m")?;
        for child in &self.0 {
            write!(f, "/{child}")?;
        }
        Ok(())
    }
}

impl ExtendedKey {
    /// Derives along `path`, stopping at the first failing step.
    ///
    /// From a public key a hardened step fails with
    /// [`Error::CannotDeriveHardenedFromPublic`].
    pub fn derive_path(&self, path: &DerivationPath) -> Result<ExtendedKey> {
        path.iter()
            .try_fold(self.clone(), |key, &child| key.derive_child(child))
    }
}

/// True if every step of `path` can be taken from a public key.
pub fn is_public_derivable(path: &DerivationPath) -> bool {
    path.iter().all(|child| !child.is_hardened())
}
