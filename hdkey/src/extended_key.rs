use crate::{
    child_number::ChildNumber,
    curve::{self, Point},
    error::{Error, Result},
    version::KeyVersions,
};
use hdkey_crypto::{hash::hash160, hmac::hmac_sha512};
use log::trace;
use secp256k1::SecretKey;
use std::fmt;
use zeroize::Zeroize;

/// HMAC key for master key generation.
const MASTER_KEY_HMAC_KEY: &[u8] = b"Bitcoin seed";

/// Key material of an extended key: a private scalar or a public point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyMaterial {
    Private(SecretKey),
    Public(Point),
}

impl KeyMaterial {
    /// The public point, computed from the scalar for private material.
    pub fn public_point(&self) -> Point {
        match self {
            KeyMaterial::Private(secret) => curve::scalar_base_multiply(secret),
            KeyMaterial::Public(point) => *point,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            KeyMaterial::Private(_) => "private",
            KeyMaterial::Public(_) => "public",
        }
    }
}

/// A key together with everything needed to derive its children.
///
/// Values are immutable: derivation and [`ExtendedKey::neuter`] always return
/// a new key and leave `self` untouched.
#[derive(Clone, PartialEq, Eq)]
pub struct ExtendedKey {
    pub(crate) versions: KeyVersions,
    pub(crate) depth: u8,
    pub(crate) parent_fingerprint: [u8; 4],
    pub(crate) child_number: ChildNumber,
    pub(crate) chain_code: [u8; 32],
    pub(crate) key: KeyMaterial,
}

fn fingerprint_of(point: &Point) -> [u8; 4] {
    let id = hash160(&point.compress());
    [id[0], id[1], id[2], id[3]]
}

/// Applies the offset `IL` to the parent key: `k + IL mod n` for a scalar,
/// `IL·G + K` for a point. A zero `IL` leaves either kind unchanged.
fn child_material(parent: &KeyMaterial, il: &[u8; 32]) -> Result<KeyMaterial> {
    let key = match parent {
        KeyMaterial::Private(secret) => {
            curve::add_scalars_mod_n(secret, il).map(KeyMaterial::Private)
        }
        // 0·G is the point at infinity, the identity for addition.
        KeyMaterial::Public(point) if *il == [0u8; 32] => {
            curve::validate_point(*point).map(KeyMaterial::Public)
        }
        KeyMaterial::Public(point) => curve::validate_private_key(il)
            .and_then(|offset| curve::scalar_base_multiply(&offset).add(point))
            .and_then(curve::validate_point)
            .map(KeyMaterial::Public),
    };
    key.map_err(|_| Error::InvalidChildKey)
}

impl ExtendedKey {
    /// Master extended private key from a seed.
    ///
    /// `I = HMAC-SHA512("Bitcoin seed", seed)`; the left half is the master
    /// scalar and the right half the chain code. Any seed length is accepted.
    pub fn new_master(seed: &[u8], versions: impl Into<KeyVersions>) -> Result<Self> {
        let mut i = hmac_sha512(MASTER_KEY_HMAC_KEY, seed);
        let secret = curve::validate_private_key(&i[..32]);
        let mut chain_code = [0u8; 32];
        chain_code.copy_from_slice(&i[32..]);
        i.zeroize();

        Ok(ExtendedKey {
            versions: versions.into(),
            depth: 0,
            parent_fingerprint: [0u8; 4],
            child_number: ChildNumber::default(),
            chain_code,
            key: KeyMaterial::Private(secret?),
        })
    }

    /// Child key derivation (CKDpriv for private keys, CKDpub for public ones).
    ///
    /// The child has the same kind and version pair as `self`. Hardened
    /// children of a public key cannot be derived. An index whose IL is not
    /// below the curve order, or whose child key is degenerate, fails with
    /// [`Error::InvalidChildKey`]; the caller decides whether to move on to
    /// the next index.
    pub fn derive_child(&self, child: impl Into<ChildNumber>) -> Result<Self> {
        let child = child.into();
        let parent_point = self.key.public_point();

        // Hardened: 0x00 || ser256(k) || ser32(i), otherwise serP(K) || ser32(i)
        let mut data = [0u8; 37];
        match (&self.key, child.is_hardened()) {
            (KeyMaterial::Public(_), true) => return Err(Error::CannotDeriveHardenedFromPublic),
            (KeyMaterial::Private(secret), true) => {
                data[1..33].copy_from_slice(&secret.secret_bytes());
            }
            (_, false) => data[..33].copy_from_slice(&parent_point.compress()),
        }
        data[33..].copy_from_slice(&child.to_bytes());

        let depth = self.depth.checked_add(1).ok_or(Error::DepthOverflow)?;

        let mut i = hmac_sha512(&self.chain_code, &data);
        data.zeroize();
        let mut il = [0u8; 32];
        il.copy_from_slice(&i[..32]);
        let mut chain_code = [0u8; 32];
        chain_code.copy_from_slice(&i[32..]);
        i.zeroize();

        let key = child_material(&self.key, &il);
        il.zeroize();
        let key = key?;

        trace!(
            "derived {} child {} at depth {}",
            key.kind(),
            child,
            depth
        );

        Ok(ExtendedKey {
            versions: self.versions,
            depth,
            parent_fingerprint: fingerprint_of(&parent_point),
            child_number: child,
            chain_code,
            key,
        })
    }

    /// Public-only projection with identical metadata and chain code.
    pub fn neuter(&self) -> Self {
        ExtendedKey {
            key: KeyMaterial::Public(self.key.public_point()),
            ..self.clone()
        }
    }

    pub fn is_private(&self) -> bool {
        matches!(self.key, KeyMaterial::Private(_))
    }

    /// Version tag matching this key's kind.
    pub fn version(&self) -> [u8; 4] {
        if self.is_private() {
            self.versions.private
        } else {
            self.versions.public
        }
    }

    pub fn versions(&self) -> KeyVersions {
        self.versions
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn parent_fingerprint(&self) -> [u8; 4] {
        self.parent_fingerprint
    }

    pub fn child_number(&self) -> ChildNumber {
        self.child_number
    }

    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }

    pub fn key_material(&self) -> &KeyMaterial {
        &self.key
    }

    /// The 32-byte private scalar, if this is a private key.
    pub fn private_key(&self) -> Option<[u8; 32]> {
        match &self.key {
            KeyMaterial::Private(secret) => Some(secret.secret_bytes()),
            KeyMaterial::Public(_) => None,
        }
    }

    /// Compressed public point.
    pub fn public_key(&self) -> [u8; 33] {
        self.key.public_point().compress()
    }

    /// `hash160` of the compressed public point.
    pub fn identifier(&self) -> [u8; 20] {
        hash160(&self.public_key())
    }

    /// First four bytes of [`ExtendedKey::identifier`]; children record it as
    /// their parent fingerprint.
    pub fn fingerprint(&self) -> [u8; 4] {
        fingerprint_of(&self.key.public_point())
    }
}

impl fmt::Debug for ExtendedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtendedKey")
            .field("kind", &self.key.kind())
            .field("version", &hex::encode(self.version()))
            .field("depth", &self.depth)
            .field("parent_fingerprint", &hex::encode(self.parent_fingerprint))
            .field("child_number", &self.child_number.to_string())
            .field("fingerprint", &hex::encode(self.fingerprint()))
            .finish_non_exhaustive()
    }
}
