//! 78-byte extended key layout and its Base58Check string form.
//!
//! `version(4) || depth(1) || parent_fingerprint(4) || child_number(4) ||
//! chain_code(32) || key(33)`, where the key is `0x00 || scalar` for private
//! keys and the compressed point for public ones.

use crate::{
    child_number::ChildNumber,
    curve,
    error::{Error, Result},
    extended_key::{ExtendedKey, KeyMaterial},
    version::KeyVersions,
};
use hdkey_crypto::base58::{base58_check_decode, base58_check_encode};
use std::{fmt, str::FromStr};
use zeroize::Zeroize;

/// Size of a serialized extended key, without checksum.
pub const SERIALIZED_SIZE: usize = 78;

/// Version pairs recognized by [`ExtendedKey::deserialize`] and `FromStr`.
pub const KNOWN_VERSIONS: [KeyVersions; 2] = [KeyVersions::MAINNET, KeyVersions::TESTNET];

impl ExtendedKey {
    pub fn serialize(&self) -> [u8; SERIALIZED_SIZE] {
        let mut bytes = [0u8; SERIALIZED_SIZE];
        bytes[..4].copy_from_slice(&self.version());
        bytes[4] = self.depth;
        bytes[5..9].copy_from_slice(&self.parent_fingerprint);
        bytes[9..13].copy_from_slice(&self.child_number.to_bytes());
        bytes[13..45].copy_from_slice(&self.chain_code);
        match &self.key {
            KeyMaterial::Private(secret) => bytes[46..].copy_from_slice(&secret.secret_bytes()),
            KeyMaterial::Public(point) => bytes[45..].copy_from_slice(&point.compress()),
        }
        bytes
    }

    /// Parses the 78-byte layout, accepting the mainnet and testnet versions.
    ///
    /// Keys built with any other [`KeyVersions`] pair fail with
    /// [`Error::InvalidVersion`]; read those back with
    /// [`ExtendedKey::deserialize_with`].
    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        Self::deserialize_with(bytes, &KNOWN_VERSIONS)
    }

    /// Parses the 78-byte layout, accepting only the given version pairs.
    pub fn deserialize_with(bytes: &[u8], accepted: &[KeyVersions]) -> Result<Self> {
        if bytes.len() != SERIALIZED_SIZE {
            return Err(Error::InvalidLength(bytes.len()));
        }

        let mut version = [0u8; 4];
        version.copy_from_slice(&bytes[..4]);
        let (versions, private) = accepted
            .iter()
            .find_map(|v| {
                if v.private == version {
                    Some((*v, true))
                } else if v.public == version {
                    Some((*v, false))
                } else {
                    None
                }
            })
            .ok_or(Error::InvalidVersion(version))?;

        let depth = bytes[4];
        let mut parent_fingerprint = [0u8; 4];
        parent_fingerprint.copy_from_slice(&bytes[5..9]);
        let mut child_number = [0u8; 4];
        child_number.copy_from_slice(&bytes[9..13]);
        let child_number = ChildNumber::from_bytes(child_number);
        if depth == 0 && (parent_fingerprint != [0u8; 4] || u32::from(child_number) != 0) {
            return Err(Error::InvalidMasterKey);
        }

        let mut chain_code = [0u8; 32];
        chain_code.copy_from_slice(&bytes[13..45]);

        let payload = &bytes[45..];
        let key = if private {
            if payload[0] != 0 {
                return Err(Error::InvalidPrivateKey);
            }
            KeyMaterial::Private(curve::validate_private_key(&payload[1..])?)
        } else {
            KeyMaterial::Public(curve::validate_public_key(payload)?)
        };

        Ok(ExtendedKey {
            versions,
            depth,
            parent_fingerprint,
            child_number,
            chain_code,
            key,
        })
    }

    /// Parses a Base58Check string, accepting only the given version pairs.
    pub fn decode_with(s: &str, accepted: &[KeyVersions]) -> Result<Self> {
        let mut data = base58_check_decode(s)?;
        let key = Self::deserialize_with(&data, accepted);
        data.zeroize();
        key
    }
}

impl fmt::Display for ExtendedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut bytes = self.serialize();
        let encoded = base58_check_encode(&bytes);
        bytes.zeroize();
        f.write_str(&encoded)
    }
}

impl FromStr for ExtendedKey {
    type Err = Error;

    /// Accepts the mainnet and testnet versions only. Strings written with a
    /// custom [`KeyVersions`] pair go through [`ExtendedKey::decode_with`].
    fn from_str(s: &str) -> Result<Self> {
        Self::decode_with(s, &KNOWN_VERSIONS)
    }
}
