//! Hashing, HMAC and Base58Check primitives used by HD key derivation.

pub mod base58;
pub mod hash;
pub mod hmac;

pub use crate::base58::{
    Base58Error, base58_check_decode, base58_check_encode, base58_decode, base58_encode, checksum,
};
pub use crate::hash::{hash160, ripemd160, sha256, sha256d};
pub use crate::hmac::hmac_sha512;
