use hdkey_crypto::Base58Error;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Scalar is zero, not below the curve order, or not 32 bytes.
    #[error("invalid private key")]
    InvalidPrivateKey,
    /// Point is not on the curve or has a zero coordinate.
    #[error("invalid public key")]
    InvalidPublicKey,
    /// IL is not below the curve order or the derived key is degenerate.
    #[error("derived child key is invalid for this index")]
    InvalidChildKey,
    #[error("cannot derive a hardened child from a public key")]
    CannotDeriveHardenedFromPublic,
    #[error("invalid base58 character {0:?}")]
    InvalidCharacter(char),
    #[error("base58check checksum mismatch")]
    ChecksumMismatch,
    #[error("invalid extended key length: {0} bytes")]
    InvalidLength(usize),
    #[error("unknown extended key version {}", hex::encode(.0))]
    InvalidVersion([u8; 4]),
    /// Depth 0 with a non-zero parent fingerprint or child number.
    #[error("master key carries parent metadata")]
    InvalidMasterKey,
    #[error("maximum derivation depth exceeded")]
    DepthOverflow,
    #[error("invalid derivation path")]
    InvalidDerivationPath,
}

impl From<Base58Error> for Error {
    fn from(err: Base58Error) -> Self {
        match err {
            Base58Error::InvalidCharacter(c) => Error::InvalidCharacter(c),
            Base58Error::ChecksumMismatch => Error::ChecksumMismatch,
            // Decoded data too short to even hold a checksum.
            Base58Error::InvalidLength(len) => Error::InvalidLength(len),
        }
    }
}
