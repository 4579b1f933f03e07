//! secp256k1 point and scalar operations needed for key derivation.
//!
//! Curve parameters and the precomputed context are process-wide constants;
//! every function here is pure.

use crate::error::{Error, Result};
use secp256k1::{PublicKey, SECP256K1, Scalar, SecretKey, constants};

/// Order `n` of the secp256k1 base point, big-endian.
pub const CURVE_ORDER: [u8; 32] = constants::CURVE_ORDER;

/// Length of a serialized private scalar.
pub const SCALAR_SIZE: usize = constants::SECRET_KEY_SIZE;

/// Length of a SEC1 compressed point.
pub const COMPRESSED_POINT_SIZE: usize = constants::PUBLIC_KEY_SIZE;

/// An affine point on secp256k1. The point at infinity is not representable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point(PublicKey);

impl Point {
    /// SEC1 compressed form: `0x02`/`0x03` by y parity, then x.
    pub fn compress(&self) -> [u8; COMPRESSED_POINT_SIZE] {
        self.0.serialize()
    }

    pub fn x(&self) -> [u8; 32] {
        let uncompressed = self.0.serialize_uncompressed();
        let mut x = [0u8; 32];
        x.copy_from_slice(&uncompressed[1..33]);
        x
    }

    pub fn y(&self) -> [u8; 32] {
        let uncompressed = self.0.serialize_uncompressed();
        let mut y = [0u8; 32];
        y.copy_from_slice(&uncompressed[33..65]);
        y
    }

    /// Point addition. Fails when the sum is the point at infinity.
    pub fn add(&self, other: &Point) -> Result<Point> {
        self.0
            .combine(&other.0)
            .map(Point)
            .map_err(|_| Error::InvalidPublicKey)
    }

    fn has_zero_coordinate(&self) -> bool {
        self.x() == [0u8; 32] || self.y() == [0u8; 32]
    }
}

/// Computes `scalar · G`.
pub fn scalar_base_multiply(scalar: &SecretKey) -> Point {
    Point(PublicKey::from_secret_key(SECP256K1, scalar))
}

/// Recovers a point from its 33-byte compressed form.
///
/// y is recovered from `y² = x³ + 7 mod p` and the root matching the prefix
/// parity is kept. Fails if x is not on the curve.
pub fn decompress(bytes: &[u8]) -> Result<Point> {
    if bytes.len() != COMPRESSED_POINT_SIZE || !matches!(bytes[0], 0x02 | 0x03) {
        return Err(Error::InvalidPublicKey);
    }
    PublicKey::from_slice(bytes)
        .map(Point)
        .map_err(|_| Error::InvalidPublicKey)
}

/// `(scalar + tweak) mod n`.
///
/// Fails if `tweak >= n` or the sum is zero; neither wraps silently.
pub fn add_scalars_mod_n(scalar: &SecretKey, tweak: &[u8; 32]) -> Result<SecretKey> {
    let tweak = Scalar::from_be_bytes(*tweak).map_err(|_| Error::InvalidPrivateKey)?;
    scalar
        .add_tweak(&tweak)
        .map_err(|_| Error::InvalidPrivateKey)
}

/// Accepts exactly 32 bytes encoding a scalar in `[1, n-1]`.
pub fn validate_private_key(bytes: &[u8]) -> Result<SecretKey> {
    if bytes.len() != SCALAR_SIZE {
        return Err(Error::InvalidPrivateKey);
    }
    SecretKey::from_slice(bytes).map_err(|_| Error::InvalidPrivateKey)
}

/// Accepts a compressed point on the curve with no zero coordinate.
pub fn validate_public_key(bytes: &[u8]) -> Result<Point> {
    validate_point(decompress(bytes)?)
}

pub(crate) fn validate_point(point: Point) -> Result<Point> {
    if point.has_zero_coordinate() {
        return Err(Error::InvalidPublicKey);
    }
    Ok(point)
}
