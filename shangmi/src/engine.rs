//! Interface to the underlying point arithmetic.
//!
//! The domain builder and key-pair generator are written against
//! [`CurveEngine`] rather than a concrete curve implementation, so they can be
//! exercised with alternate parameter sets and the backend can be replaced
//! without touching them. [`Sm2Engine`] is the production backend.

mod backend;
#[cfg(test)]
pub(crate) mod toy;

pub use self::backend::Sm2Engine;

use crate::{Error, FIELD_BYTES, Result, U256, UNCOMPRESSED_POINT_BYTES};
use core::fmt::Debug;
use elliptic_curve::bigint::Encoding;

/// SEC1 tag byte for an uncompressed point.
pub const UNCOMPRESSED_TAG: u8 = 0x04;

/// Short Weierstrass curve `y² = x³ + a·x + b` over a prime field `F_p`,
/// together with its group law.
pub trait CurveEngine: Sized {
    /// Curve point, including the identity.
    type Point: Copy + Debug + Eq;

    /// Construct the curve over the field of prime order `p`.
    ///
    /// Returns [`Error::UnsupportedCurve`] if this backend cannot represent
    /// the given field or coefficients.
    fn new_curve(p: &U256, a: &U256, b: &U256) -> Result<Self>;

    /// Is this the curve [`CurveEngine::new_curve`] builds from `(p, a, b)`?
    fn is_curve(&self, p: &U256, a: &U256, b: &U256) -> bool;

    /// Decode an uncompressed SEC1 point: `0x04 || X || Y`.
    ///
    /// Returns [`Error::InvalidPoint`] for other encodings and for
    /// coordinates which do not satisfy the curve equation.
    fn decode_point(&self, encoded: &[u8]) -> Result<Self::Point>;

    /// Does the affine point `(x, y)` satisfy the curve equation?
    fn contains(&self, x: &U256, y: &U256) -> bool;

    /// Point addition.
    fn add(&self, lhs: &Self::Point, rhs: &Self::Point) -> Self::Point;

    /// Scalar multiplication `scalar · point`.
    fn mul(&self, point: &Self::Point, scalar: &U256) -> Self::Point;

    /// Is `point` the point at infinity?
    fn is_identity(&self, point: &Self::Point) -> bool;

    /// Affine coordinates of `point`, or `None` for the identity.
    fn coordinates(&self, point: &Self::Point) -> Option<(U256, U256)>;

    /// Encode `point` as an uncompressed SEC1 point.
    fn encode_uncompressed(&self, point: &Self::Point) -> Result<[u8; UNCOMPRESSED_POINT_BYTES]> {
        let (x, y) = self.coordinates(point).ok_or(Error::InvalidPoint)?;
        let mut encoded = [0u8; UNCOMPRESSED_POINT_BYTES];
        encoded[0] = UNCOMPRESSED_TAG;
        encoded[1..1 + FIELD_BYTES].copy_from_slice(&x.to_be_bytes());
        encoded[1 + FIELD_BYTES..].copy_from_slice(&y.to_be_bytes());
        Ok(encoded)
    }
}
