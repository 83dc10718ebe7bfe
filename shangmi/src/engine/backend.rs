//! SM2 backend built on the `sm2` crate's constant-time arithmetic.

use super::CurveEngine;
use crate::{Error, Result, U256};
use elliptic_curve::{
    Group,
    bigint::ArrayEncoding,
    ff::PrimeField,
    ops::Reduce,
    sec1::{Coordinates, FromEncodedPoint, Tag, ToEncodedPoint},
};
use primeorder::PrimeCurveParams;
use sm2::{AffinePoint, EncodedPoint, ProjectivePoint, Scalar, Sm2};

type FieldElement = <Sm2 as PrimeCurveParams>::FieldElement;

/// [`CurveEngine`] for the SM2 recommended curve.
///
/// The field and curve equation are fixed at compile time, so
/// [`CurveEngine::new_curve`] only accepts the SM2 modulus and coefficients.
/// Scalars are reduced modulo the group order before multiplication.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Sm2Engine;

impl Sm2Engine {
    /// Canonical field element for `x`, if `x < p`.
    fn field_element(x: &U256) -> Option<FieldElement> {
        FieldElement::from_repr(x.to_be_byte_array()).into()
    }

    /// Are `(p, a, b)` the SM2 field modulus and equation coefficients?
    fn is_sm2_curve(p: &U256, a: &U256, b: &U256) -> bool {
        // p - 1 is canonical and equal to -1 only in the field of order p
        let same_field = Self::field_element(&p.wrapping_sub(&U256::ONE))
            .is_some_and(|max| bool::from((max + FieldElement::ONE).is_zero()));

        same_field
            && Self::field_element(a) == Some(Sm2::EQUATION_A)
            && Self::field_element(b) == Some(Sm2::EQUATION_B)
    }
}

impl CurveEngine for Sm2Engine {
    type Point = ProjectivePoint;

    fn new_curve(p: &U256, a: &U256, b: &U256) -> Result<Self> {
        if Self::is_sm2_curve(p, a, b) {
            Ok(Sm2Engine)
        } else {
            Err(Error::UnsupportedCurve)
        }
    }

    fn is_curve(&self, p: &U256, a: &U256, b: &U256) -> bool {
        Self::is_sm2_curve(p, a, b)
    }

    fn decode_point(&self, encoded: &[u8]) -> Result<ProjectivePoint> {
        let encoded = EncodedPoint::from_bytes(encoded).map_err(|_| Error::InvalidPoint)?;
        if encoded.tag() != Tag::Uncompressed {
            return Err(Error::InvalidPoint);
        }

        Option::<AffinePoint>::from(AffinePoint::from_encoded_point(&encoded))
            .map(ProjectivePoint::from)
            .ok_or(Error::InvalidPoint)
    }

    fn contains(&self, x: &U256, y: &U256) -> bool {
        match (Self::field_element(x), Self::field_element(y)) {
            (Some(x), Some(y)) => {
                y.square() == x.square() * x + Sm2::EQUATION_A * x + Sm2::EQUATION_B
            }
            _ => false,
        }
    }

    fn add(&self, lhs: &ProjectivePoint, rhs: &ProjectivePoint) -> ProjectivePoint {
        *lhs + *rhs
    }

    fn mul(&self, point: &ProjectivePoint, scalar: &U256) -> ProjectivePoint {
        *point * <Scalar as Reduce<U256>>::reduce(*scalar)
    }

    fn is_identity(&self, point: &ProjectivePoint) -> bool {
        point.is_identity().into()
    }

    fn coordinates(&self, point: &ProjectivePoint) -> Option<(U256, U256)> {
        match point.to_affine().to_encoded_point(false).coordinates() {
            Coordinates::Uncompressed { x, y } => {
                Some((U256::from_be_slice(x), U256::from_be_slice(y)))
            }
            _ => None,
        }
    }
}
