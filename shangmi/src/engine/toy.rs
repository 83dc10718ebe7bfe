//! Tiny curve `y² = x³ + 5x + 1` over `F_1009` with prime order 1039.
//!
//! Small enough to enumerate, used to exercise the domain builder and key
//! generation against parameters other than SM2.

use super::CurveEngine;
use crate::{DomainParams, Error, FIELD_BYTES, Result, U256, UNCOMPRESSED_POINT_BYTES};
use elliptic_curve::bigint::Encoding;

pub(crate) const TOY_PARAMS: DomainParams<'static> = DomainParams {
    p: "3f1",
    a: "5",
    b: "1",
    generator: concat!(
        "04",
        "0000000000000000000000000000000000000000000000000000000000000000",
        "0000000000000000000000000000000000000000000000000000000000000001"
    ),
    order: "40f",
};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum ToyPoint {
    Identity,
    Affine(u64, u64),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct ToyEngine {
    p: u64,
    a: u64,
    b: u64,
}

fn small(x: &U256) -> Option<u64> {
    let bytes = x.to_be_bytes();
    let (high, low) = bytes.split_at(FIELD_BYTES - 8);
    if high.iter().any(|&b| b != 0) {
        return None;
    }
    Some(u64::from_be_bytes(low.try_into().ok()?))
}

impl ToyEngine {
    fn mul_mod(&self, x: u64, y: u64) -> u64 {
        (x * y) % self.p
    }

    fn invert(&self, x: u64) -> u64 {
        let (mut base, mut exp, mut acc) = (x % self.p, self.p - 2, 1);
        while exp > 0 {
            if exp & 1 == 1 {
                acc = self.mul_mod(acc, base);
            }
            base = self.mul_mod(base, base);
            exp >>= 1;
        }
        acc
    }

    fn on_curve(&self, x: u64, y: u64) -> bool {
        x < self.p
            && y < self.p
            && self.mul_mod(y, y)
                == (self.mul_mod(self.mul_mod(x, x), x) + self.mul_mod(self.a, x) + self.b) % self.p
    }
}

impl CurveEngine for ToyEngine {
    type Point = ToyPoint;

    fn new_curve(p: &U256, a: &U256, b: &U256) -> Result<Self> {
        match (small(p), small(a), small(b)) {
            (Some(p), Some(a), Some(b)) if p > 3 && p < 1 << 31 && a < p && b < p => {
                Ok(Self { p, a, b })
            }
            _ => Err(Error::UnsupportedCurve),
        }
    }

    fn is_curve(&self, p: &U256, a: &U256, b: &U256) -> bool {
        (small(p), small(a), small(b)) == (Some(self.p), Some(self.a), Some(self.b))
    }

    fn decode_point(&self, encoded: &[u8]) -> Result<ToyPoint> {
        if encoded.len() != UNCOMPRESSED_POINT_BYTES || encoded[0] != super::UNCOMPRESSED_TAG {
            return Err(Error::InvalidPoint);
        }

        let x = small(&U256::from_be_slice(&encoded[1..1 + FIELD_BYTES]));
        let y = small(&U256::from_be_slice(&encoded[1 + FIELD_BYTES..]));
        match (x, y) {
            (Some(x), Some(y)) if self.on_curve(x, y) => Ok(ToyPoint::Affine(x, y)),
            _ => Err(Error::InvalidPoint),
        }
    }

    fn contains(&self, x: &U256, y: &U256) -> bool {
        match (small(x), small(y)) {
            (Some(x), Some(y)) => self.on_curve(x, y),
            _ => false,
        }
    }

    fn add(&self, lhs: &ToyPoint, rhs: &ToyPoint) -> ToyPoint {
        let p = self.p;
        match (*lhs, *rhs) {
            (ToyPoint::Identity, q) | (q, ToyPoint::Identity) => q,
            (ToyPoint::Affine(x1, y1), ToyPoint::Affine(x2, y2)) => {
                if x1 == x2 && (y1 + y2) % p == 0 {
                    return ToyPoint::Identity;
                }

                let slope = if x1 == x2 {
                    self.mul_mod((3 * self.mul_mod(x1, x1) + self.a) % p, self.invert(2 * y1))
                } else {
                    self.mul_mod((y2 + p - y1) % p, self.invert((x2 + p - x1) % p))
                };

                let x3 = (self.mul_mod(slope, slope) + 2 * p - x1 - x2) % p;
                let y3 = (self.mul_mod(slope, (x1 + p - x3) % p) + p - y1) % p;
                ToyPoint::Affine(x3, y3)
            }
        }
    }

    fn mul(&self, point: &ToyPoint, scalar: &U256) -> ToyPoint {
        let mut acc = ToyPoint::Identity;
        for byte in scalar.to_be_bytes() {
            for bit in (0..8).rev() {
                acc = self.add(&acc, &acc);
                if (byte >> bit) & 1 == 1 {
                    acc = self.add(&acc, point);
                }
            }
        }
        acc
    }

    fn is_identity(&self, point: &ToyPoint) -> bool {
        *point == ToyPoint::Identity
    }

    fn coordinates(&self, point: &ToyPoint) -> Option<(U256, U256)> {
        match *point {
            ToyPoint::Identity => None,
            ToyPoint::Affine(x, y) => Some((U256::from_u64(x), U256::from_u64(y))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy_engine() -> ToyEngine {
        ToyEngine::new_curve(&U256::from_u64(1009), &U256::from_u64(5), &U256::ONE).unwrap()
    }

    #[test]
    fn group_order() {
        let engine = toy_engine();
        let g = ToyPoint::Affine(0, 1);

        assert_eq!(engine.mul(&g, &U256::from_u64(5)), ToyPoint::Affine(944, 292));
        assert!(engine.is_identity(&engine.mul(&g, &U256::from_u64(1039))));

        let mut acc = ToyPoint::Identity;
        for _ in 0..1038 {
            acc = engine.add(&acc, &g);
            assert!(!engine.is_identity(&acc));
            let (x, y) = engine.coordinates(&acc).unwrap();
            assert!(engine.contains(&x, &y));
        }
        assert!(engine.is_identity(&engine.add(&acc, &g)));
    }

    #[test]
    fn rejects_unreduced_coefficients() {
        let p = U256::from_u64(1009);
        let large = U256::from_u64(u64::MAX);

        assert_eq!(
            ToyEngine::new_curve(&p, &large, &U256::ONE),
            Err(Error::UnsupportedCurve)
        );
        assert_eq!(
            ToyEngine::new_curve(&p, &U256::from_u64(5), &p),
            Err(Error::UnsupportedCurve)
        );
    }

    #[test]
    fn is_curve_exact() {
        let engine = toy_engine();
        assert!(engine.is_curve(&U256::from_u64(1009), &U256::from_u64(5), &U256::ONE));
        assert!(!engine.is_curve(&U256::from_u64(1009), &U256::from_u64(1014), &U256::ONE));
    }
}
