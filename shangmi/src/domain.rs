//! Elliptic curve domain parameters.
//!
//! SM2 recommended parameters can be found in [draft-shen-sm2-ecdsa Appendix D].
//!
//! [draft-shen-sm2-ecdsa Appendix D]: https://datatracker.ietf.org/doc/html/draft-shen-sm2-ecdsa-02#appendix-D

use crate::{Error, FIELD_BYTES, Result, Sm2Engine, U256, codec, engine::CurveEngine};
use log::debug;

/// Literal domain parameters, each given as big endian hex.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DomainParams<'a> {
    /// Field modulus `p`.
    pub p: &'a str,

    /// Curve coefficient `a`.
    pub a: &'a str,

    /// Curve coefficient `b`.
    pub b: &'a str,

    /// Base point `G` as an uncompressed point: `04 || Gx || Gy`.
    pub generator: &'a str,

    /// Order `n` of the group generated by `G`.
    pub order: &'a str,
}

/// SM2 recommended 256-bit curve.
///
/// ```text
/// p  = 0xFFFFFFFE FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF 00000000 FFFFFFFF FFFFFFFF
/// a  = 0xFFFFFFFE FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF 00000000 FFFFFFFF FFFFFFFC
/// b  = 0x28E9FA9E 9D9F5E34 4D5A9E4B CF6509A7 F39789F5 15AB8F92 DDBCBD41 4D940E93
/// Gₓ = 0x32C4AE2C 1F198119 5F990446 6A39C994 8FE30BBF F2660BE1 715A4589 334C74C7
/// Gᵧ = 0xBC3736A2 F4F6779C 59BDCEE3 6B692153 D0A9877C C62A4740 02DF32E5 2139F0A0
/// n  = 0xFFFFFFFE FFFFFFFF FFFFFFFF FFFFFFFF 7203DF6B 21C6052B 53BBF409 39D54123
/// ```
pub const SM2_PARAMS: DomainParams<'static> = DomainParams {
    p: "FFFFFFFEFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF00000000FFFFFFFFFFFFFFFF",
    a: "FFFFFFFEFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF00000000FFFFFFFFFFFFFFFC",
    b: "28E9FA9E9D9F5E344D5A9E4BCF6509A7F39789F515AB8F92DDBCBD414D940E93",
    generator: concat!(
        "04",
        "32C4AE2C1F1981195F9904466A39C9948FE30BBFF2660BE1715A4589334C74C7",
        "BC3736A2F4F6779C59BDCEE36B692153D0A9877CC62A474002DF32E52139F0A0"
    ),
    order: "FFFFFFFEFFFFFFFFFFFFFFFFFFFFFFFF7203DF6B21C6052B53BBF40939D54123",
};

/// Validated curve domain: field, equation, base point and group order.
///
/// Immutable once built. Consumers borrow it; see
/// [`global_curve`](crate::global_curve) for the shared SM2 instance.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CurveDomain<E: CurveEngine> {
    engine: E,
    p: U256,
    a: U256,
    b: U256,
    generator: E::Point,
    order: U256,
}

impl<E: CurveEngine> CurveDomain<E> {
    /// Assemble a domain from already-constructed parts.
    ///
    /// Returns [`Error::InvalidDomain`] unless `engine` computes on the curve
    /// given by `(p, a, b)`, `generator` is a point on it of order `order`,
    /// and `order > 2`.
    pub fn new(
        engine: E,
        p: U256,
        a: U256,
        b: U256,
        generator: E::Point,
        order: U256,
    ) -> Result<Self> {
        if !engine.is_curve(&p, &a, &b) {
            debug!("curve parameters do not match the engine");
            return Err(Error::InvalidDomain);
        }

        if order <= U256::from_u8(2) {
            return Err(Error::InvalidDomain);
        }

        let (gx, gy) = engine
            .coordinates(&generator)
            .ok_or(Error::InvalidDomain)?;

        if !engine.contains(&gx, &gy) {
            return Err(Error::InvalidDomain);
        }

        // Backends which reduce scalars mod n make n·G trivially the
        // identity, so also check (n-1)·G + G.
        let penultimate = engine.mul(&generator, &order.wrapping_sub(&U256::ONE));
        if !engine.is_identity(&engine.mul(&generator, &order))
            || !engine.is_identity(&engine.add(&penultimate, &generator))
        {
            return Err(Error::InvalidDomain);
        }

        Ok(Self {
            engine,
            p,
            a,
            b,
            generator,
            order,
        })
    }

    /// Parse and validate a set of literal parameters.
    pub fn from_params(params: &DomainParams<'_>) -> Result<Self> {
        let p = parse_uint(params.p)?;
        let a = parse_uint(params.a)?;
        let b = parse_uint(params.b)?;
        let order = parse_uint(params.order)?;

        let engine = E::new_curve(&p, &a, &b)?;
        let generator = engine.decode_point(&codec::hex_to_bytes(params.generator)?)?;

        debug!("building curve domain with {}-bit order", order.bits());
        Self::new(engine, p, a, b, generator, order)
    }

    /// Point arithmetic backend.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Field modulus `p`.
    pub fn p(&self) -> &U256 {
        &self.p
    }

    /// Curve coefficient `a`.
    pub fn a(&self) -> &U256 {
        &self.a
    }

    /// Curve coefficient `b`.
    pub fn b(&self) -> &U256 {
        &self.b
    }

    /// Base point `G`.
    pub fn generator(&self) -> &E::Point {
        &self.generator
    }

    /// Order `n` of the base point.
    pub fn order(&self) -> &U256 {
        &self.order
    }
}

impl CurveDomain<Sm2Engine> {
    /// SM2 recommended curve. See [`build_domain_parameters`].
    pub fn sm2() -> Self {
        build_domain_parameters()
    }
}

/// Build the SM2 domain from [`SM2_PARAMS`].
///
/// # Panics
///
/// If the built-in literals are inconsistent, which is a defect in this
/// crate rather than a runtime condition.
pub fn build_domain_parameters() -> CurveDomain<Sm2Engine> {
    CurveDomain::from_params(&SM2_PARAMS).expect("SM2 domain parameters are inconsistent")
}

/// Parse a big endian hex literal of at most 256 significant bits.
fn parse_uint(hex: &str) -> Result<U256> {
    let bytes = codec::hex_to_bytes(hex)?;
    let leading_zeros = bytes.iter().take_while(|&&b| b == 0).count();
    let significant = &bytes[leading_zeros..];

    if significant.len() > FIELD_BYTES {
        return Err(Error::IntegerTooLarge);
    }

    let mut buf = [0u8; FIELD_BYTES];
    buf[FIELD_BYTES - significant.len()..].copy_from_slice(significant);
    Ok(U256::from_be_slice(&buf))
}
