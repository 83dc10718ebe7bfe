//! Key-pair generation.
//!
//! A private key is a scalar `d` in `[1, n-1]`; the public key is the point
//! `P = d·G`. Serialized forms are lowercase hex: 64 characters for `d`
//! (32 bytes, big endian) and 130 characters for `P` (`04 || X || Y`).
//!
//! ## Usage
#![cfg_attr(feature = "getrandom", doc = "```")]
#![cfg_attr(not(feature = "getrandom"), doc = "```ignore")]
//! use shangmi::{global_curve, KeyPairGenerator, Sampling};
//! use shangmi::rand_core::OsRng;
//!
//! let keypair = KeyPairGenerator::new(global_curve())
//!     .sampling(Sampling::Rejection)
//!     .generate(&mut OsRng)?;
//!
//! let keys = keypair.to_hex();
//! assert_eq!(keys.private_key.len(), 64);
//! assert_eq!(keys.public_key.len(), 130);
//! # Ok::<(), shangmi::Error>(())
//! ```

use crate::{
    CurveDomain, Error, FIELD_BYTES, Result, U256, UNCOMPRESSED_POINT_BYTES, codec,
    engine::CurveEngine,
};
use alloc::string::String;
use core::fmt;
use elliptic_curve::bigint::{Encoding, NonZero};
use log::trace;
use rand_core::CryptoRngCore;
use zeroize::{Zeroize, Zeroizing};

/// How the private scalar is drawn from the random source.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Sampling {
    /// Draw `r` with the bit length of `n` and use `d = (r mod (n-1)) + 1`.
    ///
    /// Always takes a single draw. The reduction makes small values of `d`
    /// very slightly more likely than large ones; this is the distribution
    /// existing SM2 key material was produced with.
    #[default]
    Reduce,

    /// Draw `r` with the bit length of `n` until `1 <= r <= n-1`.
    ///
    /// Uniform over `[1, n-1]`.
    Rejection,
}

/// Generates key pairs over a borrowed [`CurveDomain`].
#[derive(Debug)]
pub struct KeyPairGenerator<'a, E: CurveEngine> {
    domain: &'a CurveDomain<E>,
    sampling: Sampling,
}

impl<'a, E: CurveEngine> KeyPairGenerator<'a, E> {
    /// Create a generator using [`Sampling::Reduce`].
    pub fn new(domain: &'a CurveDomain<E>) -> Self {
        Self {
            domain,
            sampling: Sampling::default(),
        }
    }

    /// Select the scalar sampling strategy.
    pub fn sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }

    /// Generate a fresh key pair.
    ///
    /// Fails only if the random source does.
    pub fn generate<R: CryptoRngCore + ?Sized>(&self, rng: &mut R) -> Result<KeyPair<E>> {
        let mut secret = self.sample_scalar(rng)?;
        let keypair = KeyPair::from_private_key(self.domain, secret);
        secret.zeroize();
        keypair
    }

    fn sample_scalar<R: CryptoRngCore + ?Sized>(&self, rng: &mut R) -> Result<U256> {
        let order = self.domain.order();
        let bits = order.bits();

        match self.sampling {
            Sampling::Reduce => {
                let modulus = Option::<NonZero<U256>>::from(NonZero::new(
                    order.wrapping_sub(&U256::ONE),
                ))
                .ok_or(Error::InvalidDomain)?;

                let mut r = random_bits(rng, bits)?;
                let d = r.rem(&modulus).wrapping_add(&U256::ONE);
                r.zeroize();
                Ok(d)
            }
            Sampling::Rejection => loop {
                let mut r = random_bits(rng, bits)?;
                if r != U256::ZERO && r < *order {
                    return Ok(r);
                }
                r.zeroize();
            },
        }
    }
}

/// Uniformly random integer below `2^bits`.
fn random_bits<R: CryptoRngCore + ?Sized>(rng: &mut R, bits: usize) -> Result<U256> {
    let mut bytes = Zeroizing::new([0u8; FIELD_BYTES]);
    rng.try_fill_bytes(&mut *bytes)?;
    Ok(U256::from_be_slice(&*bytes).shr_vartime(U256::BITS - bits))
}

/// Private scalar and the public point derived from it.
///
/// The private scalar is zeroized when the key pair is dropped.
#[derive(Clone)]
pub struct KeyPair<E: CurveEngine> {
    secret: U256,
    public: E::Point,
    public_key: [u8; UNCOMPRESSED_POINT_BYTES],
}

impl<E: CurveEngine> KeyPair<E> {
    /// Derive the key pair for the private scalar `secret`.
    ///
    /// Returns [`Error::InvalidScalar`] unless `1 <= secret <= n-1`.
    pub fn from_private_key(domain: &CurveDomain<E>, secret: U256) -> Result<Self> {
        if secret == U256::ZERO || secret >= *domain.order() {
            return Err(Error::InvalidScalar);
        }

        let engine = domain.engine();
        let public = engine.mul(domain.generator(), &secret);
        let public_key = engine.encode_uncompressed(&public)?;
        trace!("derived public key {}", codec::bytes_to_hex(&public_key));

        Ok(Self {
            secret,
            public,
            public_key,
        })
    }

    /// Private scalar `d`.
    pub fn private_scalar(&self) -> &U256 {
        &self.secret
    }

    /// Public point `P = d·G`.
    pub fn public_point(&self) -> &E::Point {
        &self.public
    }

    /// Private scalar as 32 big endian bytes.
    pub fn private_key_bytes(&self) -> Zeroizing<[u8; FIELD_BYTES]> {
        Zeroizing::new(self.secret.to_be_bytes())
    }

    /// Public point as an uncompressed SEC1 encoding.
    pub fn public_key_bytes(&self) -> &[u8; UNCOMPRESSED_POINT_BYTES] {
        &self.public_key
    }

    /// Private scalar as 64 lowercase hex characters.
    pub fn private_key_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(codec::bytes_to_hex(&*self.private_key_bytes()))
    }

    /// Public point as 130 lowercase hex characters.
    pub fn public_key_hex(&self) -> String {
        codec::bytes_to_hex(&self.public_key)
    }

    /// Both keys in their hex forms.
    pub fn to_hex(&self) -> KeyPairHex {
        KeyPairHex {
            private_key: self.private_key_hex(),
            public_key: self.public_key_hex(),
        }
    }
}

impl<E: CurveEngine> Drop for KeyPair<E> {
    fn drop(&mut self) {
        self.secret.zeroize();
    }
}

impl<E: CurveEngine> fmt::Debug for KeyPair<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}

/// Hex serialization of a [`KeyPair`].
#[derive(Clone)]
pub struct KeyPairHex {
    /// 64 hex characters: `d` as 32 big endian bytes.
    pub private_key: Zeroizing<String>,

    /// 130 hex characters: `04 || X || Y`.
    pub public_key: String,
}

impl fmt::Debug for KeyPairHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPairHex")
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

/// Generate a key pair over `domain` with the default [`Sampling`].
pub fn generate_keypair<E, R>(domain: &CurveDomain<E>, rng: &mut R) -> Result<KeyPair<E>>
where
    E: CurveEngine,
    R: CryptoRngCore + ?Sized,
{
    KeyPairGenerator::new(domain).generate(rng)
}

/// Generate an SM2 key pair from the operating system's random source and
/// return it in hex form.
#[cfg(feature = "getrandom")]
pub fn generate_keypair_hex() -> Result<KeyPairHex> {
    generate_keypair(crate::global_curve(), &mut rand_core::OsRng).map(|keypair| keypair.to_hex())
}
