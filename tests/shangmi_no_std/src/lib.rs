//! Builds `shangmi` without `std`, with the shared curve backed by
//! `once_cell::sync::Lazy`:
//!
//! ```text
//! cargo build --target thumbv7em-none-eabi
//! ```

#![no_std]

use shangmi::{CurveDomain, KeyPair, Result, Sm2Engine, U256, padding, rand_core::CryptoRngCore};

/// Shared SM2 domain.
pub fn curve() -> &'static CurveDomain<Sm2Engine> {
    shangmi::global_curve()
}

/// Key pair for a known scalar.
pub fn keypair(secret: U256) -> Result<KeyPair<Sm2Engine>> {
    KeyPair::from_private_key(curve(), secret)
}

/// Fresh key pair from a caller-supplied random source.
pub fn generate<R: CryptoRngCore>(rng: &mut R) -> Result<KeyPair<Sm2Engine>> {
    shangmi::generate_keypair(curve(), rng)
}

/// Padding round trip.
pub fn pad_roundtrip(text: &str) -> bool {
    padding::strip_block_padding(&padding::pad_to_block(text)).is_ok_and(|t| t == text)
}
