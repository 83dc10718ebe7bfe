#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::checked_conversions,
    clippy::implicit_saturating_sub,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

#[cfg(not(any(feature = "critical-section", feature = "std")))]
compile_error!("the global curve registry requires either the `critical-section` or `std` feature");

#[allow(unused_extern_crates)]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod codec;
pub mod engine;
pub mod padding;
pub mod registry;

mod domain;
mod error;
mod keypair;

pub use elliptic_curve::{self, bigint::U256};
pub use rand_core;

pub use crate::{
    domain::{CurveDomain, DomainParams, SM2_PARAMS, build_domain_parameters},
    engine::{CurveEngine, Sm2Engine},
    error::{Error, Result},
    keypair::{KeyPair, KeyPairGenerator, KeyPairHex, Sampling, generate_keypair},
    padding::{pad_to_block, strip_block_padding},
    registry::global_curve,
};

#[cfg(feature = "getrandom")]
pub use crate::keypair::generate_keypair_hex;

/// Size in bytes of a serialized SM2 field element or scalar.
pub const FIELD_BYTES: usize = 32;

/// Size in bytes of an uncompressed SEC1 point: `0x04 || X || Y`.
pub const UNCOMPRESSED_POINT_BYTES: usize = 1 + 2 * FIELD_BYTES;
