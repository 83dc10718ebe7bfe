//! Error types.

use core::fmt;

/// Error type.
///
/// Every fallible operation in this crate is all-or-nothing: an error means
/// no partial output was produced.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Input contained a character that is not a hexadecimal digit.
    InvalidHex,

    /// Byte sequence is not valid UTF-8.
    MalformedUtf8,

    /// Block padding marker missing, or followed by non-zero filler.
    Padding,

    /// Integer literal does not fit in 256 bits.
    IntegerTooLarge,

    /// Curve backend cannot represent the requested field or coefficients.
    UnsupportedCurve,

    /// Point encoding is malformed, not uncompressed, or not on the curve.
    InvalidPoint,

    /// Domain parameters are internally inconsistent.
    InvalidDomain,

    /// Scalar is outside of `[1, n - 1]`.
    InvalidScalar,

    /// The random number generator failed.
    Rng,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::InvalidHex => "invalid hexadecimal digit",
            Error::MalformedUtf8 => "malformed UTF-8 data",
            Error::Padding => "invalid block padding",
            Error::IntegerTooLarge => "integer literal exceeds 256 bits",
            Error::UnsupportedCurve => "curve not supported by backend",
            Error::InvalidPoint => "invalid curve point",
            Error::InvalidDomain => "inconsistent domain parameters",
            Error::InvalidScalar => "scalar out of range",
            Error::Rng => "random number generator failure",
        })
    }
}

impl core::error::Error for Error {}

impl From<base16ct::Error> for Error {
    fn from(_: base16ct::Error) -> Error {
        Error::InvalidHex
    }
}

impl From<core::str::Utf8Error> for Error {
    fn from(_: core::str::Utf8Error) -> Error {
        Error::MalformedUtf8
    }
}

impl From<alloc::string::FromUtf8Error> for Error {
    fn from(_: alloc::string::FromUtf8Error) -> Error {
        Error::MalformedUtf8
    }
}

impl From<rand_core::Error> for Error {
    fn from(_: rand_core::Error) -> Error {
        Error::Rng
    }
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
