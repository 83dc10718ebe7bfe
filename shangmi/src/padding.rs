//! Block padding for 16-byte block ciphers such as SM4.
//!
//! Data is followed by a single `0x80` marker byte and then `0x00` filler up
//! to the next block boundary. Input that is already block-aligned gains a
//! full extra block `80 00 .. 00`, so every padded message carries exactly
//! one marker in its final block.
//!
//! ## Usage
//!
//! ```
//! use shangmi::padding::{pad_to_block, strip_block_padding};
//!
//! let padded = pad_to_block("abc");
//! assert_eq!(padded, "61626380000000000000000000000000");
//! assert_eq!(strip_block_padding(&padded)?, "abc");
//! # Ok::<(), shangmi::Error>(())
//! ```

use crate::{Error, Result, codec};
use alloc::{string::String, vec::Vec};
use log::debug;

/// Cipher block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Padding marker byte.
pub const MARKER: u8 = 0x80;

/// Padding marker as it appears in hex text.
const MARKER_HEX: &str = "80";

/// Pad `data` to a multiple of [`BLOCK_SIZE`].
pub fn pad_block(data: &[u8]) -> Vec<u8> {
    let padded_len = (data.len() / BLOCK_SIZE + 1) * BLOCK_SIZE;
    let mut padded = Vec::with_capacity(padded_len);
    padded.extend_from_slice(data);
    padded.push(MARKER);
    padded.resize(padded_len, 0);
    padded
}

/// Remove the padding added by [`pad_block`], returning the data in front of
/// the marker.
///
/// The input must be a non-empty multiple of [`BLOCK_SIZE`] and its last
/// `0x80` byte must be inside the final block with only zeros after it.
pub fn unpad_block(padded: &[u8]) -> Result<&[u8]> {
    if padded.is_empty() || padded.len() % BLOCK_SIZE != 0 {
        debug!("padded length {} is not block aligned", padded.len());
        return Err(Error::Padding);
    }

    let marker = padded
        .iter()
        .rposition(|&b| b == MARKER)
        .ok_or(Error::Padding)?;

    let filler = &padded[marker + 1..];
    if filler.len() >= BLOCK_SIZE || filler.iter().any(|&b| b != 0) {
        debug!("rejecting {} filler bytes after padding marker", filler.len());
        return Err(Error::Padding);
    }

    Ok(&padded[..marker])
}

/// Pad the UTF-8 encoding of `text` and render it as uppercase hex.
///
/// The output length is always a multiple of 32 hex characters.
pub fn pad_to_block(text: &str) -> String {
    codec::bytes_to_upper_hex(&pad_block(text.as_bytes()))
}

/// Strip the padding from hex produced by [`pad_to_block`] and decode the
/// remaining bytes as UTF-8 text.
///
/// The marker is the last occurrence of the characters `80`. Every
/// two-character window of the filler after it must read `00`; a lone
/// trailing character forms no window and is not checked. Filler failing
/// this check is reported as [`Error::Padding`] and never truncated.
pub fn strip_block_padding(hex: &str) -> Result<String> {
    let Some(index) = hex.rfind(MARKER_HEX) else {
        debug!("padding marker not found");
        return Err(Error::Padding);
    };

    let filler = &hex.as_bytes()[index + MARKER_HEX.len()..];
    if !filler.windows(2).all(|pair| pair == b"00") {
        debug!("non-zero filler after padding marker at offset {index}");
        return Err(Error::Padding);
    }

    codec::bytes_to_utf8_text(&codec::hex_to_bytes(&hex[..index])?)
}
