//! Conversions between raw bytes, hexadecimal strings and UTF-8 text.
//!
//! Bytes are `u8` everywhere in this crate. Some SM4 consumers carry byte
//! sequences as signed 8-bit integers (range `-128..=127`); the `signed_*`
//! functions convert at that boundary and nowhere else.
//!
//! Hex output is lowercase unless stated otherwise. Hex input is accepted in
//! either case, and an odd-length input is left-padded with a single `0`
//! nibble before decoding.
//!
//! ## Usage
//!
//! ```
//! use shangmi::codec;
//!
//! assert_eq!(codec::bytes_to_hex(&[0, 255, 16]), "00ff10");
//! assert_eq!(codec::hex_to_signed_bytes("ff")?, [-1]);
//! assert_eq!(codec::signed_bytes_to_hex(&[-1]), "ff");
//!
//! let bytes = codec::utf8_text_to_signed_bytes("密钥");
//! assert_eq!(codec::signed_bytes_to_utf8_text(&bytes)?, "密钥");
//! # Ok::<(), shangmi::Error>(())
//! ```

use crate::Result;
use alloc::{borrow::ToOwned, string::String, vec::Vec};

/// Encode `text` as UTF-8 and render each byte as two hex digits.
pub fn utf8_text_to_hex(text: &str) -> String {
    bytes_to_hex(text.as_bytes())
}

/// Render each byte as two lowercase hex digits, e.g. `5` becomes `"05"`.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    base16ct::lower::encode_string(bytes)
}

/// Render each byte as two uppercase hex digits.
pub fn bytes_to_upper_hex(bytes: &[u8]) -> String {
    base16ct::upper::encode_string(bytes)
}

/// Decode a hex string into bytes.
///
/// Odd-length input is treated as if it had a leading `0`, so `"abc"`
/// decodes to `[0x0a, 0xbc]`.
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>> {
    let bytes = if hex.len() % 2 == 0 {
        base16ct::mixed::decode_vec(hex)?
    } else {
        base16ct::mixed::decode_vec(left_pad(hex, hex.len() + 1))?
    };

    Ok(bytes)
}

/// Decode a hex string into signed bytes: values `>= 0x80` map to `v - 256`.
pub fn hex_to_signed_bytes(hex: &str) -> Result<Vec<i8>> {
    hex_to_bytes(hex).map(|bytes| to_signed(&bytes))
}

/// Render signed bytes as hex, mapping negative values to `v + 256` first.
pub fn signed_bytes_to_hex(bytes: &[i8]) -> String {
    bytes_to_hex(&to_unsigned(bytes))
}

/// Interpret bytes as UTF-8 text.
pub fn bytes_to_utf8_text(bytes: &[u8]) -> Result<String> {
    Ok(core::str::from_utf8(bytes)?.to_owned())
}

/// Interpret signed bytes as UTF-8 text.
pub fn signed_bytes_to_utf8_text(bytes: &[i8]) -> Result<String> {
    Ok(String::from_utf8(to_unsigned(bytes))?)
}

/// Encode `text` as UTF-8 (1 to 4 bytes per code point) in signed form.
pub fn utf8_text_to_signed_bytes(text: &str) -> Vec<i8> {
    to_signed(text.as_bytes())
}

/// Reinterpret unsigned bytes as signed 8-bit integers.
pub fn to_signed(bytes: &[u8]) -> Vec<i8> {
    bytes.iter().map(|&b| i8::from_be_bytes([b])).collect()
}

/// Reinterpret signed 8-bit integers as unsigned bytes.
pub fn to_unsigned(bytes: &[i8]) -> Vec<u8> {
    bytes.iter().map(|&b| b.to_be_bytes()[0]).collect()
}

/// Left-pad `input` with `'0'` up to `width` characters.
///
/// Inputs already at least `width` long are returned unchanged.
pub fn left_pad(input: &str, width: usize) -> String {
    let mut padded = String::with_capacity(width.max(input.len()));
    for _ in input.len()..width {
        padded.push('0');
    }
    padded.push_str(input);
    padded
}
