//! MD5 hex digests of UTF-8 text.
//!
//! Text is encoded to UTF-8 into a cursor-tracked [`ByteBuffer`], padded and
//! compressed by the [`md5`] engine, and rendered as 32 lowercase hex digits.
//!
//! ```rust
//! let hex = hasher::hash_hex("0123456789ABCDEF").unwrap();
//! assert_eq!(hex, "e43df9b5a46b755ea8f1b4dd08265544");
//! ```
//!
//! MD5 is cryptographically broken. This crate exists for compatibility with
//! systems that still exchange MD5 digests, not for integrity or security.

extern crate alloc;

mod byte_buffer;
mod digest;
mod error;
pub mod hex;
pub mod md5;
mod trace;
pub mod utf8;
pub mod vectors;

#[cfg(test)]
mod tests;

use alloc::string::String;

pub use byte_buffer::ByteBuffer;
pub use digest::Digest;
pub use error::{HashError, Result};
pub use md5::Md5State;

/// Lowercase hex MD5 digest of the UTF-8 encoding of `input`.
///
/// # Errors
///
/// Only a padding defect can fail here, reported as
/// [`HashError::InvalidBlockSize`].
pub fn hash_hex(input: &str) -> Result<String> {
    render_digest(utf8::encode_str(input))
}

/// Lowercase hex MD5 digest of UTF-16 code units, encoded to UTF-8 first.
///
/// See [`utf8::encode_utf16`] for how surrogates are handled.
///
/// # Errors
///
/// See [`hash_hex`].
pub fn hash_hex_utf16(units: &[u16]) -> Result<String> {
    render_digest(utf8::encode_utf16(units))
}

/// Lowercase hex MD5 digest of a sequence of code points, encoded to UTF-8
/// first.
///
/// # Errors
///
/// Returns [`HashError::CodePointOutOfRange`] if any code point is at or above
/// `0x110000`.
pub fn hash_hex_code_points<I>(code_points: I) -> Result<String>
where
    I: IntoIterator<Item = u32>,
{
    render_digest(utf8::encode_code_points(code_points)?)
}

fn render_digest(message: ByteBuffer) -> Result<String> {
    let digest = md5::digest(message)?;
    Ok(hex::render(&mut digest.to_buffer()))
}
