//! UTF-8 encoding into a [`ByteBuffer`] by explicit bit-packing.
//!
//! Three entry points cover the three shapes text arrives in: a Rust `&str`,
//! a raw sequence of `u32` code points, and UTF-16 code units. The last one
//! walks the units the way a code-point-at loop does: an astral character
//! is read from its high surrogate and the following low surrogate is then
//! skipped.

use crate::{
    byte_buffer::ByteBuffer,
    error::{HashError, Result},
};

/// One past the largest Unicode code point.
pub const CODE_POINT_LIMIT: u32 = 0x11_0000;

/// Appends the UTF-8 form of `cp` at the buffer's cursor and returns how many
/// bytes were written.
///
/// # Errors
///
/// Returns [`HashError::CodePointOutOfRange`] for `cp >= 0x110000`. Nothing is
/// written in that case.
pub fn encode_code_point(buf: &mut ByteBuffer, cp: u32) -> Result<usize> {
    if cp >= CODE_POINT_LIMIT {
        return Err(HashError::CodePointOutOfRange(cp));
    }
    Ok(write_scalar(buf, cp))
}

/// Appends the UTF-8 form of `c` and returns how many bytes were written.
pub fn encode_char(buf: &mut ByteBuffer, c: char) -> usize {
    write_scalar(buf, u32::from(c))
}

/// Bit-packs a code point already known to be below [`CODE_POINT_LIMIT`].
#[allow(clippy::cast_possible_truncation)]
fn write_scalar(buf: &mut ByteBuffer, cp: u32) -> usize {
    debug_assert!(cp < CODE_POINT_LIMIT, "code point {cp:#x} out of range");
    if cp < 0x80 {
        buf.write(cp as u8);
        1
    } else if cp < 0x800 {
        buf.write(0xC0 | (cp >> 6) as u8);
        buf.write(0x80 | (cp & 0x3F) as u8);
        2
    } else if cp < 0x1_0000 {
        buf.write(0xE0 | (cp >> 12) as u8);
        buf.write(0x80 | ((cp >> 6) & 0x3F) as u8);
        buf.write(0x80 | (cp & 0x3F) as u8);
        3
    } else {
        buf.write(0xF0 | (cp >> 18) as u8);
        buf.write(0x80 | ((cp >> 12) & 0x3F) as u8);
        buf.write(0x80 | ((cp >> 6) & 0x3F) as u8);
        buf.write(0x80 | (cp & 0x3F) as u8);
        4
    }
}

/// Encodes a string slice. The returned buffer is positioned at its start.
#[must_use]
pub fn encode_str(s: &str) -> ByteBuffer {
    let mut buf = ByteBuffer::with_capacity(s.len());
    for c in s.chars() {
        encode_char(&mut buf, c);
    }
    buf.reset();
    buf
}

/// Encodes a sequence of code points.
///
/// # Errors
///
/// Fails with [`HashError::CodePointOutOfRange`] on the first code point at or
/// above `0x110000`; no partial buffer is returned.
pub fn encode_code_points<I>(code_points: I) -> Result<ByteBuffer>
where
    I: IntoIterator<Item = u32>,
{
    let mut buf = ByteBuffer::new();
    for cp in code_points {
        encode_code_point(&mut buf, cp)?;
    }
    buf.reset();
    Ok(buf)
}

/// Encodes UTF-16 code units.
///
/// A high surrogate immediately followed by a low surrogate is combined into
/// one astral code point and both units are consumed. Any other surrogate is
/// encoded on its own as a three-byte sequence.
#[must_use]
pub fn encode_utf16(units: &[u16]) -> ByteBuffer {
    let mut buf = ByteBuffer::with_capacity(units.len() * 3);
    let mut i = 0;
    while i < units.len() {
        // A unit or a combined pair never exceeds U+10FFFF.
        let cp = code_point_at(units, i);
        if write_scalar(&mut buf, cp) == 4 {
            i += 1;
        }
        i += 1;
    }
    buf.reset();
    buf
}

/// The code point starting at `units[i]`, combining a surrogate pair when one
/// starts there.
fn code_point_at(units: &[u16], i: usize) -> u32 {
    let first = u32::from(units[i]);
    if (0xD800..0xDC00).contains(&first) {
        if let Some(&second) = units.get(i + 1) {
            let second = u32::from(second);
            if (0xDC00..0xE000).contains(&second) {
                return 0x1_0000 + ((first - 0xD800) << 10) + (second - 0xDC00);
            }
        }
    }
    first
}
