//! Lowercase hexadecimal rendering.

use alloc::string::String;

use crate::byte_buffer::ByteBuffer;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Renders every byte of `buf` as two lowercase hex digits, high nibble first.
///
/// The cursor is reset before reading and ends at the end of the buffer. An
/// empty buffer renders as an empty string.
pub fn render(buf: &mut ByteBuffer) -> String {
    let mut out = String::with_capacity(buf.len() * 2);
    buf.reset();
    while let Some(byte) = buf.read() {
        push_byte(&mut out, byte);
    }
    out
}

pub(crate) fn push_byte(out: &mut String, byte: u8) {
    out.push(char::from(HEX_DIGITS[usize::from(byte >> 4)]));
    out.push(char::from(HEX_DIGITS[usize::from(byte & 0x0F)]));
}
