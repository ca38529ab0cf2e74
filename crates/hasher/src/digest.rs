use alloc::string::String;
use core::fmt;

use crate::{
    byte_buffer::ByteBuffer,
    error::{HashError, Result},
    hex,
};

/// A finished 16-byte MD5 digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; 16]);

impl Digest {
    /// Wraps raw digest bytes.
    #[must_use]
    pub const fn new(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// The raw digest bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// The digest as a fresh [`ByteBuffer`] positioned at its start.
    #[must_use]
    pub fn to_buffer(&self) -> ByteBuffer {
        ByteBuffer::from(self.0.as_slice())
    }

    /// 32 lowercase hex digits.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::render(&mut self.to_buffer())
    }
}

impl From<[u8; 16]> for Digest {
    fn from(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&ByteBuffer> for Digest {
    type Error = HashError;

    /// The buffer must hold exactly 16 bytes; the cursor is ignored.
    fn try_from(buf: &ByteBuffer) -> Result<Self> {
        <[u8; 16]>::try_from(buf.as_slice())
            .map(Self)
            .map_err(|_| HashError::InvalidDigestSize(buf.len()))
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::with_capacity(32);
        for &byte in &self.0 {
            hex::push_byte(&mut out, byte);
        }
        f.write_str(&out)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Digest {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
