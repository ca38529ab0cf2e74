//! Cursor-tracked byte buffer.
//!
//! The digest engine interleaves sequential writes (padding) with block-wise
//! re-reads (word extraction) on the same storage, so the buffer keeps a read
//! and write cursor that is independent of its length.
//!
//! Invariant: `cursor <= data.len()` at all times. A write at `cursor ==
//! data.len()` appends; any other write overwrites in place.

use alloc::vec::Vec;
use core::fmt;

use bstr::BStr;

use crate::error::{HashError, Result};

/// A resizable sequence of bytes with a single cursor.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ByteBuffer {
    data: Vec<u8>,
    cursor: usize,
}

impl ByteBuffer {
    /// Creates an empty buffer positioned at its start.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty buffer with room for `bytes` bytes.
    #[must_use]
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            data: Vec::with_capacity(bytes),
            cursor: 0,
        }
    }

    /// Four bytes of `n`, most significant first.
    #[must_use]
    pub fn from_u32_be(n: u32) -> Self {
        Self::from(n.to_be_bytes().as_slice())
    }

    /// Eight big-endian bytes of a message bit length.
    ///
    /// Only the low 32 bits are representable; the high four bytes are always
    /// zero, so messages of `2^32` bits or more get a truncated length.
    #[must_use]
    pub fn from_bit_length(bits: u32) -> Self {
        let mut buf = Self::with_capacity(8);
        buf.data.extend_from_slice(&[0; 4]);
        buf.data.extend_from_slice(&bits.to_be_bytes());
        buf
    }

    /// Stores `byte` at the cursor and advances it.
    pub fn write(&mut self, byte: u8) {
        if self.cursor >= self.data.len() {
            self.data.push(byte);
            self.cursor = self.data.len();
        } else {
            self.data[self.cursor] = byte;
            self.cursor += 1;
        }
    }

    /// Validated write for values that are not statically known to be bytes.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::InvalidInput`] if `value` is outside `0..=255`.
    /// The buffer is left untouched in that case.
    pub fn write_value(&mut self, value: impl Into<i64>) -> Result<()> {
        let value = value.into();
        let byte = u8::try_from(value).map_err(|_| HashError::InvalidInput(value))?;
        self.write(byte);
        Ok(())
    }

    /// Returns the byte at the cursor and advances, or `None` at end of data.
    pub fn read(&mut self) -> Option<u8> {
        let byte = *self.data.get(self.cursor)?;
        self.cursor += 1;
        Some(byte)
    }

    /// Reads up to `n` bytes into a new buffer positioned at its own start.
    ///
    /// A short read at end of data is not an error; the returned buffer is
    /// simply smaller than `n`.
    pub fn read_block(&mut self, n: usize) -> ByteBuffer {
        let end = self.cursor.saturating_add(n).min(self.data.len());
        let block = ByteBuffer::from(&self.data[self.cursor..end]);
        self.cursor = end;
        block
    }

    /// Writes every byte of `other`, from its start, at this buffer's cursor.
    pub fn write_block(&mut self, other: &ByteBuffer) {
        for &byte in &other.data {
            self.write(byte);
        }
    }

    /// Moves the cursor back to the start.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Moves the cursor to the end, so the next write appends.
    pub fn seek_to_end(&mut self) {
        self.cursor = self.data.len();
    }

    /// Moves the cursor to `n`. Returns `false` without moving if `n` is past
    /// the end.
    pub fn seek(&mut self, n: usize) -> bool {
        if n > self.data.len() {
            return false;
        }
        self.cursor = n;
        true
    }

    /// Reverses the stored bytes in place. The cursor is not moved.
    pub fn reverse(&mut self) -> &mut Self {
        self.data.reverse();
        self
    }

    /// Interprets the buffer as a big-endian `u32`.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::InvalidWordSize`] unless the buffer holds exactly
    /// four bytes.
    pub fn to_u32_be(&self) -> Result<u32> {
        let word: [u8; 4] = self
            .data
            .as_slice()
            .try_into()
            .map_err(|_| HashError::InvalidWordSize(self.data.len()))?;
        Ok(u32::from_be_bytes(word))
    }

    /// Number of stored bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current cursor position.
    #[must_use]
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Bytes between the cursor and the end.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.cursor
    }

    /// All stored bytes, regardless of the cursor.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the buffer and returns its bytes.
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self { data, cursor: 0 }
    }
}

impl From<&[u8]> for ByteBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self::from(bytes.to_vec())
    }
}

impl fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteBuffer")
            .field("data", &BStr::new(&self.data))
            .field("cursor", &self.cursor)
            .finish()
    }
}
