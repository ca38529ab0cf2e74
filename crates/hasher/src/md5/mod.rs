//! The MD5 compression engine (RFC 1321).
//!
//! A digest runs in three phases over one [`ByteBuffer`]:
//!
//! 1. [`pad`] appends `0x80`, zero fill up to 56 mod 64, and the 64-bit
//!    little-endian bit length of the original message.
//! 2. Each 64-byte block is split into sixteen little-endian words and folded
//!    into an [`Md5State`] with 64 steps of the round function.
//! 3. [`Md5State::finish`] serializes the four state words, little-endian, as
//!    the 16-byte [`Digest`].
//!
//! Lengths are tracked in 32 bits only: messages of `2^32` bits or more hash
//! with a truncated length field and do not match other implementations.

mod constants;

pub use constants::{INIT_STATE, SHIFT_AMOUNTS, round_constants};

use crate::{
    byte_buffer::ByteBuffer,
    digest::Digest,
    error::{HashError, Result},
    trace,
};

/// Size of one compression block in bytes.
pub const BLOCK_LEN: usize = 64;

/// Offset inside the last block at which the length field starts.
const LENGTH_OFFSET: usize = 56;

/// Running A, B, C, D words for one digest computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Md5State([u32; 4]);

impl Default for Md5State {
    fn default() -> Self {
        Self::new()
    }
}

impl Md5State {
    /// State seeded with the standard initial words.
    #[must_use]
    pub fn new() -> Self {
        Self(INIT_STATE)
    }

    /// The current A, B, C, D words.
    #[must_use]
    pub fn words(&self) -> [u32; 4] {
        self.0
    }

    /// Runs the 64-step round function over one block of message words and
    /// adds the result into the state.
    pub fn compress(&mut self, block: &[u32; 16]) {
        let k = round_constants();
        let [mut a, mut b, mut c, mut d] = self.0;

        for j in 0..64 {
            let (f, g) = match j {
                0..16 => ((b & c) | (d & !b), j),
                16..32 => ((d & b) | (c & !d), (5 * j + 1) % 16),
                32..48 => (b ^ c ^ d, (3 * j + 5) % 16),
                _ => (c ^ (b | !d), (7 * j) % 16),
            };
            let f = f
                .wrapping_add(a)
                .wrapping_add(k[j])
                .wrapping_add(block[g]);
            a = d;
            d = c;
            c = b;
            b = b.wrapping_add(f.rotate_left(SHIFT_AMOUNTS[j]));
        }

        for (word, step) in self.0.iter_mut().zip([a, b, c, d]) {
            *word = word.wrapping_add(step);
        }
    }

    /// Serializes the state words, each little-endian, in A, B, C, D order.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::InvalidDigestSize`] if the serialized words do
    /// not come to exactly 16 bytes.
    pub fn finish(self) -> Result<Digest> {
        let mut out = ByteBuffer::with_capacity(16);
        for word in self.0 {
            out.write_block(ByteBuffer::from_u32_be(word).reverse());
        }
        Digest::try_from(&out)
    }
}

/// Pads `message` in place to a whole number of blocks.
///
/// # Errors
///
/// Returns [`HashError::InvalidBlockSize`] if the padded length is not a
/// multiple of [`BLOCK_LEN`].
#[allow(clippy::cast_possible_truncation)]
pub fn pad(message: &mut ByteBuffer) -> Result<()> {
    let original_len = message.len();
    // Only the low 32 bits of the bit length are kept.
    let bit_len = (original_len as u64).wrapping_mul(8) as u32;
    let mut length_field = ByteBuffer::from_bit_length(bit_len);
    length_field.reverse();

    message.seek_to_end();
    message.write(0x80);
    while message.len() % BLOCK_LEN != LENGTH_OFFSET {
        message.write(0);
    }
    message.write_block(&length_field);

    if message.len() % BLOCK_LEN != 0 {
        return Err(HashError::InvalidBlockSize(message.len()));
    }
    trace::padded(original_len, message.len());
    Ok(())
}

/// Splits one block into sixteen little-endian words.
fn block_words(block: &mut ByteBuffer) -> Result<[u32; 16]> {
    let mut words = [0u32; 16];
    for word in &mut words {
        *word = block.read_block(4).reverse().to_u32_be()?;
    }
    Ok(words)
}

/// Computes the digest of `message`, consuming it.
///
/// # Errors
///
/// Returns [`HashError::InvalidBlockSize`] if padding produced a partial
/// block, or [`HashError::InvalidDigestSize`] if finalization did not yield
/// 16 bytes.
pub fn digest(mut message: ByteBuffer) -> Result<Digest> {
    pad(&mut message)?;
    message.reset();

    let mut state = Md5State::new();
    for index in 0..message.len() / BLOCK_LEN {
        let mut block = message.read_block(BLOCK_LEN);
        let words = block_words(&mut block)?;
        state.compress(&words);
        trace::block_compressed(index, &state.words());
    }
    state.finish()
}

/// Computes the digest of a byte slice.
///
/// # Errors
///
/// See [`digest`].
pub fn digest_bytes(bytes: &[u8]) -> Result<Digest> {
    digest(ByteBuffer::from(bytes))
}
