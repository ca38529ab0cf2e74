use thiserror::Error;

/// Errors produced while encoding text or computing a digest.
///
/// Every variant is terminal for the call that produced it: no partial buffer
/// or digest is returned alongside an error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum HashError {
    /// A value outside `0..=255` reached the byte-buffer write boundary.
    #[error("invalid byte value {0} (expected 0..=255)")]
    InvalidInput(i64),
    /// The input contained a code point beyond U+10FFFF.
    #[error("code point U+{0:X} is out of range")]
    CodePointOutOfRange(u32),
    /// The padded message length is not a whole number of 64-byte blocks.
    #[error("padded message of {0} bytes is not a multiple of 64")]
    InvalidBlockSize(usize),
    /// A word conversion was attempted on a buffer that is not 4 bytes long.
    #[error("expected a 4-byte word, found {0} bytes")]
    InvalidWordSize(usize),
    /// A digest was built from a buffer that is not 16 bytes long.
    #[error("expected a 16-byte digest, found {0} bytes")]
    InvalidDigestSize(usize),
}

/// Shorthand for results carrying a [`HashError`].
pub type Result<T, E = HashError> = core::result::Result<T, E>;
