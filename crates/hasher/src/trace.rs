//! Digest engine tracing.
//!
//! Each hook compiles to an empty inline function unless the `tracing`
//! feature is enabled, so the engine can call them unconditionally.

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

/// Round-constant table was computed (happens once per process).
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn round_constants_ready(table: &[u32; 64]) {
    debug!(
        target: "hasher::md5",
        first = table[0],
        last = table[63],
        "round constant table initialized"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn round_constants_ready(_table: &[u32; 64]) {}

/// Message padding finished.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn padded(original_len: usize, padded_len: usize) {
    debug!(
        target: "hasher::md5",
        original_len,
        padded_len,
        blocks = padded_len / 64,
        "padded {} bytes to {}",
        original_len,
        padded_len
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn padded(_original_len: usize, _padded_len: usize) {}

/// One 64-byte block was folded into the running state.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn block_compressed(index: usize, state: &[u32; 4]) {
    trace!(
        target: "hasher::md5",
        block = index,
        a = state[0],
        b = state[1],
        c = state[2],
        d = state[3],
        "block compressed"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn block_compressed(_index: usize, _state: &[u32; 4]) {}
