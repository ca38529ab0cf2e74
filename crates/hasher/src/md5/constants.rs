//! Fixed per-step tables for the compression function.

use std::sync::OnceLock;

use crate::trace;

/// Initial values of the A, B, C and D state words.
pub const INIT_STATE: [u32; 4] = [0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476];

/// Left-rotation amount for each of the 64 steps.
pub const SHIFT_AMOUNTS: [u32; 64] = [
    7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22, //
    5, 9, 14, 20, 5, 9, 14, 20, 5, 9, 14, 20, 5, 9, 14, 20, //
    4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23, //
    6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21,
];

static ROUND_CONSTANTS: OnceLock<[u32; 64]> = OnceLock::new();

/// The 64 additive round constants, `floor(2^32 * |sin(i + 1)|)`.
///
/// Computed on first use and shared by every later digest in the process.
pub fn round_constants() -> &'static [u32; 64] {
    ROUND_CONSTANTS.get_or_init(|| {
        let table = compute_round_constants();
        trace::round_constants_ready(&table);
        table
    })
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn compute_round_constants() -> [u32; 64] {
    let scale = f64::from(u32::MAX) + 1.0;
    core::array::from_fn(|i| (scale * ((i + 1) as f64).sin().abs()).floor() as u32)
}
