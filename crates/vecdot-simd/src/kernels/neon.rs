use std::arch::aarch64::*;
use vecdot_core::{check_i8_blocks, require};

/// Bytes consumed per iteration (one 128-bit register).
pub(crate) const NEON_BLOCK: usize = 16;

/// ARM NEON int8 kernel.
///
/// # Panics
/// Panics unless `a.len() == b.len()` and the length is a multiple of 16.
pub(crate) fn dot_i8_neon(a: &[i8], b: &[i8]) -> i32 {
    require(check_i8_blocks(a.len(), b.len(), NEON_BLOCK));
    // SAFETY: NEON support is checked before this kernel is selected, and
    // the lengths were validated above.
    unsafe { dot_i8_neon_inner(a, b) }
}

/// Widening `vmull_s8` multiplies into i16 lanes, then `vpadalq_s16`
/// pairwise-adds them into the i32 accumulator.
///
/// # Safety
/// - The CPU must support NEON.
/// - `a.len() == b.len()` and the length is a multiple of 16.
#[target_feature(enable = "neon")]
unsafe fn dot_i8_neon_inner(a: &[i8], b: &[i8]) -> i32 {
    let mut acc = vdupq_n_s32(0);

    for (ca, cb) in a
        .chunks_exact(NEON_BLOCK)
        .zip(b.chunks_exact(NEON_BLOCK))
    {
        let va = vld1q_s8(ca.as_ptr());
        let vb = vld1q_s8(cb.as_ptr());

        let lo = vmull_s8(vget_low_s8(va), vget_low_s8(vb));
        let hi = vmull_high_s8(va, vb);
        acc = vpadalq_s16(acc, lo);
        acc = vpadalq_s16(acc, hi);
    }

    vaddvq_s32(acc)
}
