use std::arch::x86_64::*;
use vecdot_core::{check_i8_blocks, require};

/// Length granularity, shared with the narrower tiers.
pub(crate) const VNNI_BLOCK: usize = 16;

/// Bytes consumed per main-loop iteration (one 512-bit register).
const VNNI_STEP: usize = 64;

/// AVX-512 VNNI int8 kernel.
///
/// Only handed out by the dispatcher once `avx512f`, `avx512bw` and
/// `avx512vnni` were all detected.
///
/// # Panics
/// Panics unless `a.len() == b.len()` and the length is a multiple of 16.
pub(crate) fn dot_i8_vnni(a: &[i8], b: &[i8]) -> i32 {
    require(check_i8_blocks(a.len(), b.len(), VNNI_BLOCK));
    debug_assert!(
        is_x86_feature_detected!("avx512f")
            && is_x86_feature_detected!("avx512bw")
            && is_x86_feature_detected!("avx512vnni")
    );
    // SAFETY: the full VNNI feature set is checked before this kernel is
    // selected, and the lengths were validated above.
    unsafe { dot_i8_vnni_inner(a, b) }
}

/// `vpdpbusd` multiplies unsigned by signed bytes, so `a` is biased into
/// `0..=255` by flipping its sign bit and the excess is removed afterwards:
///
/// ```text
/// sum((a + 128) * b) - 128 * sum(b) = sum(a * b)
/// ```
///
/// The last partial register is read with a zeroing byte mask; masked-off
/// `b` lanes are zero, so they add nothing to either sum.
///
/// Intermediate sums may wrap, but the final value fits in i32 for any
/// length accepted by the length check, so wrapping arithmetic is exact.
///
/// # Safety
/// - The CPU must support AVX-512F, AVX-512BW and AVX-512 VNNI.
/// - `a.len() == b.len()`.
#[target_feature(enable = "avx512f,avx512bw,avx512vnni")]
unsafe fn dot_i8_vnni_inner(a: &[i8], b: &[i8]) -> i32 {
    let bias = _mm512_set1_epi8(i8::MIN);
    let ones = _mm512_set1_epi8(1);
    let mut prod = _mm512_setzero_si512();
    let mut b_sum = _mm512_setzero_si512();

    let a_steps = a.chunks_exact(VNNI_STEP);
    let b_steps = b.chunks_exact(VNNI_STEP);
    let (a_tail, b_tail) = (a_steps.remainder(), b_steps.remainder());

    for (ca, cb) in a_steps.zip(b_steps) {
        let va = _mm512_loadu_si512(ca.as_ptr().cast());
        let vb = _mm512_loadu_si512(cb.as_ptr().cast());

        let a_biased = _mm512_xor_si512(va, bias);
        prod = _mm512_dpbusd_epi32(prod, a_biased, vb);
        b_sum = _mm512_dpbusd_epi32(b_sum, ones, vb);
    }

    if !a_tail.is_empty() {
        // Tail is shorter than 64 bytes, so the shift cannot overflow.
        let mask: __mmask64 = (1u64 << a_tail.len()) - 1;
        let va = _mm512_maskz_loadu_epi8(mask, a_tail.as_ptr());
        let vb = _mm512_maskz_loadu_epi8(mask, b_tail.as_ptr());

        let a_biased = _mm512_xor_si512(va, bias);
        prod = _mm512_dpbusd_epi32(prod, a_biased, vb);
        b_sum = _mm512_dpbusd_epi32(b_sum, ones, vb);
    }

    let correction = _mm512_slli_epi32::<7>(b_sum);
    _mm512_reduce_add_epi32(_mm512_sub_epi32(prod, correction))
}
