use std::arch::x86_64::*;
use vecdot_core::{check_i8_blocks, require};

/// Length granularity: a 16-byte half register.
pub(crate) const AVX2_BLOCK: usize = 16;

/// Bytes consumed per main-loop iteration (one 256-bit register).
const AVX2_STEP: usize = 32;

/// AVX2 int8 kernel.
///
/// Only handed out by the dispatcher once AVX2 support was detected.
///
/// # Panics
/// Panics unless `a.len() == b.len()` and the length is a multiple of 16.
pub(crate) fn dot_i8_avx2(a: &[i8], b: &[i8]) -> i32 {
    require(check_i8_blocks(a.len(), b.len(), AVX2_BLOCK));
    debug_assert!(is_x86_feature_detected!("avx2"));
    // SAFETY: AVX2 support is checked before this kernel is selected, and
    // the lengths were validated above.
    unsafe { dot_i8_avx2_inner(a, b) }
}

/// Sign-extends each half of a 32-byte block to i16 and uses `vpmaddwd`
/// to multiply and add adjacent pairs into i32 lanes. A trailing 16-byte
/// half block goes through the same widening once.
///
/// # Safety
/// - The CPU must support AVX2.
/// - `a.len() == b.len()` and the length is a multiple of 16.
#[target_feature(enable = "avx2")]
unsafe fn dot_i8_avx2_inner(a: &[i8], b: &[i8]) -> i32 {
    let mut acc = _mm256_setzero_si256();

    let a_steps = a.chunks_exact(AVX2_STEP);
    let b_steps = b.chunks_exact(AVX2_STEP);
    let (a_tail, b_tail) = (a_steps.remainder(), b_steps.remainder());

    for (ca, cb) in a_steps.zip(b_steps) {
        let va = _mm256_loadu_si256(ca.as_ptr() as *const __m256i);
        let vb = _mm256_loadu_si256(cb.as_ptr() as *const __m256i);

        let a_lo = _mm256_cvtepi8_epi16(_mm256_castsi256_si128(va));
        let a_hi = _mm256_cvtepi8_epi16(_mm256_extracti128_si256::<1>(va));
        let b_lo = _mm256_cvtepi8_epi16(_mm256_castsi256_si128(vb));
        let b_hi = _mm256_cvtepi8_epi16(_mm256_extracti128_si256::<1>(vb));

        // Pair sums are at most 2 * 16384, well inside i32.
        acc = _mm256_add_epi32(acc, _mm256_madd_epi16(a_lo, b_lo));
        acc = _mm256_add_epi32(acc, _mm256_madd_epi16(a_hi, b_hi));
    }

    // The remainder is either empty or exactly one 16-byte half block.
    if !a_tail.is_empty() {
        let va = _mm_loadu_si128(a_tail.as_ptr() as *const __m128i);
        let vb = _mm_loadu_si128(b_tail.as_ptr() as *const __m128i);
        let prod = _mm256_madd_epi16(_mm256_cvtepi8_epi16(va), _mm256_cvtepi8_epi16(vb));
        acc = _mm256_add_epi32(acc, prod);
    }

    // Horizontal sum of 8 lanes
    let sum128 = _mm_add_epi32(
        _mm256_castsi256_si128(acc),
        _mm256_extracti128_si256::<1>(acc),
    );
    let sum64 = _mm_add_epi32(sum128, _mm_unpackhi_epi64(sum128, sum128));
    let sum32 = _mm_add_epi32(sum64, _mm_shuffle_epi32::<0b01>(sum64));
    _mm_cvtsi128_si32(sum32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vecdot_core::dot_i8_naive;

    #[test]
    fn test_avx2_matches_naive() {
        if !is_x86_feature_detected!("avx2") {
            println!("AVX2 not available, skipping");
            return;
        }

        let a: Vec<i8> = (0..256).map(|i| (i * 37 % 256) as u8 as i8).collect();
        let b: Vec<i8> = (0..256).map(|i| (i * 91 % 256) as u8 as i8).collect();
        assert_eq!(dot_i8_avx2(&a, &b), dot_i8_naive(&a, &b));

        let sat = [127i8; 32];
        assert_eq!(dot_i8_avx2(&sat, &sat), 32 * 16129);

        let min = [i8::MIN; 64];
        assert_eq!(dot_i8_avx2(&min, &min), 64 * 16384);
    }

    #[test]
    fn test_avx2_half_block_tail() {
        if !is_x86_feature_detected!("avx2") {
            println!("AVX2 not available, skipping");
            return;
        }

        let sat = [127i8; 16];
        assert_eq!(dot_i8_avx2(&sat, &sat), 258064);

        for len in [16, 48, 80, 1552] {
            let a: Vec<i8> = (0..len).map(|i| (i * 37 % 256) as u8 as i8).collect();
            let b: Vec<i8> = (0..len).map(|i| (i * 91 % 256) as u8 as i8).collect();
            assert_eq!(dot_i8_avx2(&a, &b), dot_i8_naive(&a, &b), "len {len}");
        }
    }

    #[test]
    #[should_panic(expected = "not a multiple of block width 16")]
    fn test_avx2_rejects_unaligned() {
        // The length check runs before any AVX2 instruction.
        dot_i8_avx2(&[1; 8], &[1; 8]);
    }
}
