//! Scalar `f32` dot-product kernels.
//!
//! Every kernel here computes the same sum; they differ only in loop shape
//! so their relative cost can be measured. Only [`dot_naive`] accepts
//! vectors of different lengths.

use crate::error::{check_blocks, require};

/// Reference dot product, truncated to the shorter vector.
pub fn dot_naive(a: &[f32], b: &[f32]) -> f32 {
    let n = a.len().min(b.len());
    let mut sum = 0.0f32;
    for i in 0..n {
        sum += a[i] * b[i];
    }
    sum
}

/// Four products per iteration.
///
/// # Panics
/// Panics unless `a.len() == b.len()` and the length is a multiple of 4.
pub fn dot_unroll4(a: &[f32], b: &[f32]) -> f32 {
    require(check_blocks(a.len(), b.len(), 4));

    let mut sum = 0.0f32;
    for i in (0..a.len()).step_by(4) {
        let s0 = a[i] * b[i];
        let s1 = a[i + 1] * b[i + 1];
        let s2 = a[i + 2] * b[i + 2];
        let s3 = a[i + 3] * b[i + 3];
        sum += s0 + s1 + s2 + s3;
    }
    sum
}

/// Eight products per iteration.
///
/// # Panics
/// Panics unless `a.len() == b.len()` and the length is a multiple of 8.
pub fn dot_unroll8(a: &[f32], b: &[f32]) -> f32 {
    require(check_blocks(a.len(), b.len(), 8));

    let mut sum = 0.0f32;
    for i in (0..a.len()).step_by(8) {
        let s0 = a[i] * b[i];
        let s1 = a[i + 1] * b[i + 1];
        let s2 = a[i + 2] * b[i + 2];
        let s3 = a[i + 3] * b[i + 3];
        let s4 = a[i + 4] * b[i + 4];
        let s5 = a[i + 5] * b[i + 5];
        let s6 = a[i + 6] * b[i + 6];
        let s7 = a[i + 7] * b[i + 7];
        sum += s0 + s1 + s2 + s3 + s4 + s5 + s6 + s7;
    }
    sum
}

/// Unroll by four over fixed-size windows.
///
/// Each window is re-sliced to exactly four elements, so indices 0..4 are
/// provably in range and the per-element bounds checks disappear.
///
/// # Panics
/// Panics unless `a.len() == b.len()` and the length is a multiple of 4.
pub fn dot_bce(a: &[f32], b: &[f32]) -> f32 {
    require(check_blocks(a.len(), b.len(), 4));

    let mut sum = 0.0f32;
    for i in (0..a.len()).step_by(4) {
        let a_win = &a[i..i + 4];
        let b_win = &b[i..i + 4];
        let s0 = a_win[0] * b_win[0];
        let s1 = a_win[1] * b_win[1];
        let s2 = a_win[2] * b_win[2];
        let s3 = a_win[3] * b_win[3];
        sum += s0 + s1 + s2 + s3;
    }
    sum
}

/// Bounded windows like [`dot_bce`], but summed one element at a time.
///
/// # Panics
/// Panics unless `a.len() == b.len()` and the length is a multiple of 4.
pub fn dot_bce_only(a: &[f32], b: &[f32]) -> f32 {
    require(check_blocks(a.len(), b.len(), 4));

    let mut sum = 0.0f32;
    for i in (0..a.len()).step_by(4) {
        let a_win = &a[i..i + 4];
        let b_win = &b[i..i + 4];
        for j in 0..4 {
            sum += a_win[j] * b_win[j];
        }
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::f32_close;
    use proptest::prelude::*;

    const KERNELS: [(&str, fn(&[f32], &[f32]) -> f32); 4] = [
        ("unroll4", dot_unroll4),
        ("unroll8", dot_unroll8),
        ("bce", dot_bce),
        ("bce_only", dot_bce_only),
    ];

    #[test]
    fn test_ones() {
        let a = [1.0f32; 4];
        assert_eq!(dot_naive(&a, &a), 4.0);
        assert_eq!(dot_unroll4(&a, &a), 4.0);
        assert_eq!(dot_bce(&a, &a), 4.0);
        assert_eq!(dot_bce_only(&a, &a), 4.0);
    }

    #[test]
    fn test_naive_truncates() {
        let a = [1.0f32, 2.0, 3.0, 4.0, 5.0];
        let b = [1.0f32, 1.0, 1.0];
        // 1 + 2 + 3
        assert_eq!(dot_naive(&a, &b), 6.0);
        assert_eq!(dot_naive(&b, &a), 6.0);
    }

    #[test]
    fn test_empty() {
        assert_eq!(dot_naive(&[], &[]), 0.0);
        for (_, kernel) in KERNELS {
            assert_eq!(kernel(&[], &[]), 0.0);
        }
    }

    #[test]
    fn test_known_value() {
        let a: Vec<f32> = (1..=8).map(|x| x as f32).collect();
        let b = vec![2.0f32; 8];
        // 2 * (1 + ... + 8) = 72
        for (name, kernel) in KERNELS {
            assert_eq!(kernel(&a, &b), 72.0, "{name}");
        }
    }

    #[test]
    #[should_panic(expected = "not a multiple of block width 4")]
    fn test_unroll4_rejects_odd_length() {
        let a = [1.0f32, 2.0, 3.0];
        dot_unroll4(&a, &a);
    }

    #[test]
    #[should_panic(expected = "not a multiple of block width 8")]
    fn test_unroll8_rejects_length_four() {
        let a = [1.0f32; 4];
        dot_unroll8(&a, &a);
    }

    #[test]
    #[should_panic(expected = "length mismatch")]
    fn test_bce_rejects_mismatch() {
        dot_bce(&[1.0; 8], &[1.0; 4]);
    }

    #[test]
    #[should_panic(expected = "length mismatch")]
    fn test_bce_only_rejects_mismatch() {
        dot_bce_only(&[1.0; 4], &[1.0; 8]);
    }

    proptest! {
        #[test]
        fn kernels_agree_with_naive(
            blocks in 1usize..64,
            seed in prop::collection::vec(0.0f32..1.0, 8),
        ) {
            let len = blocks * 8;
            let a: Vec<f32> = (0..len).map(|i| seed[i % 8] + i as f32 * 1e-3).collect();
            let b: Vec<f32> = (0..len).map(|i| seed[(i + 3) % 8] + 0.5).collect();
            let expected = dot_naive(&a, &b);
            for (name, kernel) in KERNELS {
                let got = kernel(&a, &b);
                prop_assert!(f32_close(expected, got), "{}: {} vs {}", name, expected, got);
                prop_assert_eq!(got.to_bits(), kernel(&a, &b).to_bits());
            }
        }
    }
}
