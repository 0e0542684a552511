//! Scalar int8 dot-product kernels.
//!
//! Products are widened to `i32` before accumulating, which is exact for
//! vectors up to [`MAX_I8_DIM`](crate::MAX_I8_DIM) elements.

use crate::error::{check_i8_blocks, require};

/// Reference int8 dot product, truncated to the shorter vector.
///
/// Never panics. Past [`MAX_I8_DIM`](crate::MAX_I8_DIM) elements the sum
/// wraps modulo 2^32, the same way the SIMD kernels' accumulators do.
pub fn dot_i8_naive(a: &[i8], b: &[i8]) -> i32 {
    let n = a.len().min(b.len());
    let mut sum = 0i32;
    for i in 0..n {
        sum = sum.wrapping_add(a[i] as i32 * b[i] as i32);
    }
    sum
}

/// Four products per iteration.
///
/// # Panics
/// Panics unless `a.len() == b.len()` and the length is a multiple of 4.
pub fn dot_i8_unroll4(a: &[i8], b: &[i8]) -> i32 {
    require(check_i8_blocks(a.len(), b.len(), 4));

    let mut sum = 0i32;
    for i in (0..a.len()).step_by(4) {
        let s0 = a[i] as i32 * b[i] as i32;
        let s1 = a[i + 1] as i32 * b[i + 1] as i32;
        let s2 = a[i + 2] as i32 * b[i + 2] as i32;
        let s3 = a[i + 3] as i32 * b[i + 3] as i32;
        sum += s0 + s1 + s2 + s3;
    }
    sum
}

/// Eight products per iteration.
///
/// # Panics
/// Panics unless `a.len() == b.len()` and the length is a multiple of 8.
pub fn dot_i8_unroll8(a: &[i8], b: &[i8]) -> i32 {
    require(check_i8_blocks(a.len(), b.len(), 8));

    let mut sum = 0i32;
    for i in (0..a.len()).step_by(8) {
        let s0 = a[i] as i32 * b[i] as i32;
        let s1 = a[i + 1] as i32 * b[i + 1] as i32;
        let s2 = a[i + 2] as i32 * b[i + 2] as i32;
        let s3 = a[i + 3] as i32 * b[i + 3] as i32;
        let s4 = a[i + 4] as i32 * b[i + 4] as i32;
        let s5 = a[i + 5] as i32 * b[i + 5] as i32;
        let s6 = a[i + 6] as i32 * b[i + 6] as i32;
        let s7 = a[i + 7] as i32 * b[i + 7] as i32;
        sum += s0 + s1 + s2 + s3 + s4 + s5 + s6 + s7;
    }
    sum
}

/// Unroll by four over fixed-size windows, without bounds checks.
///
/// # Panics
/// Panics unless `a.len() == b.len()` and the length is a multiple of 4.
pub fn dot_i8_bce(a: &[i8], b: &[i8]) -> i32 {
    require(check_i8_blocks(a.len(), b.len(), 4));

    let mut sum = 0i32;
    for i in (0..a.len()).step_by(4) {
        let a_win = &a[i..i + 4];
        let b_win = &b[i..i + 4];
        let s0 = a_win[0] as i32 * b_win[0] as i32;
        let s1 = a_win[1] as i32 * b_win[1] as i32;
        let s2 = a_win[2] as i32 * b_win[2] as i32;
        let s3 = a_win[3] as i32 * b_win[3] as i32;
        sum += s0 + s1 + s2 + s3;
    }
    sum
}
