use vecdot_core::{check_i8_blocks, require};
use wide::i32x8;

/// Block width of [`dot_i8_portable`].
pub const PORTABLE_BLOCK: usize = 8;

/// Portable int8 kernel using the `wide` crate.
///
/// This is the fallback when no vector extension was detected; `wide`
/// lowers to plain scalar code on targets it has no intrinsics for.
///
/// # Panics
/// Panics unless `a.len() == b.len()` and the length is a multiple of 8.
pub fn dot_i8_portable(a: &[i8], b: &[i8]) -> i32 {
    require(check_i8_blocks(a.len(), b.len(), PORTABLE_BLOCK));

    let mut acc = i32x8::splat(0);
    for (ca, cb) in a
        .chunks_exact(PORTABLE_BLOCK)
        .zip(b.chunks_exact(PORTABLE_BLOCK))
    {
        let va = i32x8::from(widen(ca));
        let vb = i32x8::from(widen(cb));
        acc = acc + va * vb;
    }

    acc.to_array()
        .iter()
        .fold(0i32, |sum, &lane| sum.wrapping_add(lane))
}

#[inline(always)]
fn widen(chunk: &[i8]) -> [i32; PORTABLE_BLOCK] {
    std::array::from_fn(|i| chunk[i] as i32)
}
