use vecdot_core::{check_blocks, check_i8_blocks, DotF32, DotI8, Kernel, Result};
use vecdot_simd::{active_kernel, ActiveKernel};

/// Block width of [`dot_f32_fast`].
pub const F32_FAST_BLOCK: usize = 4;

/// Select the int8 kernel now instead of on first use.
///
/// Call this from the process entry point before spawning workers to keep
/// detection out of the first search. Later calls return the same kernel.
pub fn init() -> &'static ActiveKernel {
    active_kernel()
}

/// Reference `f32` dot product, truncated to the shorter vector.
#[inline]
pub fn dot_f32(a: &[f32], b: &[f32]) -> f32 {
    vecdot_core::dot_naive(a, b)
}

/// Fastest scalar `f32` dot product.
///
/// # Panics
/// Panics unless `a.len() == b.len()` and the length is a multiple of
/// [`F32_FAST_BLOCK`].
#[inline]
pub fn dot_f32_fast(a: &[f32], b: &[f32]) -> f32 {
    vecdot_core::dot_bce(a, b)
}

/// Checked [`dot_f32_fast`].
pub fn try_dot_f32_fast(a: &[f32], b: &[f32]) -> Result<f32> {
    check_blocks(a.len(), b.len(), F32_FAST_BLOCK)?;
    Ok(vecdot_core::dot_bce(a, b))
}

/// Reference int8 dot product, truncated to the shorter vector.
#[inline]
pub fn dot_i8(a: &[i8], b: &[i8]) -> i32 {
    vecdot_core::dot_i8_naive(a, b)
}

/// Int8 dot product through the kernel selected for this CPU.
///
/// # Panics
/// Panics unless `a.len() == b.len()` and the length is a multiple of
/// [`i8_fast_block`]: 16 on the accelerated tiers, 8 on the portable one.
#[inline]
pub fn dot_i8_fast(a: &[i8], b: &[i8]) -> i32 {
    active_kernel().call(a, b)
}

/// Checked [`dot_i8_fast`].
pub fn try_dot_i8_fast(a: &[i8], b: &[i8]) -> Result<i32> {
    let active = active_kernel();
    check_i8_blocks(a.len(), b.len(), active.block())?;
    Ok(active.call(a, b))
}

/// Length granularity required by [`dot_i8_fast`] on this CPU.
pub fn i8_fast_block() -> usize {
    active_kernel().block()
}

/// Every scalar `f32` kernel, reference first.
pub fn list_f32_kernels() -> &'static [Kernel<DotF32>] {
    vecdot_core::f32_kernels()
}

/// Every scalar int8 kernel, reference first.
pub fn list_i8_kernels() -> &'static [Kernel<DotI8>] {
    vecdot_core::i8_kernels()
}

/// Accelerated int8 kernels usable on this CPU, best first.
pub fn list_i8_simd_kernels() -> Vec<Kernel<DotI8>> {
    vecdot_simd::simd_i8_kernels()
}
