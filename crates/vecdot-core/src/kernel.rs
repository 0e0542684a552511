/// Relative error allowed between two `f32` kernels on the same input.
///
/// Kernels sum in different orders, so float results only agree up to
/// rounding.
pub const F32_REL_TOLERANCE: f32 = 0.01;

/// Whether `got` agrees with the reference result `expected`.
///
/// Uses [`F32_REL_TOLERANCE`]; a zero reference falls back to an
/// absolute bound of `1e-3`.
pub fn f32_close(expected: f32, got: f32) -> bool {
    if expected == 0.0 {
        return got.abs() < 1e-3;
    }
    ((expected - got) / expected).abs() < F32_REL_TOLERANCE
}

/// Dot-product kernel over `f32` vectors.
pub type DotF32 = fn(&[f32], &[f32]) -> f32;

/// Dot-product kernel over `i8` vectors, accumulated in `i32`.
pub type DotI8 = fn(&[i8], &[i8]) -> i32;

/// A named kernel registered for comparison and measurement.
///
/// `block` is the length granularity the kernel requires; `1` means any
/// length is accepted (and mismatched lengths are truncated).
#[derive(Clone, Copy)]
pub struct Kernel<F> {
    /// Stable identifier, used as a benchmark and test label.
    pub name: &'static str,
    /// The kernel function.
    pub func: F,
    /// Required length granularity.
    pub block: usize,
}

impl<F> Kernel<F> {
    pub const fn new(name: &'static str, func: F, block: usize) -> Self {
        Self { name, func, block }
    }
}

impl<F> std::fmt::Debug for Kernel<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Kernel")
            .field("name", &self.name)
            .field("block", &self.block)
            .finish()
    }
}

impl Kernel<DotF32> {
    /// Invoke the kernel.
    #[inline]
    pub fn call(&self, a: &[f32], b: &[f32]) -> f32 {
        (self.func)(a, b)
    }
}

impl Kernel<DotI8> {
    /// Invoke the kernel.
    #[inline]
    pub fn call(&self, a: &[i8], b: &[i8]) -> i32 {
        (self.func)(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f32_close() {
        assert!(f32_close(100.0, 100.5));
        assert!(!f32_close(100.0, 102.0));
        assert!(f32_close(-50.0, -50.2));
        assert!(f32_close(0.0, 1e-4));
        assert!(!f32_close(0.0, 0.1));
    }
}
