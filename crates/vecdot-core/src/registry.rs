//! Fixed tables of the scalar kernels.
//!
//! The tables are built at compile time and never filtered by CPU
//! capability; the naive reference is always first.

use crate::int8::{dot_i8_bce, dot_i8_naive, dot_i8_unroll4, dot_i8_unroll8};
use crate::kernel::{DotF32, DotI8, Kernel};
use crate::scalar::{dot_bce, dot_bce_only, dot_naive, dot_unroll4, dot_unroll8};

static F32_KERNELS: [Kernel<DotF32>; 5] = [
    Kernel::new("dot_naive", dot_naive, 1),
    Kernel::new("dot_unroll4", dot_unroll4, 4),
    Kernel::new("dot_unroll8", dot_unroll8, 8),
    Kernel::new("dot_bce", dot_bce, 4),
    Kernel::new("dot_bce_only", dot_bce_only, 4),
];

static I8_KERNELS: [Kernel<DotI8>; 4] = [
    Kernel::new("dot_i8_naive", dot_i8_naive, 1),
    Kernel::new("dot_i8_unroll4", dot_i8_unroll4, 4),
    Kernel::new("dot_i8_unroll8", dot_i8_unroll8, 8),
    Kernel::new("dot_i8_bce", dot_i8_bce, 4),
];

/// All scalar `f32` kernels, reference first.
pub fn f32_kernels() -> &'static [Kernel<DotF32>] {
    &F32_KERNELS
}

/// All scalar int8 kernels, reference first.
pub fn i8_kernels() -> &'static [Kernel<DotI8>] {
    &I8_KERNELS
}

/// Look up a scalar `f32` kernel by name.
pub fn find_f32(name: &str) -> Option<&'static Kernel<DotF32>> {
    F32_KERNELS.iter().find(|k| k.name == name)
}

/// Look up a scalar int8 kernel by name.
pub fn find_i8(name: &str) -> Option<&'static Kernel<DotI8>> {
    I8_KERNELS.iter().find(|k| k.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_first() {
        assert_eq!(f32_kernels()[0].name, "dot_naive");
        assert_eq!(i8_kernels()[0].name, "dot_i8_naive");
        assert_eq!(f32_kernels()[0].block, 1);
    }

    #[test]
    fn test_names_unique() {
        let mut names: Vec<_> = f32_kernels()
            .iter()
            .map(|k| k.name)
            .chain(i8_kernels().iter().map(|k| k.name))
            .collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_find() {
        let k = find_f32("dot_unroll8").unwrap();
        assert_eq!(k.block, 8);
        assert!(find_i8("dot_i8_bce").is_some());
        assert!(find_i8("dot_avx2").is_none());
    }

    #[test]
    fn test_every_kernel_on_block_aligned_input() {
        let a = vec![0.5f32; 64];
        for k in f32_kernels() {
            assert_eq!(k.call(&a, &a), 16.0, "{}", k.name);
        }
        let q = vec![-3i8; 64];
        for k in i8_kernels() {
            assert_eq!(k.call(&q, &q), 576, "{}", k.name);
        }
    }
}
