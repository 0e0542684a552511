//! Scalar dot-product kernels.
//!
//! This crate provides the portable building blocks of `vecdot`: a naive
//! reference dot product for `f32` and `i8` vectors, plus hand-unrolled and
//! bounds-check-free variants that compute the same sum with different loop
//! shapes. The variants are kept as separate named functions so they can
//! be checked against each other and benchmarked side by side.
//!
//! # Example
//!
//! ```
//! use vecdot_core::{dot_bce, dot_naive, f32_kernels};
//!
//! let a = [1.0f32; 8];
//! let b = [2.0f32; 8];
//!
//! assert_eq!(dot_naive(&a, &b), 16.0);
//! assert_eq!(dot_bce(&a, &b), 16.0);
//!
//! for kernel in f32_kernels() {
//!     assert_eq!(kernel.call(&a, &b), 16.0);
//! }
//! ```

mod error;
mod int8;
mod kernel;
mod registry;
mod scalar;

pub use error::{
    check_blocks, check_equal, check_i8_blocks, require, DotError, Result, MAX_I8_DIM,
};
pub use int8::{dot_i8_bce, dot_i8_naive, dot_i8_unroll4, dot_i8_unroll8};
pub use kernel::{f32_close, DotF32, DotI8, Kernel, F32_REL_TOLERANCE};
pub use registry::{f32_kernels, find_f32, find_i8, i8_kernels};
pub use scalar::{dot_bce, dot_bce_only, dot_naive, dot_unroll4, dot_unroll8};
