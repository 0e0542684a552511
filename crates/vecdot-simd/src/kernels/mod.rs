//! Int8 dot-product kernels for each SIMD tier.
//!
//! The accelerated kernels are crate-private: they are only reachable
//! through the dispatcher, which hands them out after the matching CPU
//! features were confirmed.

#[cfg(target_arch = "x86_64")]
pub(crate) mod avx2;
#[cfg(target_arch = "x86_64")]
pub(crate) mod avx512;
#[cfg(target_arch = "aarch64")]
pub(crate) mod neon;
pub mod portable;

pub use portable::{dot_i8_portable, PORTABLE_BLOCK};
