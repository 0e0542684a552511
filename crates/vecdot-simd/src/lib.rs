//! SIMD int8 dot-product kernels with runtime dispatch.
//!
//! This crate provides architecture-specific implementations of the int8
//! dot product and picks, once per process, the best one the running CPU
//! supports.
//!
//! # Supported Architectures
//!
//! - **x86-64**: AVX-512 VNNI, AVX2
//! - **AArch64**: NEON
//! - **Other**: Portable fallback using the `wide` crate
//!
//! Float vectors have no accelerated tier; see `vecdot-core` for the
//! scalar kernels.
//!
//! # Runtime Dispatch
//!
//! CPU features are queried once and cached. Setting the
//! `VECDOT_DISABLE_SIMD` environment variable before the first query
//! forces the portable kernel.
//!
//! # Example
//!
//! ```
//! use vecdot_simd::{active_kernel, select, CapabilityFlags, KernelTier};
//!
//! let active = active_kernel();
//! println!("Selected kernel: {}", active.kernel().name);
//!
//! let a = vec![127i8; 16];
//! assert_eq!(active.call(&a, &a), 16 * 127 * 127);
//!
//! assert_eq!(select(&CapabilityFlags::NONE), KernelTier::Portable);
//! ```

mod detect;
pub mod dispatch;
pub mod kernels;

pub use detect::{capabilities, CapabilityFlags, DISABLE_SIMD_ENV};
pub use dispatch::{
    active_kernel, dispatch_state, select, simd_i8_kernels, ActiveKernel, DispatchState,
    KernelTier,
};
pub use kernels::{dot_i8_portable, PORTABLE_BLOCK};
