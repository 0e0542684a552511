//! Dot products for vector similarity search.
//!
//! This library computes the inner product between a query vector and
//! candidate vectors, for `f32` embeddings and int8 quantized embeddings.
//! Int8 products run on the fastest kernel the CPU supports, chosen once
//! per process.
//!
//! # Quick Start
//!
//! ```
//! use vecdot::{dot_f32, dot_f32_fast, dot_i8, dot_i8_fast};
//!
//! let a = [1.0f32; 4];
//! assert_eq!(dot_f32(&a, &a), 4.0);
//! assert_eq!(dot_f32_fast(&a, &a), 4.0);
//!
//! // 16 is a multiple of every int8 kernel's block width.
//! let q = vec![127i8; 16];
//! assert_eq!(dot_i8_fast(&q, &q), dot_i8(&q, &q));
//! ```
//!
//! # Kernels
//!
//! | Function | Element | Kernel | Length requirement |
//! |----------|---------|--------|--------------------|
//! | [`dot_f32`] | `f32` | naive reference | none, truncates |
//! | [`dot_f32_fast`] | `f32` | unrolled, bounds-check free | multiple of 4 |
//! | [`dot_i8`] | `i8` | naive reference | none, truncates |
//! | [`dot_i8_fast`] | `i8` | selected SIMD tier | multiple of [`i8_fast_block`] (16 always works) |
//!
//! The `_fast` variants panic on a length mismatch or misaligned length;
//! [`try_dot_f32_fast`] and [`try_dot_i8_fast`] return a [`DotError`]
//! instead.
//!
//! # Measurement
//!
//! Every scalar variant is listed by [`list_f32_kernels`] and
//! [`list_i8_kernels`] with a stable name, for tests and benchmarks that
//! compare them:
//!
//! ```
//! let a = vec![0.25f32; 16];
//! for kernel in vecdot::list_f32_kernels() {
//!     println!("{}: {}", kernel.name, kernel.call(&a, &a));
//! }
//! ```
//!
//! # Performance
//!
//! ```
//! use vecdot::Backend;
//!
//! println!("Using: {}", Backend::description());
//! ```

mod api;
mod backend;

// Public API
pub use api::{
    dot_f32, dot_f32_fast, dot_i8, dot_i8_fast, i8_fast_block, init, list_f32_kernels,
    list_i8_kernels, list_i8_simd_kernels, try_dot_f32_fast, try_dot_i8_fast, F32_FAST_BLOCK,
};
pub use backend::{version_info, Backend};

// Re-export commonly used types at crate root
pub use vecdot_core::{DotError, DotF32, DotI8, Kernel, Result, MAX_I8_DIM};
pub use vecdot_simd::{
    capabilities, dispatch_state, select, ActiveKernel, CapabilityFlags, DispatchState,
    KernelTier, DISABLE_SIMD_ENV,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use super::{
        dot_f32, dot_f32_fast, dot_i8, dot_i8_fast, list_f32_kernels, list_i8_kernels, Backend,
        DotError, Kernel,
    };
}
