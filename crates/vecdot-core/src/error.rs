//! Error types for length preconditions.

use thiserror::Error;

/// Largest int8 vector length whose dot product cannot overflow `i32`.
///
/// The widest int8 product is `-128 * -128 = 16384`.
pub const MAX_I8_DIM: usize = (i32::MAX as usize) / (128 * 128);

/// Errors raised when a kernel's length precondition does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DotError {
    /// The two vectors have different lengths.
    #[error("length mismatch: {left} != {right}")]
    LengthMismatch { left: usize, right: usize },

    /// The vector length is not a multiple of the kernel's block width.
    #[error("length {len} is not a multiple of block width {block}")]
    NotBlockAligned { len: usize, block: usize },

    /// The int8 vector is long enough to overflow the i32 accumulator.
    #[error("length {len} exceeds int8 accumulator limit {max}")]
    TooLong { len: usize, max: usize },
}

/// Result type for checked dot products.
pub type Result<T> = std::result::Result<T, DotError>;

/// Check that both vectors have the same length.
pub fn check_equal(left: usize, right: usize) -> Result<()> {
    if left != right {
        return Err(DotError::LengthMismatch { left, right });
    }
    Ok(())
}

/// Check equal lengths that split evenly into `block`-element windows.
pub fn check_blocks(left: usize, right: usize, block: usize) -> Result<()> {
    check_equal(left, right)?;
    if left % block != 0 {
        return Err(DotError::NotBlockAligned { len: left, block });
    }
    Ok(())
}

/// Same as [`check_blocks`], plus the int8 accumulator bound.
pub fn check_i8_blocks(left: usize, right: usize, block: usize) -> Result<()> {
    check_blocks(left, right, block)?;
    if left > MAX_I8_DIM {
        return Err(DotError::TooLong {
            len: left,
            max: MAX_I8_DIM,
        });
    }
    Ok(())
}

/// Panic with the error message if `check` failed.
///
/// Optimized kernels must never read past the shorter vector, so a broken
/// precondition aborts the call before any element is touched.
#[inline]
#[track_caller]
pub fn require(check: Result<()>) {
    if let Err(err) = check {
        panic!("{err}");
    }
}
