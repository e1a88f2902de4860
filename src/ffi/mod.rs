//! C FFI layer.
//!
//! Exports C ABI functions so the smoother can be driven from C or any
//! language with a C FFI. All functions are marked with `#[no_mangle]` and use
//! `extern "C"`.
//!
//! The actual logic is in the `smoother` module. These functions are thin
//! wrappers that handle null checks, argument validation, and raw-pointer to
//! slice conversions. Grids are `dim * dim` row-major `float` buffers.

pub mod context;
pub mod pipeline;
pub mod smooth;

pub use context::{bs_context_workers, bs_create_context, bs_destroy_context};
pub use pipeline::{bs_pipeline_fused, bs_pipeline_sequential};
pub use smooth::{
    bs_smooth_column_major, bs_smooth_parallel_columns, bs_smooth_parallel_flattened,
    bs_smooth_parallel_rows, bs_smooth_row_major,
};

/// Call succeeded.
pub const BS_OK: i32 = 0;
/// A required pointer was null.
pub const BS_ERR_NULL: i32 = -1;
/// `dim <= 0` or `halfwidth < 0`.
pub const BS_ERR_ARGS: i32 = -2;
/// An output buffer overlaps another buffer of the same call.
pub const BS_ERR_OVERLAP: i32 = -3;

/// Validate `dim` and `halfwidth`, returning them as `usize`.
fn checked_shape(dim: i32, halfwidth: i32) -> Result<(usize, usize), i32> {
    if dim <= 0 || halfwidth < 0 {
        return Err(BS_ERR_ARGS);
    }
    Ok((dim as usize, halfwidth as usize))
}

/// Whether two `len`-element float buffers share any memory.
fn overlaps(a: *const f32, b: *const f32, len: usize) -> bool {
    let a_start = a as usize;
    let b_start = b as usize;
    let bytes = len * std::mem::size_of::<f32>();
    a_start < b_start + bytes && b_start < a_start + bytes
}
