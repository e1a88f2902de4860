//! Single-grid smoothing entry points.
//!
//! Every function returns `BS_OK` once `output` is fully populated, or a
//! negative status code without touching `output`.

use std::slice;

use super::{checked_shape, overlaps, BS_ERR_NULL, BS_ERR_OVERLAP, BS_OK};
use crate::smoother::{self, ExecutionContext};

/// Validate the arguments of a single-grid call and run `f` on the slices.
///
/// # Safety
/// Non-null `input` and `output` must each point to `dim * dim` floats.
unsafe fn with_grid<F>(
    dim: i32,
    halfwidth: i32,
    input: *const f32,
    output: *mut f32,
    f: F,
) -> i32
where
    F: FnOnce(usize, usize, &[f32], &mut [f32]),
{
    if input.is_null() || output.is_null() {
        return BS_ERR_NULL;
    }
    let (dim, halfwidth) = match checked_shape(dim, halfwidth) {
        Ok(shape) => shape,
        Err(code) => return code,
    };
    let len = dim * dim;
    if overlaps(input, output, len) {
        return BS_ERR_OVERLAP;
    }

    let input = slice::from_raw_parts(input, len);
    let output = slice::from_raw_parts_mut(output, len);
    f(dim, halfwidth, input, output);
    BS_OK
}

/// Serial smoothing, rows outer.
///
/// # Safety
/// - `input` and `output` must point to `dim * dim` floats, or be null
#[no_mangle]
pub unsafe extern "C" fn bs_smooth_row_major(
    dim: i32,
    halfwidth: i32,
    input: *const f32,
    output: *mut f32,
) -> i32 {
    with_grid(dim, halfwidth, input, output, smoother::smooth_row_major)
}

/// Serial smoothing, columns outer.
///
/// # Safety
/// - `input` and `output` must point to `dim * dim` floats, or be null
#[no_mangle]
pub unsafe extern "C" fn bs_smooth_column_major(
    dim: i32,
    halfwidth: i32,
    input: *const f32,
    output: *mut f32,
) -> i32 {
    with_grid(dim, halfwidth, input, output, smoother::smooth_column_major)
}

/// Parallel smoothing over row ranges.
///
/// # Safety
/// - `ctx` must be a valid context pointer, or null
/// - `input` and `output` must point to `dim * dim` floats, or be null
#[no_mangle]
pub unsafe extern "C" fn bs_smooth_parallel_rows(
    ctx: *const ExecutionContext,
    dim: i32,
    halfwidth: i32,
    input: *const f32,
    output: *mut f32,
) -> i32 {
    if ctx.is_null() {
        return BS_ERR_NULL;
    }
    let ctx = &*ctx;
    with_grid(dim, halfwidth, input, output, |dim, h, input, output| {
        smoother::smooth_parallel_rows(ctx, dim, h, input, output)
    })
}

/// Parallel smoothing over column ranges.
///
/// # Safety
/// - `ctx` must be a valid context pointer, or null
/// - `input` and `output` must point to `dim * dim` floats, or be null
#[no_mangle]
pub unsafe extern "C" fn bs_smooth_parallel_columns(
    ctx: *const ExecutionContext,
    dim: i32,
    halfwidth: i32,
    input: *const f32,
    output: *mut f32,
) -> i32 {
    if ctx.is_null() {
        return BS_ERR_NULL;
    }
    let ctx = &*ctx;
    with_grid(dim, halfwidth, input, output, |dim, h, input, output| {
        smoother::smooth_parallel_columns(ctx, dim, h, input, output)
    })
}

/// Parallel smoothing over the flattened index range.
///
/// # Safety
/// - `ctx` must be a valid context pointer, or null
/// - `input` and `output` must point to `dim * dim` floats, or be null
#[no_mangle]
pub unsafe extern "C" fn bs_smooth_parallel_flattened(
    ctx: *const ExecutionContext,
    dim: i32,
    halfwidth: i32,
    input: *const f32,
    output: *mut f32,
) -> i32 {
    if ctx.is_null() {
        return BS_ERR_NULL;
    }
    let ctx = &*ctx;
    with_grid(dim, halfwidth, input, output, |dim, h, input, output| {
        smoother::smooth_parallel_flattened(ctx, dim, h, input, output)
    })
}
