//! Two-grid pipeline entry points.

use std::slice;

use super::{checked_shape, overlaps, BS_ERR_NULL, BS_ERR_OVERLAP, BS_OK};
use crate::smoother::{self, ExecutionContext};

/// Validate a pipeline call and run `f` on the four slices.
///
/// `m3` and `m4` may be the same buffer; each output must be disjoint from
/// every other buffer.
///
/// # Safety
/// Non-null buffers must each point to `dim * dim` floats.
#[allow(clippy::too_many_arguments)]
unsafe fn with_grid_pair<F>(
    ctx: *const ExecutionContext,
    dim: i32,
    halfwidth: i32,
    m3: *const f32,
    m4: *const f32,
    m5: *mut f32,
    m6: *mut f32,
    f: F,
) -> i32
where
    F: FnOnce(&ExecutionContext, usize, usize, &[f32], &[f32], &mut [f32], &mut [f32]),
{
    if ctx.is_null() || m3.is_null() || m4.is_null() || m5.is_null() || m6.is_null() {
        return BS_ERR_NULL;
    }
    let (dim, halfwidth) = match checked_shape(dim, halfwidth) {
        Ok(shape) => shape,
        Err(code) => return code,
    };
    let len = dim * dim;
    let outputs_clash = overlaps(m5, m6, len)
        || [m3, m4]
            .iter()
            .any(|&input| overlaps(input, m5, len) || overlaps(input, m6, len));
    if outputs_clash {
        return BS_ERR_OVERLAP;
    }

    f(
        &*ctx,
        dim,
        halfwidth,
        slice::from_raw_parts(m3, len),
        slice::from_raw_parts(m4, len),
        slice::from_raw_parts_mut(m5, len),
        slice::from_raw_parts_mut(m6, len),
    );
    BS_OK
}

/// Smooth `m3 -> m5` and `m4 -> m6` as two separate parallel passes.
///
/// # Safety
/// - `ctx` must be a valid context pointer, or null
/// - every buffer must point to `dim * dim` floats, or be null
#[no_mangle]
pub unsafe extern "C" fn bs_pipeline_sequential(
    ctx: *const ExecutionContext,
    dim: i32,
    halfwidth: i32,
    m3: *const f32,
    m4: *const f32,
    m5: *mut f32,
    m6: *mut f32,
) -> i32 {
    with_grid_pair(ctx, dim, halfwidth, m3, m4, m5, m6, smoother::pipeline_sequential)
}

/// Smooth `m3 -> m5` and `m4 -> m6` in one fused parallel pass.
///
/// # Safety
/// - `ctx` must be a valid context pointer, or null
/// - every buffer must point to `dim * dim` floats, or be null
#[no_mangle]
pub unsafe extern "C" fn bs_pipeline_fused(
    ctx: *const ExecutionContext,
    dim: i32,
    halfwidth: i32,
    m3: *const f32,
    m4: *const f32,
    m5: *mut f32,
    m6: *mut f32,
) -> i32 {
    with_grid_pair(ctx, dim, halfwidth, m3, m4, m5, m6, smoother::pipeline_fused)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi::{bs_create_context, bs_destroy_context};
    use std::ptr;

    #[test]
    fn test_pipelines_via_ffi() {
        let dim = 10usize;
        let m3: Vec<f32> = (0..dim * dim).map(|i| (i % 7) as f32).collect();
        let m4: Vec<f32> = (0..dim * dim).map(|i| (i / 3) as f32).collect();

        let ctx = bs_create_context(4);
        assert!(!ctx.is_null());

        let mut seq5 = vec![0.0f32; dim * dim];
        let mut seq6 = vec![0.0f32; dim * dim];
        let mut fused5 = vec![0.0f32; dim * dim];
        let mut fused6 = vec![0.0f32; dim * dim];

        unsafe {
            let status = bs_pipeline_sequential(
                ctx,
                dim as i32,
                2,
                m3.as_ptr(),
                m4.as_ptr(),
                seq5.as_mut_ptr(),
                seq6.as_mut_ptr(),
            );
            assert_eq!(status, BS_OK);

            let status = bs_pipeline_fused(
                ctx,
                dim as i32,
                2,
                m3.as_ptr(),
                m4.as_ptr(),
                fused5.as_mut_ptr(),
                fused6.as_mut_ptr(),
            );
            assert_eq!(status, BS_OK);

            bs_destroy_context(ctx);
        }

        assert_eq!(seq5, fused5);
        assert_eq!(seq6, fused6);
    }

    #[test]
    fn test_shared_input_allowed() {
        let m3 = vec![2.0f32; 9];
        let mut m5 = vec![0.0f32; 9];
        let mut m6 = vec![0.0f32; 9];
        let ctx = bs_create_context(2);

        unsafe {
            let status = bs_pipeline_fused(
                ctx,
                3,
                1,
                m3.as_ptr(),
                m3.as_ptr(),
                m5.as_mut_ptr(),
                m6.as_mut_ptr(),
            );
            assert_eq!(status, BS_OK);
            bs_destroy_context(ctx);
        }

        assert!(m5.iter().chain(m6.iter()).all(|&v| v == 2.0));
    }

    #[test]
    fn test_aliased_outputs_rejected() {
        let m3 = vec![1.0f32; 4];
        let m4 = vec![1.0f32; 4];
        let mut out = vec![0.0f32; 4];
        let ctx = bs_create_context(1);

        unsafe {
            let out_ptr = out.as_mut_ptr();
            let status =
                bs_pipeline_sequential(ctx, 2, 0, m3.as_ptr(), m4.as_ptr(), out_ptr, out_ptr);
            assert_eq!(status, BS_ERR_OVERLAP);

            let status = bs_pipeline_fused(
                ctx,
                2,
                0,
                m3.as_ptr(),
                m4.as_ptr(),
                m3.as_ptr() as *mut f32,
                out_ptr,
            );
            assert_eq!(status, BS_ERR_OVERLAP);
            bs_destroy_context(ctx);
        }
    }

    #[test]
    fn test_null_pointer_safety() {
        let m = vec![0.0f32; 4];
        let mut out = vec![0.0f32; 4];
        let mut out2 = vec![0.0f32; 4];

        unsafe {
            let status = bs_pipeline_fused(
                ptr::null(),
                2,
                0,
                m.as_ptr(),
                m.as_ptr(),
                out.as_mut_ptr(),
                out2.as_mut_ptr(),
            );
            assert_eq!(status, BS_ERR_NULL);
        }
    }
}
