//! Two-grid pipelines: smooth `m3 -> m5` and `m4 -> m6` with one half-width.

use super::kernel::evaluate;
use super::parallel::{smooth_parallel_rows, ExecutionContext};

/// Two full parallel passes, one per grid.
pub fn pipeline_sequential(
    ctx: &ExecutionContext,
    dim: usize,
    halfwidth: usize,
    m3: &[f32],
    m4: &[f32],
    m5: &mut [f32],
    m6: &mut [f32],
) {
    smooth_parallel_rows(ctx, dim, halfwidth, m3, m5);
    smooth_parallel_rows(ctx, dim, halfwidth, m4, m6);
}

/// One fused parallel pass over the flattened index space.
///
/// Each index computes `m5[a]` from `m3` and then `m6[a]` from `m4`, so
/// corresponding cells of both grids are processed together.
pub fn pipeline_fused(
    ctx: &ExecutionContext,
    dim: usize,
    halfwidth: usize,
    m3: &[f32],
    m4: &[f32],
    m5: &mut [f32],
    m6: &mut [f32],
) {
    ctx.parallel_for_pair(dim, m5, m6, |x, y| {
        (
            evaluate(dim, halfwidth, x, y, m3),
            evaluate(dim, halfwidth, x, y, m4),
        )
    });
}
