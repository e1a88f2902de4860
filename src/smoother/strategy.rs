//! Traversal strategies and pipelines behind one calling convention.
//!
//! Serial strategies accept the execution context too and simply ignore it,
//! so a caller can sweep over every variant uniformly.

use super::grid::Grid;
use super::parallel::{
    smooth_parallel_columns, smooth_parallel_flattened, smooth_parallel_rows, ExecutionContext,
};
use super::pipeline::{pipeline_fused, pipeline_sequential};
use super::serial::{smooth_column_major, smooth_row_major};

/// A single-grid smoothing strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    RowMajor,
    ColumnMajor,
    ParallelRows,
    ParallelColumns,
    ParallelFlattened,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::RowMajor,
        Strategy::ColumnMajor,
        Strategy::ParallelRows,
        Strategy::ParallelColumns,
        Strategy::ParallelFlattened,
    ];

    /// Label used in benchmark output.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::RowMajor => "Serial YX",
            Strategy::ColumnMajor => "Serial XY",
            Strategy::ParallelRows => "Parallel YX",
            Strategy::ParallelColumns => "Parallel XY",
            Strategy::ParallelFlattened => "Parallel coalesced",
        }
    }

    pub fn is_parallel(self) -> bool {
        !matches!(self, Strategy::RowMajor | Strategy::ColumnMajor)
    }

    /// Smooth `input` into `output`.
    pub fn run(
        self,
        ctx: &ExecutionContext,
        dim: usize,
        halfwidth: usize,
        input: &[f32],
        output: &mut [f32],
    ) {
        match self {
            Strategy::RowMajor => smooth_row_major(dim, halfwidth, input, output),
            Strategy::ColumnMajor => smooth_column_major(dim, halfwidth, input, output),
            Strategy::ParallelRows => smooth_parallel_rows(ctx, dim, halfwidth, input, output),
            Strategy::ParallelColumns => {
                smooth_parallel_columns(ctx, dim, halfwidth, input, output)
            }
            Strategy::ParallelFlattened => {
                smooth_parallel_flattened(ctx, dim, halfwidth, input, output)
            }
        }
    }

    /// Smooth a grid into a freshly allocated one.
    pub fn apply(self, ctx: &ExecutionContext, halfwidth: usize, input: &Grid) -> Grid {
        let mut output = Grid::new(input.dim());
        self.run(
            ctx,
            input.dim(),
            halfwidth,
            input.cells(),
            output.cells_mut(),
        );
        output
    }
}

/// A two-grid pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pipeline {
    Sequential,
    Fused,
}

impl Pipeline {
    pub const ALL: [Pipeline; 2] = [Pipeline::Sequential, Pipeline::Fused];

    pub fn name(self) -> &'static str {
        match self {
            Pipeline::Sequential => "Program1",
            Pipeline::Fused => "Program2",
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn run(
        self,
        ctx: &ExecutionContext,
        dim: usize,
        halfwidth: usize,
        m3: &[f32],
        m4: &[f32],
        m5: &mut [f32],
        m6: &mut [f32],
    ) {
        match self {
            Pipeline::Sequential => pipeline_sequential(ctx, dim, halfwidth, m3, m4, m5, m6),
            Pipeline::Fused => pipeline_fused(ctx, dim, halfwidth, m3, m4, m5, m6),
        }
    }
}
