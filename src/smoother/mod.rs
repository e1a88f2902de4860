//! Box smoothing over square `f32` grids.
//!
//! `kernel` computes one output cell; `serial` and `parallel` are the
//! traversals that call it once per cell; `pipeline` applies it to two grids
//! at once. The FFI layer in `ffi/` calls these functions.

pub mod grid;
pub mod kernel;
pub mod parallel;
pub mod pipeline;
pub mod serial;
pub mod strategy;

pub use grid::{coords_of, in_bounds, index_of, Grid};
pub use kernel::{evaluate, window_cell_count};
pub use parallel::{
    chunk_len, smooth_parallel_columns, smooth_parallel_flattened, smooth_parallel_rows,
    ExecutionContext, Partition,
};
pub use pipeline::{pipeline_fused, pipeline_sequential};
pub use serial::{smooth_column_major, smooth_row_major};
pub use strategy::{Pipeline, Strategy};
