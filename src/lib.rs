//! Box Smoother - parallel box filtering of square `f32` grids
//!
//! Computes the local mean of every cell over a `(2h+1) x (2h+1)` window
//! clipped to the grid, with several interchangeable traversals (row-major,
//! column-major, row/column/flattened parallel splits) and two-grid
//! pipelines. Usable from Rust directly or through the C ABI in `ffi`.

pub mod error;
pub mod ffi;
pub mod harness;
pub mod smoother;

pub use error::SmoothError;
pub use smoother::{ExecutionContext, Grid, Pipeline, Strategy};
