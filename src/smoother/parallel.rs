//! Fork-join traversals on a dedicated rayon pool.
//!
//! Each call opens one parallel region via `ThreadPool::install` and returns
//! only after every worker has joined, so the output is fully populated when
//! the function returns. The index space is split statically into at most
//! `workers` contiguous chunks; chunks never overlap, so workers write
//! disjoint output cells without any locking.

use std::marker::PhantomData;

use log::{debug, trace};
use rayon::prelude::*;

use super::grid::{coords_of, index_of};
use super::kernel::evaluate;
use crate::error::SmoothError;

/// How the index space of a parallel region is divided between workers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Partition {
    /// Contiguous ranges of rows (`y`).
    Rows,
    /// Contiguous ranges of columns (`x`).
    Columns,
    /// Contiguous ranges of the flat index `a = y * dim + x`.
    Flattened,
}

/// Worker pool handed explicitly to every parallel strategy.
pub struct ExecutionContext {
    workers: usize,
    thread_pool: rayon::ThreadPool,
}

/// Cells per chunk when `len` items are split across `workers`.
#[inline]
pub fn chunk_len(len: usize, workers: usize) -> usize {
    len.div_ceil(workers.max(1))
}

/// Output buffer shared across workers that write disjoint, strided cells.
///
/// Column partitions cannot be expressed as `chunks_mut` slices, so the
/// writers share a raw pointer instead.
struct DisjointCells<'a> {
    ptr: *mut f32,
    len: usize,
    _borrow: PhantomData<&'a mut [f32]>,
}

// SAFETY: every worker writes a distinct set of indices and nobody reads the
// buffer until the parallel region has joined.
unsafe impl Send for DisjointCells<'_> {}
unsafe impl Sync for DisjointCells<'_> {}

impl<'a> DisjointCells<'a> {
    fn new(cells: &'a mut [f32]) -> Self {
        DisjointCells {
            ptr: cells.as_mut_ptr(),
            len: cells.len(),
            _borrow: PhantomData,
        }
    }

    /// # Safety
    /// No other worker may write `idx` during the same parallel region.
    #[inline]
    unsafe fn write(&self, idx: usize, value: f32) {
        assert!(idx < self.len);
        *self.ptr.add(idx) = value;
    }
}

impl ExecutionContext {
    /// Build a pool with exactly `workers` threads.
    pub fn new(workers: usize) -> Result<Self, SmoothError> {
        if workers == 0 {
            return Err(SmoothError::InvalidWorkerCount(workers));
        }

        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("smoother-{i}"))
            .build()?;

        debug!("Built worker pool with {} threads", workers);

        Ok(ExecutionContext {
            workers,
            thread_pool,
        })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Evaluate `body(x, y)` for every cell of a `dim x dim` grid and store
    /// it at `output[y * dim + x]`, splitting the work by `partition`.
    pub fn parallel_for<F>(&self, dim: usize, partition: Partition, output: &mut [f32], body: F)
    where
        F: Fn(usize, usize) -> f32 + Sync,
    {
        debug_assert_eq!(output.len(), dim * dim);
        if output.is_empty() {
            return;
        }

        match partition {
            Partition::Rows => {
                let rows = chunk_len(dim, self.workers);
                trace!("Rows partition: {} rows per chunk, dim {}", rows, dim);

                self.thread_pool.install(|| {
                    output
                        .par_chunks_mut(rows * dim)
                        .enumerate()
                        .for_each(|(chunk, block)| {
                            let y_start = chunk * rows;
                            for (dy, row) in block.chunks_mut(dim).enumerate() {
                                let y = y_start + dy;
                                for (x, cell) in row.iter_mut().enumerate() {
                                    *cell = body(x, y);
                                }
                            }
                        });
                });
            }
            Partition::Columns => {
                let cols = chunk_len(dim, self.workers);
                let chunks = dim.div_ceil(cols);
                trace!("Columns partition: {} columns per chunk, dim {}", cols, dim);

                let cells = DisjointCells::new(output);
                self.thread_pool.install(|| {
                    (0..chunks).into_par_iter().for_each(|chunk| {
                        let x_start = chunk * cols;
                        let x_end = (x_start + cols).min(dim);
                        for x in x_start..x_end {
                            for y in 0..dim {
                                // SAFETY: column ranges of different chunks are disjoint.
                                unsafe { cells.write(index_of(dim, x, y), body(x, y)) };
                            }
                        }
                    });
                });
            }
            Partition::Flattened => {
                let span = chunk_len(dim * dim, self.workers);
                trace!("Flattened partition: {} cells per chunk, dim {}", span, dim);

                self.thread_pool.install(|| {
                    output
                        .par_chunks_mut(span)
                        .enumerate()
                        .for_each(|(chunk, block)| {
                            let start = chunk * span;
                            for (offset, cell) in block.iter_mut().enumerate() {
                                let (x, y) = coords_of(dim, start + offset);
                                *cell = body(x, y);
                            }
                        });
                });
            }
        }
    }

    /// Flattened traversal producing two outputs per index.
    ///
    /// `body(x, y)` returns the pair written to `out_a[a]` and `out_b[a]`;
    /// both are stored before moving to the next index.
    pub fn parallel_for_pair<F>(&self, dim: usize, out_a: &mut [f32], out_b: &mut [f32], body: F)
    where
        F: Fn(usize, usize) -> (f32, f32) + Sync,
    {
        debug_assert_eq!(out_a.len(), dim * dim);
        debug_assert_eq!(out_b.len(), dim * dim);
        if out_a.is_empty() {
            return;
        }

        let span = chunk_len(dim * dim, self.workers);
        trace!("Fused flattened partition: {} cells per chunk, dim {}", span, dim);

        self.thread_pool.install(|| {
            out_a
                .par_chunks_mut(span)
                .zip(out_b.par_chunks_mut(span))
                .enumerate()
                .for_each(|(chunk, (block_a, block_b))| {
                    let start = chunk * span;
                    let pairs = block_a.iter_mut().zip(block_b.iter_mut());
                    for (offset, (a, b)) in pairs.enumerate() {
                        let (x, y) = coords_of(dim, start + offset);
                        let (va, vb) = body(x, y);
                        *a = va;
                        *b = vb;
                    }
                });
        });
    }
}

/// Smooth with the row loop split across workers.
pub fn smooth_parallel_rows(
    ctx: &ExecutionContext,
    dim: usize,
    halfwidth: usize,
    input: &[f32],
    output: &mut [f32],
) {
    ctx.parallel_for(dim, Partition::Rows, output, |x, y| {
        evaluate(dim, halfwidth, x, y, input)
    });
}

/// Smooth with the column loop split across workers.
pub fn smooth_parallel_columns(
    ctx: &ExecutionContext,
    dim: usize,
    halfwidth: usize,
    input: &[f32],
    output: &mut [f32],
) {
    ctx.parallel_for(dim, Partition::Columns, output, |x, y| {
        evaluate(dim, halfwidth, x, y, input)
    });
}

/// Smooth over the flattened index space `0..dim*dim` ("coalesced" loop).
///
/// Gives finer, better balanced chunks than the row or column split when
/// `dim` is not a multiple of the worker count.
pub fn smooth_parallel_flattened(
    ctx: &ExecutionContext,
    dim: usize,
    halfwidth: usize,
    input: &[f32],
    output: &mut [f32],
) {
    ctx.parallel_for(dim, Partition::Flattened, output, |x, y| {
        evaluate(dim, halfwidth, x, y, input)
    });
}
