//! Wall-clock benchmark of every strategy and pipeline.
//!
//! Runs the serial strategies once, then sweeps the worker count through
//! `1, 2, 4, ...` and times the parallel strategies and both pipelines at
//! each size. Input grids are `Grid::diagonal_ramp`.

use std::fmt;
use std::time::Instant;

use log::{debug, info};

use crate::error::SmoothError;
use crate::smoother::{ExecutionContext, Grid, Pipeline, Strategy};

/// Benchmark parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchConfig {
    /// Grid side length.
    pub dim: usize,
    /// Kernel half-width.
    pub halfwidth: usize,
    /// Upper bound of the worker-count sweep.
    pub max_workers: usize,
    /// Run the row-major smoother once before timing to warm the cache.
    pub warmup: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            dim: 6000,
            halfwidth: 2,
            max_workers: 32,
            warmup: true,
        }
    }
}

/// One measured run.
#[derive(Clone, Debug, PartialEq)]
pub struct Timing {
    /// Strategy or pipeline name as printed in the report.
    pub label: &'static str,
    /// Worker count of the run, `None` for the serial strategies.
    pub workers: Option<usize>,
    /// Elapsed wall-clock time.
    pub seconds: f64,
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} smoother took {:.6} seconds", self.label, self.seconds)
    }
}

/// Powers of two from 1 up to `max_workers` inclusive.
pub fn thread_sweep(max_workers: usize) -> Vec<usize> {
    std::iter::successors(Some(1usize), |&n| n.checked_mul(2))
        .take_while(|&n| n <= max_workers)
        .collect()
}

fn time<F: FnOnce()>(f: F) -> f64 {
    let start = Instant::now();
    f();
    start.elapsed().as_secs_f64()
}

/// Run the full benchmark and return every timing in execution order.
pub fn run_benchmark(config: &BenchConfig) -> Result<Vec<Timing>, SmoothError> {
    if config.dim == 0 {
        return Err(SmoothError::EmptyGrid);
    }
    if config.max_workers == 0 {
        return Err(SmoothError::InvalidWorkerCount(0));
    }

    let dim = config.dim;
    let h = config.halfwidth;
    info!(
        "Benchmarking {}x{} grid, halfwidth {}, up to {} workers",
        dim, dim, h, config.max_workers
    );

    let input = Grid::diagonal_ramp(dim);
    let mut output = Grid::new(dim);
    let mut timings = Vec::new();

    // Serial strategies ignore the context; one worker keeps the pool idle.
    let serial_ctx = ExecutionContext::new(1)?;

    if config.warmup {
        debug!("Warm-up pass");
        Strategy::RowMajor.run(&serial_ctx, dim, h, input.cells(), output.cells_mut());
    }

    for strategy in Strategy::ALL.into_iter().filter(|s| !s.is_parallel()) {
        let seconds =
            time(|| strategy.run(&serial_ctx, dim, h, input.cells(), output.cells_mut()));
        timings.push(Timing {
            label: strategy.name(),
            workers: None,
            seconds,
        });
    }

    let m3 = Grid::diagonal_ramp(dim);
    let m4 = Grid::diagonal_ramp(dim);
    let mut m5 = Grid::new(dim);
    let mut m6 = Grid::new(dim);

    for workers in thread_sweep(config.max_workers) {
        info!("Threads = {}", workers);
        let ctx = ExecutionContext::new(workers)?;

        for strategy in Strategy::ALL.into_iter().filter(|s| s.is_parallel()) {
            let seconds = time(|| strategy.run(&ctx, dim, h, input.cells(), output.cells_mut()));
            timings.push(Timing {
                label: strategy.name(),
                workers: Some(workers),
                seconds,
            });
        }

        for pipeline in Pipeline::ALL {
            let seconds = time(|| {
                pipeline.run(
                    &ctx,
                    dim,
                    h,
                    m3.cells(),
                    m4.cells(),
                    m5.cells_mut(),
                    m6.cells_mut(),
                )
            });
            timings.push(Timing {
                label: pipeline.name(),
                workers: Some(workers),
                seconds,
            });
        }
    }

    Ok(timings)
}
